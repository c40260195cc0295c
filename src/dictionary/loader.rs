//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files or embedded constants.
//! Every non-blank line must be a 5-letter alphabetic word; anything else is
//! rejected with the offending line number instead of being silently skipped.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Parse newline-delimited text into words
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns [`DictionaryError::Malformed`] for the first line that is not a
/// valid 5-letter word.
///
/// # Examples
/// ```
/// use wordle_tui::dictionary::loader::parse_words;
///
/// let words = parse_words("Crane\n\n slate \n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
///
/// assert!(parse_words("crane\ncranes\n").is_err());
/// ```
pub fn parse_words(content: &str) -> Result<Vec<Word>, DictionaryError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Word::new(line).map_err(|reason| DictionaryError::Malformed {
                line: index + 1,
                entry: line.trim().to_string(),
                reason,
            })
        })
        .collect()
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains a malformed entry,
/// or holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_tui::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::new(parse_words(&content)?)?;
    log::debug!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Build a dictionary from a string slice
///
/// # Errors
///
/// Returns an error if any entry is malformed or the slice is empty.
///
/// # Examples
/// ```
/// use wordle_tui::core::Word;
/// use wordle_tui::dictionary::loader::from_slice;
///
/// let dictionary = from_slice(&["crane", "slate"]).unwrap();
/// assert!(dictionary.contains(&Word::new("SLATE").unwrap()));
/// ```
pub fn from_slice(slice: &[&str]) -> Result<Dictionary, DictionaryError> {
    let words = slice
        .iter()
        .enumerate()
        .map(|(index, &s)| {
            Word::new(s).map_err(|reason| DictionaryError::Malformed {
                line: index + 1,
                entry: s.to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Dictionary::new(words)
}
