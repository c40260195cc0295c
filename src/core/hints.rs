//! Per-letter hint state for keyboard coloring

use super::feedback::{Feedback, Mark};
use super::word::{ALPHABET_SIZE, Word, letter_index};

/// Best mark seen so far for each letter `a..=z`
///
/// Marks only ever upgrade (`Absent < Present < Correct`), so a letter once
/// shown green stays green.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    marks: [Option<Mark>; ALPHABET_SIZE],
}

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the hint state
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            let slot = &mut self.marks[letter_index(letter)];
            *slot = (*slot).max(Some(mark));
        }
    }

    /// Best mark for `letter`, case-insensitive; `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.marks[letter_index(letter as u8)]
        } else {
            None
        }
    }

    /// Iterate `(letter, mark)` for every letter that has a hint
    pub fn iter(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        (b'a'..=b'z')
            .zip(self.marks.iter())
            .filter_map(|(letter, mark)| mark.map(|m| (char::from(letter), m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute_feedback;

    fn record(hints: &mut LetterHints, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        hints.record(&guess, &compute_feedback(&guess, &secret));
    }

    #[test]
    fn hints_start_unset() {
        let hints = LetterHints::new();
        assert_eq!(hints.get('a'), None);
        assert_eq!(hints.iter().count(), 0);
    }

    #[test]
    fn hints_take_best_mark_within_one_guess() {
        // LOLLY vs ALLOT: L is yellow, green and gray in the same guess
        let mut hints = LetterHints::new();
        record(&mut hints, "lolly", "allot");
        assert_eq!(hints.get('l'), Some(Mark::Correct));
        assert_eq!(hints.get('o'), Some(Mark::Present));
        assert_eq!(hints.get('y'), Some(Mark::Absent));
        assert_eq!(hints.get('Y'), Some(Mark::Absent));
    }

    #[test]
    fn hints_never_downgrade() {
        let mut hints = LetterHints::new();
        record(&mut hints, "crane", "crisp");
        assert_eq!(hints.get('c'), Some(Mark::Correct));

        // C in a wrong position would be yellow on its own
        record(&mut hints, "occur", "crisp");
        assert_eq!(hints.get('c'), Some(Mark::Correct));
        assert_eq!(hints.get('r'), Some(Mark::Correct));
    }

    #[test]
    fn hints_upgrade_from_present_to_correct() {
        let mut hints = LetterHints::new();
        record(&mut hints, "earth", "crane");
        assert_eq!(hints.get('a'), Some(Mark::Present));

        record(&mut hints, "brave", "crane");
        assert_eq!(hints.get('a'), Some(Mark::Correct));
    }

    #[test]
    fn hints_ignore_non_letters() {
        let hints = LetterHints::new();
        assert_eq!(hints.get('1'), None);
        assert_eq!(hints.get('é'), None);
    }
}
