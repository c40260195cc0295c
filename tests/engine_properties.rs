use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_tui::core::{Feedback, Mark, Word, compute_feedback};
use wordle_tui::dictionary::Dictionary;
use wordle_tui::dictionary::loader::from_slice;
use wordle_tui::game::{Event, GameStatus, GuessEngine, MAX_ATTEMPTS};

const WORDS: &[&str] = &[
    "allot", "lolly", "array", "crane", "slate", "geese", "creep", "speed", "erase", "robot",
    "floor", "llama", "eerie", "mamma", "sassy",
];

/// Seven guesses, enough to end any game
const MISSES: &[&str] = &[
    "crane", "slate", "geese", "creep", "speed", "robot", "erase",
];

fn dictionary() -> Dictionary {
    from_slice(WORDS).unwrap()
}

fn engine<'a>(dictionary: &'a Dictionary, secret: &str) -> GuessEngine<'a> {
    GuessEngine::with_secret(dictionary, StdRng::seed_from_u64(11), secret).unwrap()
}

fn enter(engine: &mut GuessEngine<'_>, word: &str) -> Vec<Event> {
    for ch in word.chars() {
        engine.type_letter(ch);
    }
    engine.submit()
}

#[test]
fn hits_never_exceed_letter_count_in_secret() {
    let dictionary = dictionary();

    for secret in dictionary.words() {
        for guess in dictionary.words() {
            let feedback = compute_feedback(guess, secret);
            for letter in b'a'..=b'z' {
                let hits = guess
                    .chars()
                    .iter()
                    .zip(feedback.marks())
                    .filter(|&(&g, &m)| g == letter && m != Mark::Absent)
                    .count();
                assert!(
                    hits <= usize::from(secret.count_of(letter)),
                    "{guess} vs {secret}: '{}' marked {hits} times",
                    char::from(letter)
                );
            }
        }
    }
}

#[test]
fn correct_marks_match_positions() {
    let dictionary = dictionary();

    for secret in dictionary.words() {
        for guess in dictionary.words() {
            let feedback = compute_feedback(guess, secret);
            for i in 0..5 {
                assert_eq!(
                    feedback.mark_at(i) == Mark::Correct,
                    guess.char_at(i) == secret.char_at(i),
                    "{guess} vs {secret} at {i}"
                );
            }
        }
    }
}

#[test]
fn secret_itself_always_wins() {
    let dictionary = dictionary();

    for secret in WORDS {
        let mut engine = engine(&dictionary, secret);
        let events = enter(&mut engine, secret);

        assert_eq!(
            events.first(),
            Some(&Event::RowScored {
                row: 0,
                feedback: Feedback::PERFECT
            })
        );
        assert_eq!(engine.status(), GameStatus::Won);
    }
}

#[test]
fn array_wins_in_one() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary, "array");
    enter(&mut engine, "array");

    let outcome = engine.outcome().unwrap();
    assert!(outcome.is_win());
    assert_eq!(outcome.attempts, 1);
    assert_eq!(outcome.secret, "array");
}

#[test]
fn lolly_against_allot() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary, "allot");
    let events = enter(&mut engine, "lolly");

    assert_eq!(
        events,
        vec![Event::RowScored {
            row: 0,
            feedback: Feedback::new([
                Mark::Present,
                Mark::Present,
                Mark::Correct,
                Mark::Absent,
                Mark::Absent,
            ]),
        }]
    );
}

#[test]
fn six_misses_lose_on_the_sixth() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary, "allot");
    let misses = ["crane", "slate", "geese", "creep", "speed", "robot"];

    for (i, guess) in misses.iter().enumerate() {
        assert_eq!(engine.status(), GameStatus::InProgress);
        let events = enter(&mut engine, guess);
        assert_eq!(engine.state().attempts(), i + 1);
        assert_eq!(
            matches!(events.last(), Some(Event::GameOver(_))),
            i + 1 == MAX_ATTEMPTS
        );
    }

    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn no_ops_preserve_row_and_status() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary, "allot");
    enter(&mut engine, "crane");

    assert_eq!(engine.back(), None);
    for ch in "slatex".chars() {
        engine.type_letter(ch);
    }

    assert_eq!(engine.state().input(), "slate");
    assert_eq!(engine.state().row(), 1);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn invalid_word_changes_nothing() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary, "allot");
    enter(&mut engine, "crane");

    let before = engine.state().clone();
    let events = enter(&mut engine, "qwert");

    assert_eq!(events, vec![Event::InvalidWord]);
    assert_eq!(engine.state().input(), "qwert");
    assert_eq!(engine.state().row(), before.row());
    assert_eq!(engine.state().history(), before.history());
    assert_eq!(engine.state().hints(), before.hints());
}

#[test]
fn hints_never_downgrade_over_a_game() {
    let dictionary = dictionary();
    let mut engine = engine(&dictionary, "llama");
    let mut best: Vec<Option<Mark>> = vec![None; 26];

    for guess in ["allot", "lolly", "mamma", "array", "slate", "llama"] {
        enter(&mut engine, guess);
        let hints = engine.state().hints();

        for (i, letter) in ('a'..='z').enumerate() {
            let now = hints.get(letter);
            assert!(now >= best[i], "'{letter}' downgraded after {guess}");
            best[i] = now;
        }
    }

    assert_eq!(engine.state().hints().get('l'), Some(Mark::Correct));
    assert_eq!(engine.status(), GameStatus::Won);
}

#[test]
fn seeded_restarts_are_reproducible() {
    let dictionary = dictionary();
    let secrets = |seed: u64| {
        let mut engine = GuessEngine::new(&dictionary, StdRng::seed_from_u64(seed));
        (0..5)
            .map(|_| {
                // Reveal by losing on purpose
                for word in MISSES {
                    enter(&mut engine, word);
                }
                let secret = engine.revealed_secret().map(Word::to_string);
                engine.restart();
                secret
            })
            .collect::<Vec<_>>()
    };

    let first = secrets(2024);
    assert_eq!(first, secrets(2024));
    assert!(first.iter().all(Option::is_some));
}
