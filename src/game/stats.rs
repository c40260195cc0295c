//! Session statistics
//!
//! Kept in memory for the lifetime of the process only.

use super::event::Outcome;
use super::state::MAX_ATTEMPTS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses; index 0 is a first-try win
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl SessionStats {
    /// Count a finished game
    pub fn record(&mut self, outcome: &Outcome) {
        self.games_played += 1;

        if outcome.is_win() {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(slot) = outcome
                .attempts
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn outcome(status: GameStatus, attempts: usize) -> Outcome {
        Outcome {
            status,
            secret: "crane".to_string(),
            attempts,
        }
    }

    #[test]
    fn empty_stats() {
        let stats = SessionStats::default();
        assert_eq!(stats.games_played, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = SessionStats::default();
        stats.record(&outcome(GameStatus::Won, 3));
        stats.record(&outcome(GameStatus::Won, 1));
        stats.record(&outcome(GameStatus::Lost, 6));
        stats.record(&outcome(GameStatus::Won, 3));

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [1, 0, 2, 0, 0, 0]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
