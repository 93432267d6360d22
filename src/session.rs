//! Per-process tally of finished matches.

use crate::games::mastermind::Outcome;
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Win counts for the matches played in this run.
///
/// Lives only as long as the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SessionStats {
    /// Matches finished.
    matches: usize,
    /// Matches the breaker won.
    breaker_wins: usize,
    /// Matches the maker won, concessions included.
    maker_wins: usize,
    /// Matches the breaker gave up.
    concessions: usize,
    /// Attempts used across the breaker's wins.
    winning_attempts: usize,
}

impl SessionStats {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished match.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) {
        self.matches += 1;
        if let Outcome::BreakerWon { attempts } = outcome {
            self.breaker_wins += 1;
            self.winning_attempts += attempts;
        }
        if outcome.maker_won() {
            self.maker_wins += 1;
        }
        if outcome.is_concession() {
            self.concessions += 1;
        }
    }

    /// Mean attempts per breaker win.
    pub fn average_winning_attempts(&self) -> Option<f64> {
        (self.breaker_wins > 0).then(|| self.winning_attempts as f64 / self.breaker_wins as f64)
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} matches: breaker {} / maker {} ({} conceded)",
            self.matches, self.breaker_wins, self.maker_wins, self.concessions
        )?;
        if let Some(avg) = self.average_winning_attempts() {
            write!(f, ", {:.1} attempts per solve", avg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::MakerVictory;

    #[test]
    fn test_record_outcomes() {
        let mut stats = SessionStats::new();
        stats.record(&Outcome::BreakerWon { attempts: 3 });
        stats.record(&Outcome::BreakerWon { attempts: 5 });
        stats.record(&Outcome::MakerWon(MakerVictory::AttemptsExhausted));
        stats.record(&Outcome::MakerWon(MakerVictory::BreakerConceded));

        assert_eq!(*stats.matches(), 4);
        assert_eq!(*stats.breaker_wins(), 2);
        assert_eq!(*stats.maker_wins(), 2);
        assert_eq!(*stats.concessions(), 1);
        assert_eq!(stats.average_winning_attempts(), Some(4.0));
    }

    #[test]
    fn test_empty_summary() {
        let stats = SessionStats::new();
        assert_eq!(stats.average_winning_attempts(), None);
        assert_eq!(
            stats.to_string(),
            "0 matches: breaker 0 / maker 0 (0 conceded)"
        );
    }
}
