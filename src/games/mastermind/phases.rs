//! Match outcomes and status.

use serde::{Deserialize, Serialize};

/// Why the maker won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MakerVictory {
    /// The breaker ran out of attempts.
    AttemptsExhausted,
    /// The breaker gave up.
    BreakerConceded,
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The breaker found the secret.
    BreakerWon {
        /// Attempts used, including the winning one.
        attempts: usize,
    },
    /// The secret survived.
    MakerWon(MakerVictory),
}

impl Outcome {
    /// Returns true if the breaker cracked the code.
    pub fn breaker_won(&self) -> bool {
        matches!(self, Outcome::BreakerWon { .. })
    }

    /// Returns true if the maker kept the code.
    pub fn maker_won(&self) -> bool {
        matches!(self, Outcome::MakerWon(_))
    }

    /// Returns true if the breaker gave up.
    pub fn is_concession(&self) -> bool {
        matches!(self, Outcome::MakerWon(MakerVictory::BreakerConceded))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::BreakerWon { attempts: 1 } => {
                write!(f, "The breaker cracked the code on the first attempt!")
            }
            Outcome::BreakerWon { attempts } => {
                write!(f, "The breaker cracked the code in {} attempts!", attempts)
            }
            Outcome::MakerWon(MakerVictory::AttemptsExhausted) => {
                write!(f, "The maker wins: no attempts left")
            }
            Outcome::MakerWon(MakerVictory::BreakerConceded) => {
                write!(f, "The maker wins: the breaker gave up")
            }
        }
    }
}

/// Status of a match, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// No terminal outcome yet.
    InProgress,
    /// Terminal outcome reached.
    Finished(Outcome),
}

impl MatchStatus {
    /// Returns the outcome if the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::Finished(outcome) => Some(*outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            Outcome::BreakerWon { attempts: 1 }.to_string(),
            "The breaker cracked the code on the first attempt!"
        );
        assert!(
            Outcome::BreakerWon { attempts: 5 }
                .to_string()
                .contains("5 attempts")
        );
        assert!(
            Outcome::MakerWon(MakerVictory::BreakerConceded)
                .to_string()
                .contains("gave up")
        );
    }

    #[test]
    fn test_concession_is_maker_win() {
        let outcome = Outcome::MakerWon(MakerVictory::BreakerConceded);
        assert!(outcome.maker_won());
        assert!(outcome.is_concession());
        assert!(!outcome.breaker_won());
    }
}
