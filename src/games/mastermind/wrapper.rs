//! Runtime board wrapper for typestate phases.

use super::action::{BoardError, BoardPhase};
use super::phases::Outcome;
use super::snapshot::BoardSnapshot;
use super::typestate::{BoardFinished, BoardInPlay, BoardSetup};
use super::{Attempt, Sequence};
use crate::settings::{MatchSettings, SettingsError};
use tracing::{instrument, warn};

/// A board in any phase.
///
/// Typestate phases catch misuse at compile time; this wrapper is for
/// callers that hold the board across phases at runtime. Operations
/// called in the wrong phase fail with [`BoardError::InvalidState`] and
/// every failed call leaves the board as it was.
#[derive(Debug, Clone)]
pub enum AnyBoard {
    /// Waiting for the secret.
    AwaitingSecret(BoardSetup),
    /// Accepting guesses.
    InPlay(BoardInPlay),
    /// Outcome decided.
    Finished(BoardFinished),
}

impl From<BoardSetup> for AnyBoard {
    fn from(board: BoardSetup) -> Self {
        AnyBoard::AwaitingSecret(board)
    }
}

impl From<BoardInPlay> for AnyBoard {
    fn from(board: BoardInPlay) -> Self {
        AnyBoard::InPlay(board)
    }
}

impl From<BoardFinished> for AnyBoard {
    fn from(board: BoardFinished) -> Self {
        AnyBoard::Finished(board)
    }
}

impl AnyBoard {
    /// Creates a board awaiting its secret.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if any setting is out of bounds.
    #[instrument]
    pub fn new(settings: &MatchSettings) -> Result<Self, SettingsError> {
        Ok(BoardSetup::new(settings)?.into())
    }

    /// Current phase.
    pub fn phase(&self) -> BoardPhase {
        match self {
            AnyBoard::AwaitingSecret(_) => BoardPhase::AwaitingSecret,
            AnyBoard::InPlay(_) => BoardPhase::InPlay,
            AnyBoard::Finished(_) => BoardPhase::Finished,
        }
    }

    /// Returns the match settings.
    pub fn settings(&self) -> &MatchSettings {
        match self {
            AnyBoard::AwaitingSecret(board) => board.settings(),
            AnyBoard::InPlay(board) => board.settings(),
            AnyBoard::Finished(board) => board.settings(),
        }
    }

    /// Installs the secret. Legal only while awaiting it.
    #[instrument(skip_all)]
    pub fn install_secret(&mut self, secret: Sequence) -> Result<(), BoardError> {
        let phase = self.phase();
        match self {
            AnyBoard::AwaitingSecret(setup) => {
                let board = setup.clone().install_secret(secret)?;
                *self = board.into();
                Ok(())
            }
            _ => Err(invalid_state("install a secret", phase)),
        }
    }

    /// Records a guess. Legal only while in play.
    #[instrument(skip_all)]
    pub fn record_attempt(&mut self, guess: Sequence) -> Result<&Attempt, BoardError> {
        let phase = self.phase();
        match self {
            AnyBoard::InPlay(board) => board.record_attempt(guess),
            _ => Err(invalid_state("record an attempt", phase)),
        }
    }

    /// Declares the outcome. Legal only while in play.
    #[instrument(skip(self))]
    pub fn conclude(&mut self, outcome: Outcome) -> Result<(), BoardError> {
        let phase = self.phase();
        match self {
            AnyBoard::InPlay(board) => {
                let finished = board.clone().finish(outcome)?;
                *self = finished.into();
                Ok(())
            }
            _ => Err(invalid_state("conclude the match", phase)),
        }
    }

    /// Outcome the rules derive from the history while in play, or the
    /// declared outcome once finished.
    pub fn judge(&self) -> Option<Outcome> {
        match self {
            AnyBoard::AwaitingSecret(_) => None,
            AnyBoard::InPlay(board) => board.judge(),
            AnyBoard::Finished(board) => Some(*board.outcome()),
        }
    }

    /// Attempts recorded so far.
    pub fn attempts_inserted(&self) -> usize {
        self.attempts().len()
    }

    /// Attempts still available.
    pub fn left_attempts(&self) -> usize {
        match self {
            AnyBoard::AwaitingSecret(board) => *board.settings().max_attempts(),
            AnyBoard::InPlay(board) => board.left_attempts(),
            AnyBoard::Finished(board) => board.left_attempts(),
        }
    }

    /// Attempt history in order.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            AnyBoard::AwaitingSecret(_) => &[],
            AnyBoard::InPlay(board) => board.attempts(),
            AnyBoard::Finished(board) => board.attempts(),
        }
    }

    /// The secret, only once the match is finished.
    pub fn secret(&self) -> Option<&Sequence> {
        match self {
            AnyBoard::Finished(board) => Some(board.secret()),
            _ => None,
        }
    }

    /// The outcome, only once the match is finished.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            AnyBoard::Finished(board) => Some(board.outcome()),
            _ => None,
        }
    }

    /// Returns true if the match is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyBoard::Finished(_))
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyBoard::AwaitingSecret(_) => "Waiting for the maker's secret".to_string(),
            AnyBoard::InPlay(board) => format!(
                "In progress. {} of {} attempts left.",
                board.left_attempts(),
                board.settings().max_attempts()
            ),
            AnyBoard::Finished(board) => format!("Game over. {}", board.message()),
        }
    }

    /// Read-only view; carries the secret only once finished.
    pub fn snapshot(&self) -> BoardSnapshot {
        match self {
            AnyBoard::AwaitingSecret(board) => BoardSnapshot::new(
                board.settings().clone(),
                Vec::new(),
                *board.settings().max_attempts(),
                super::MatchStatus::InProgress,
                None,
            ),
            AnyBoard::InPlay(board) => board.snapshot(),
            AnyBoard::Finished(board) => board.snapshot(),
        }
    }

    /// Unwraps the finished board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] if the match is not over.
    pub fn into_finished(self) -> Result<BoardFinished, BoardError> {
        match self {
            AnyBoard::Finished(board) => Ok(board),
            other => Err(invalid_state("report a result", other.phase())),
        }
    }
}

fn invalid_state(operation: &'static str, phase: BoardPhase) -> BoardError {
    warn!(operation, %phase, "Operation rejected in current phase");
    BoardError::InvalidState { operation, phase }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::{MakerVictory, Peg};

    fn secret() -> Sequence {
        Sequence::new(vec![Peg::Blue, Peg::Blue, Peg::Orange, Peg::Red])
    }

    #[test]
    fn test_record_before_secret_rejected() {
        let mut board = AnyBoard::new(&MatchSettings::default()).unwrap();
        let err = board.record_attempt(secret()).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidState {
                operation: "record an attempt",
                phase: BoardPhase::AwaitingSecret
            }
        );
        assert_eq!(board.left_attempts(), 9);
    }

    #[test]
    fn test_secret_installed_once() {
        let mut board = AnyBoard::new(&MatchSettings::default()).unwrap();
        board.install_secret(secret()).unwrap();
        assert_eq!(board.phase(), BoardPhase::InPlay);
        assert!(matches!(
            board.install_secret(secret()),
            Err(BoardError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_bad_secret_leaves_board_waiting() {
        let mut board = AnyBoard::new(&MatchSettings::default()).unwrap();
        let short = Sequence::new(vec![Peg::Red]);
        assert!(matches!(
            board.install_secret(short),
            Err(BoardError::InvalidLength { .. })
        ));
        assert_eq!(board.phase(), BoardPhase::AwaitingSecret);
        assert!(board.install_secret(secret()).is_ok());
    }

    #[test]
    fn test_secret_hidden_until_finished() {
        let mut board = AnyBoard::new(&MatchSettings::default()).unwrap();
        board.install_secret(secret()).unwrap();
        assert!(board.secret().is_none());
        assert!(board.snapshot().secret().is_none());

        board
            .conclude(Outcome::MakerWon(MakerVictory::BreakerConceded))
            .unwrap();
        assert_eq!(board.secret(), Some(&secret()));
        assert_eq!(board.snapshot().secret(), &Some(secret()));
    }

    #[test]
    fn test_finished_board_rejects_attempts() {
        let mut board = AnyBoard::new(&MatchSettings::default()).unwrap();
        board.install_secret(secret()).unwrap();
        board.record_attempt(secret()).unwrap();
        let outcome = board.judge().unwrap();
        board.conclude(outcome).unwrap();

        assert!(board.is_over());
        assert!(matches!(
            board.record_attempt(secret()),
            Err(BoardError::InvalidState {
                phase: BoardPhase::Finished,
                ..
            })
        ));
        assert_eq!(board.attempts_inserted(), 1);
        assert!(board.status_string().starts_with("Game over"));
    }

    #[test]
    fn test_conclude_rejects_contradicting_outcome() {
        let mut board = AnyBoard::new(&MatchSettings::default()).unwrap();
        board.install_secret(secret()).unwrap();
        let result = board.conclude(Outcome::BreakerWon { attempts: 1 });
        assert!(matches!(result, Err(BoardError::InvariantViolation(_))));
        assert_eq!(board.phase(), BoardPhase::InPlay);

        board.record_attempt(secret()).unwrap();
        let result = board.conclude(Outcome::MakerWon(MakerVictory::BreakerConceded));
        assert!(matches!(result, Err(BoardError::InvariantViolation(_))));
        assert_eq!(board.phase(), BoardPhase::InPlay);
        assert_eq!(board.judge(), Some(Outcome::BreakerWon { attempts: 1 }));
    }
}
