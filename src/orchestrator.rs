//! Match orchestration between maker and breaker.

use crate::games::mastermind::{
    AnyBoard, Attempt, BoardError, BoardFinished, MakerVictory, Outcome, Sequence,
};
use crate::players::{CodeBreaker, CodeMaker};
use crate::settings::{MatchSettings, SettingsError};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Events published while a match runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchEvent {
    /// The maker's secret is on the board.
    SecretInstalled {
        /// Pegs in the secret.
        length: usize,
    },
    /// A guess was scored.
    AttemptRecorded {
        /// 1-based attempt number.
        number: usize,
        /// The guess and its feedback.
        attempt: Attempt,
        /// Attempts still available.
        left_attempts: usize,
    },
    /// The breaker gave up.
    Conceded,
    /// Match over; the secret is revealed.
    Finished {
        /// How the match ended.
        outcome: Outcome,
        /// The secret.
        secret: Sequence,
    },
}

/// Error that ends a match early.
#[derive(Debug, derive_more::Display)]
pub enum MatchError {
    /// The board rejected an operation.
    #[display("{}", _0)]
    Board(BoardError),

    /// The settings are invalid.
    #[display("{}", _0)]
    Settings(SettingsError),

    /// A role failed to answer.
    #[display("Role failed: {}", _0)]
    Role(anyhow::Error),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Board(e) => Some(e),
            MatchError::Settings(e) => Some(e),
            MatchError::Role(e) => Some(e.as_ref()),
        }
    }
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl From<SettingsError> for MatchError {
    fn from(err: SettingsError) -> Self {
        MatchError::Settings(err)
    }
}

/// Runs one match from secret installation to outcome.
///
/// Works the same whether roles are human or automated. Malformed
/// sequences surface as [`BoardError`]s; re-prompting is the role's job.
pub struct MatchController {
    maker: Box<dyn CodeMaker>,
    breaker: Box<dyn CodeBreaker>,
    event_tx: Option<mpsc::UnboundedSender<MatchEvent>>,
}

impl MatchController {
    /// Creates a controller for the given roles.
    pub fn new(maker: Box<dyn CodeMaker>, breaker: Box<dyn CodeBreaker>) -> Self {
        Self {
            maker,
            breaker,
            event_tx: None,
        }
    }

    /// Publishes match events to `event_tx`.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<MatchEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Maker's display name.
    pub fn maker_name(&self) -> &str {
        self.maker.name()
    }

    /// Breaker's display name.
    pub fn breaker_name(&self) -> &str {
        self.breaker.name()
    }

    /// Plays the match to a terminal outcome.
    ///
    /// Returns the finished board, which reveals the secret.
    #[instrument(skip_all, fields(maker = %self.maker.name(), breaker = %self.breaker.name()))]
    pub async fn run(&mut self, settings: &MatchSettings) -> Result<BoardFinished, MatchError> {
        info!("Starting match");
        let mut board = AnyBoard::new(settings)?;

        let secret = self
            .maker
            .supply_secret(settings)
            .await
            .map_err(MatchError::Role)?;
        board.install_secret(secret)?;
        self.emit(MatchEvent::SecretInstalled {
            length: *settings.sequence_length(),
        });

        let outcome = loop {
            if self.breaker.has_given_up() {
                break Outcome::MakerWon(MakerVictory::BreakerConceded);
            }

            debug!(left = board.left_attempts(), "Waiting for guess");
            let snapshot = board.snapshot();
            let guess = self
                .breaker
                .supply_guess(&snapshot)
                .await
                .map_err(MatchError::Role)?;

            let guess = match guess {
                Some(guess) if !self.breaker.has_given_up() => guess,
                _ => break Outcome::MakerWon(MakerVictory::BreakerConceded),
            };

            let attempt = board.record_attempt(guess)?.clone();
            self.emit(MatchEvent::AttemptRecorded {
                number: board.attempts_inserted(),
                attempt,
                left_attempts: board.left_attempts(),
            });

            if let Some(outcome) = board.judge() {
                break outcome;
            }
        };

        if outcome.is_concession() {
            self.emit(MatchEvent::Conceded);
        }

        board.conclude(outcome)?;
        let finished = board.into_finished()?;
        info!(%outcome, attempts = finished.attempts_inserted(), "Match over");

        self.emit(MatchEvent::Finished {
            outcome,
            secret: finished.secret().clone(),
        });

        Ok(finished)
    }

    fn emit(&self, event: MatchEvent) {
        if let Some(tx) = &self.event_tx
            && tx.send(event).is_err()
        {
            debug!("Event receiver dropped");
        }
    }
}
