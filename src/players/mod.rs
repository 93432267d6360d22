//! Maker and breaker roles.
//!
//! The match controller depends only on [`CodeMaker`] and [`CodeBreaker`].
//! Interactive variants delegate to a [`HumanInput`] collaborator; the
//! blocking console lives outside the engine.

mod fixed;
mod human;
mod kind;
mod random;

pub use fixed::FixedMaker;
pub use human::{InteractiveBreaker, InteractiveMaker};
pub use kind::RoleKind;
pub use random::{RandomBreaker, RandomMaker};

use crate::games::mastermind::{BoardSnapshot, Sequence};
use crate::settings::MatchSettings;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Role that commits the secret.
#[async_trait::async_trait]
pub trait CodeMaker: Send {
    /// Supplies a secret of `settings.sequence_length()` pegs from the palette.
    async fn supply_secret(&mut self, settings: &MatchSettings) -> Result<Sequence>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Role that guesses the secret.
#[async_trait::async_trait]
pub trait CodeBreaker: Send {
    /// Supplies the next guess. `None` concedes the match.
    async fn supply_guess(&mut self, board: &BoardSnapshot) -> Result<Option<Sequence>>;

    /// Returns true once the breaker has conceded.
    fn has_given_up(&self) -> bool;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// What a human entered when asked for a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    /// A guess to submit.
    Guess(Sequence),
    /// The human wants to stop.
    Quit,
}

/// Source of human decisions for interactive roles.
///
/// Implementations validate input and re-prompt as needed; whatever
/// they return is submitted to the board as is.
#[async_trait::async_trait]
pub trait HumanInput: Send {
    /// Asks for a secret.
    async fn read_secret(&mut self, settings: &MatchSettings) -> Result<Sequence>;

    /// Asks for a guess, showing the board so far.
    async fn read_guess(&mut self, board: &BoardSnapshot) -> Result<GuessInput>;
}

/// Lets one console back both roles.
#[async_trait::async_trait]
impl<T: HumanInput> HumanInput for Arc<Mutex<T>> {
    async fn read_secret(&mut self, settings: &MatchSettings) -> Result<Sequence> {
        self.lock().await.read_secret(settings).await
    }

    async fn read_guess(&mut self, board: &BoardSnapshot) -> Result<GuessInput> {
        self.lock().await.read_guess(board).await
    }
}
