//! Interactive roles backed by a human.

use super::{CodeBreaker, CodeMaker, GuessInput, HumanInput};
use crate::games::mastermind::{BoardSnapshot, Sequence};
use crate::settings::MatchSettings;
use anyhow::Result;
use tracing::{debug, info};

/// Maker whose secret comes from a human.
pub struct InteractiveMaker<I> {
    name: String,
    input: I,
}

impl<I: HumanInput> InteractiveMaker<I> {
    /// Creates an interactive maker.
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl<I: HumanInput> CodeMaker for InteractiveMaker<I> {
    async fn supply_secret(&mut self, settings: &MatchSettings) -> Result<Sequence> {
        debug!(maker = %self.name, "Waiting for secret");
        self.input.read_secret(settings).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Breaker whose guesses come from a human, who may quit.
pub struct InteractiveBreaker<I> {
    name: String,
    input: I,
    given_up: bool,
}

impl<I: HumanInput> InteractiveBreaker<I> {
    /// Creates an interactive breaker.
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
            given_up: false,
        }
    }
}

#[async_trait::async_trait]
impl<I: HumanInput> CodeBreaker for InteractiveBreaker<I> {
    async fn supply_guess(&mut self, board: &BoardSnapshot) -> Result<Option<Sequence>> {
        debug!(breaker = %self.name, "Waiting for guess");
        match self.input.read_guess(board).await? {
            GuessInput::Guess(guess) => Ok(Some(guess)),
            GuessInput::Quit => {
                info!(breaker = %self.name, "Breaker gave up");
                self.given_up = true;
                Ok(None)
            }
        }
    }

    fn has_given_up(&self) -> bool {
        self.given_up
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::{AnyBoard, Peg};
    use std::collections::VecDeque;

    /// Replays canned answers.
    struct Canned {
        secret: Sequence,
        guesses: VecDeque<GuessInput>,
    }

    #[async_trait::async_trait]
    impl HumanInput for Canned {
        async fn read_secret(&mut self, _settings: &MatchSettings) -> Result<Sequence> {
            Ok(self.secret.clone())
        }

        async fn read_guess(&mut self, _board: &BoardSnapshot) -> Result<GuessInput> {
            self.guesses
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("No more answers"))
        }
    }

    fn canned(guesses: Vec<GuessInput>) -> Canned {
        Canned {
            secret: Sequence::new(vec![Peg::Red; 4]),
            guesses: guesses.into(),
        }
    }

    #[tokio::test]
    async fn test_maker_forwards_secret() {
        let mut maker = InteractiveMaker::new("human", canned(vec![]));
        let secret = maker.supply_secret(&MatchSettings::default()).await.unwrap();
        assert_eq!(secret, Sequence::new(vec![Peg::Red; 4]));
    }

    #[tokio::test]
    async fn test_quit_sets_given_up() {
        let guess = Sequence::new(vec![Peg::Blue; 4]);
        let mut breaker = InteractiveBreaker::new(
            "human",
            canned(vec![GuessInput::Guess(guess.clone()), GuessInput::Quit]),
        );
        let board = AnyBoard::new(&MatchSettings::default()).unwrap().snapshot();

        assert_eq!(breaker.supply_guess(&board).await.unwrap(), Some(guess));
        assert!(!breaker.has_given_up());

        assert_eq!(breaker.supply_guess(&board).await.unwrap(), None);
        assert!(breaker.has_given_up());
    }
}
