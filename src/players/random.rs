//! Random bots.

use super::{CodeBreaker, CodeMaker};
use crate::games::mastermind::{BoardSnapshot, Peg, Sequence};
use crate::settings::MatchSettings;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Draws `length` pegs from `palette`, with or without repeats.
fn random_sequence(rng: &mut StdRng, palette: &[Peg], length: usize, repeats: bool) -> Sequence {
    if repeats {
        (0..length)
            .map(|_| palette[rng.gen_range(0..palette.len())])
            .collect()
    } else {
        let mut pool = palette.to_vec();
        pool.shuffle(rng);
        pool.into_iter().take(length).collect()
    }
}

/// Maker that picks a uniformly random secret.
pub struct RandomMaker {
    name: String,
    rng: StdRng,
}

impl RandomMaker {
    /// Creates a maker seeded from OS entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible maker.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[async_trait::async_trait]
impl CodeMaker for RandomMaker {
    async fn supply_secret(&mut self, settings: &MatchSettings) -> Result<Sequence> {
        let secret = random_sequence(
            &mut self.rng,
            settings.palette(),
            *settings.sequence_length(),
            *settings.allow_repeats(),
        );
        debug!(maker = %self.name, "Random secret chosen");
        Ok(secret)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Breaker that guesses uniformly at random and ignores feedback.
///
/// Never concedes.
pub struct RandomBreaker {
    name: String,
    rng: StdRng,
}

impl RandomBreaker {
    /// Creates a breaker seeded from OS entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible breaker.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[async_trait::async_trait]
impl CodeBreaker for RandomBreaker {
    async fn supply_guess(&mut self, board: &BoardSnapshot) -> Result<Option<Sequence>> {
        let settings = board.settings();
        let guess = random_sequence(
            &mut self.rng,
            settings.palette(),
            *settings.sequence_length(),
            true,
        );
        debug!(breaker = %self.name, guess = %guess, "Random guess");
        Ok(Some(guess))
    }

    fn has_given_up(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::{SequenceRole, check_sequence};

    #[tokio::test]
    async fn test_random_secret_fits_settings() {
        let settings = MatchSettings::default().with_sequence_length(6);
        let mut maker = RandomMaker::seeded("bot", 7);
        for _ in 0..50 {
            let secret = maker.supply_secret(&settings).await.unwrap();
            assert!(check_sequence(&settings, &secret, SequenceRole::Secret).is_ok());
        }
    }

    #[tokio::test]
    async fn test_random_secret_without_repeats() {
        let settings = MatchSettings::default()
            .with_sequence_length(6)
            .with_allow_repeats(false);
        let mut maker = RandomMaker::seeded("bot", 11);
        for _ in 0..50 {
            let secret = maker.supply_secret(&settings).await.unwrap();
            assert!(check_sequence(&settings, &secret, SequenceRole::Secret).is_ok());
        }
    }

    #[tokio::test]
    async fn test_same_seed_same_secret() {
        let settings = MatchSettings::default();
        let a = RandomMaker::seeded("a", 42)
            .supply_secret(&settings)
            .await
            .unwrap();
        let b = RandomMaker::seeded("b", 42)
            .supply_secret(&settings)
            .await
            .unwrap();
        assert_eq!(a, b);
    }
}
