//! Role selection.

use super::{
    CodeBreaker, CodeMaker, HumanInput, InteractiveBreaker, InteractiveMaker, RandomBreaker,
    RandomMaker,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who fills a role.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    clap::ValueEnum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    /// A person at the console.
    #[display("human")]
    Human,
    /// A random bot.
    #[display("bot")]
    Bot,
}

impl RoleKind {
    /// Builds a maker. Bots ignore `input`; `seed` makes them reproducible.
    #[instrument(skip(input))]
    pub fn maker<I>(self, name: &str, seed: Option<u64>, input: I) -> Box<dyn CodeMaker>
    where
        I: HumanInput + 'static,
    {
        match (self, seed) {
            (RoleKind::Human, _) => Box::new(InteractiveMaker::new(name, input)),
            (RoleKind::Bot, Some(seed)) => Box::new(RandomMaker::seeded(name, seed)),
            (RoleKind::Bot, None) => Box::new(RandomMaker::new(name)),
        }
    }

    /// Builds a breaker. Bots ignore `input`; `seed` makes them reproducible.
    #[instrument(skip(input))]
    pub fn breaker<I>(self, name: &str, seed: Option<u64>, input: I) -> Box<dyn CodeBreaker>
    where
        I: HumanInput + 'static,
    {
        match (self, seed) {
            (RoleKind::Human, _) => Box::new(InteractiveBreaker::new(name, input)),
            (RoleKind::Bot, Some(seed)) => Box::new(RandomBreaker::seeded(name, seed)),
            (RoleKind::Bot, None) => Box::new(RandomBreaker::new(name)),
        }
    }
}
