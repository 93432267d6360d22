//! Deterministic maker that always commits the same secret.

use super::CodeMaker;
use crate::games::mastermind::Sequence;
use crate::settings::MatchSettings;
use anyhow::Result;
use tracing::debug;

/// Maker with a preset secret.
///
/// The board rejects the secret if it does not fit the settings.
pub struct FixedMaker {
    name: String,
    secret: Sequence,
}

impl FixedMaker {
    /// Creates a maker that always commits `secret`.
    pub fn new(name: impl Into<String>, secret: Sequence) -> Self {
        Self {
            name: name.into(),
            secret,
        }
    }
}

#[async_trait::async_trait]
impl CodeMaker for FixedMaker {
    async fn supply_secret(&mut self, _settings: &MatchSettings) -> Result<Sequence> {
        debug!(maker = %self.name, "Committing preset secret");
        Ok(self.secret.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
