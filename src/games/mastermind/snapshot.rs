//! Read-only board view for roles and presentation.

use super::phases::MatchStatus;
use super::{Attempt, Sequence};
use crate::settings::MatchSettings;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What anyone outside the board may see.
///
/// The secret is `None` until the match is finished.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct BoardSnapshot {
    /// Settings of the match.
    settings: MatchSettings,
    /// Attempts in submission order.
    attempts: Vec<Attempt>,
    /// Attempts still available.
    left_attempts: usize,
    /// Whether the match is over, and how.
    status: MatchStatus,
    /// The secret, revealed only once finished.
    secret: Option<Sequence>,
}

impl BoardSnapshot {
    /// Attempts recorded so far.
    pub fn attempts_inserted(&self) -> usize {
        self.attempts.len()
    }

    /// Returns true once the match has an outcome.
    pub fn is_finished(&self) -> bool {
        matches!(self.status, MatchStatus::Finished(_))
    }
}
