//! Outcome detection for Mastermind.

use super::super::phases::{MakerVictory, Outcome};
use super::super::Attempt;
use tracing::instrument;

/// Derives the outcome from board facts.
///
/// The breaker wins as soon as an attempt matches all `length` pegs.
/// Otherwise the maker wins once no attempts are left. Concession is
/// not visible on the board and is decided by the match controller.
#[instrument(level = "trace", skip(attempts), fields(recorded = attempts.len()))]
pub fn judge(attempts: &[Attempt], left_attempts: usize, length: usize) -> Option<Outcome> {
    if let Some(index) = attempts
        .iter()
        .position(|a| a.feedback().is_solved(length))
    {
        return Some(Outcome::BreakerWon {
            attempts: index + 1,
        });
    }

    if left_attempts == 0 {
        return Some(Outcome::MakerWon(MakerVictory::AttemptsExhausted));
    }

    None
}
