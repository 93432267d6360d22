//! Board errors for Mastermind.
//!
//! Every failure is raised at the offending call and leaves the board
//! untouched. The engine never retries; re-prompting is the caller's job.

use super::Peg;
use serde::{Deserialize, Serialize};

/// The lifecycle phase a board is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum BoardPhase {
    /// Waiting for the maker's secret.
    #[display("awaiting the secret")]
    AwaitingSecret,
    /// Accepting guesses.
    #[display("in play")]
    InPlay,
    /// Outcome decided; read-only.
    #[display("finished")]
    Finished,
}

/// Error that can occur when installing a secret or recording an attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A sequence does not have the configured length.
    #[display("Sequence has {} pegs, expected {}", actual, expected)]
    InvalidLength {
        /// Configured sequence length.
        expected: usize,
        /// Length of the rejected sequence.
        actual: usize,
    },

    /// The operation is not legal in the board's current phase.
    #[display("Cannot {} while the board is {}", operation, phase)]
    InvalidState {
        /// What was attempted.
        operation: &'static str,
        /// The phase the board was in.
        phase: BoardPhase,
    },

    /// A guess arrived after the attempt budget was spent.
    #[display("All {} attempts have been used", _0)]
    AttemptsExhausted(usize),

    /// A peg lies outside the configured palette.
    #[display("{} is not in the palette of {} colours", _0, _1)]
    PegOutOfPalette(Peg, usize),

    /// The secret repeats a colour while repeats are disabled.
    #[display("{} appears more than once but repeats are disabled", _0)]
    RepeatedPeg(Peg),

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for BoardError {}
