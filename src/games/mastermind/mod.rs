//! Mastermind match engine.
//!
//! The board stores the secret and the attempt history, rules score
//! guesses and derive outcomes, contracts and invariants guard every
//! transition.

mod action;
mod contracts;
mod invariants;
mod phases;
pub mod rules;
mod snapshot;
mod types;
mod typestate;
mod wrapper;

pub use action::{BoardError, BoardPhase};
pub use contracts::{
    AttemptContract, BudgetRemaining, Contract, LegalAttempt, LengthMatches, NoForbiddenRepeats,
    OutcomeMatchesBoard, SecretContract, SequenceRole, WithinPalette, check_sequence,
};
pub use invariants::{
    BudgetConsistentInvariant, FeedbackConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MastermindInvariants, UniformLengthInvariant,
};
pub use phases::{MakerVictory, MatchStatus, Outcome};
pub use rules::{evaluate, judge};
pub use snapshot::BoardSnapshot;
pub use types::{Attempt, Feedback, ParseSequenceError, Peg, Sequence};
pub use typestate::{BoardFinished, BoardInPlay, BoardSetup};
pub use wrapper::AnyBoard;
