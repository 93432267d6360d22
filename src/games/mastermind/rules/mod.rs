//! Game rules for Mastermind.
//!
//! Pure functions for scoring guesses and deciding outcomes. Rules are
//! kept apart from board storage so the board only reports facts and
//! the match controller applies win policy.

pub mod feedback;
pub mod outcome;

pub use feedback::evaluate;
pub use outcome::judge;
