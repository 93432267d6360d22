//! Feedback invariant: stored feedback is what the rules compute.

use super::super::rules::evaluate;
use super::super::BoardInPlay;
use super::Invariant;

/// Invariant: each attempt's feedback equals a fresh evaluation against
/// the secret and never scores more pegs than the sequence holds.
pub struct FeedbackConsistentInvariant;

impl Invariant<BoardInPlay> for FeedbackConsistentInvariant {
    fn holds(board: &BoardInPlay) -> bool {
        board.attempts().iter().all(|attempt| {
            let feedback = *attempt.feedback();
            feedback.total() <= attempt.guess().len()
                && evaluate(board.secret(), attempt.guess()) == Ok(feedback)
        })
    }

    fn description() -> &'static str {
        "Recorded feedback matches evaluation against the secret"
    }
}
