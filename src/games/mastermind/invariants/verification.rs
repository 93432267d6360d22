//! Formal verification of feedback bounds using the Kani model checker.
//!
//! These harnesses check the scoring rule for ALL four-peg sequences
//! over the full palette.

#[cfg(kani)]
mod proofs {
    use crate::{Peg, Sequence, evaluate};

    fn any_sequence() -> Sequence {
        let indices: [u8; 4] = kani::any();
        kani::assume(indices.iter().all(|i| (*i as usize) < Peg::ALL.len()));
        indices
            .iter()
            .filter_map(|i| Peg::from_index(*i as usize))
            .collect()
    }

    /// Proves: exact + colour-only never exceeds the sequence length.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_feedback_bounded() {
        let secret = any_sequence();
        let guess = any_sequence();

        if let Ok(feedback) = evaluate(&secret, &guess) {
            assert!(feedback.total() <= 4, "Feedback exceeds sequence length");
        }
    }

    /// Proves: a guess equal to the secret is always fully exact.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_identity_is_solved() {
        let secret = any_sequence();
        let feedback = evaluate(&secret, &secret);
        assert!(matches!(feedback, Ok(f) if f.is_solved(4) && f.color_only() == 0));
    }
}
