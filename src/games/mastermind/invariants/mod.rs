//! Board invariants.
//!
//! Each invariant is a zero-sized type naming one property of a board in
//! play. Tuples of invariants check together, so the attempt contract can
//! verify the whole board after every recorded guess.

#[cfg(kani)]
mod verification;

/// A property a board must satisfy after every transition.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// What the property demands, used in violation reports.
    fn description() -> &'static str;
}

/// A property found broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What the broken property demands.
    pub description: String,
}

impl InvariantViolation {
    /// Reports `description` as broken.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    fn of<S, I: Invariant<S>>() -> Self {
        Self::new(I::description())
    }
}

/// Invariants checked as one group.
pub trait InvariantSet<S> {
    /// Checks every member, collecting all violations rather than stopping
    /// at the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$member::holds(state) {
                        violations.push(InvariantViolation::of::<S, $member>());
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod budget_consistent;
pub mod feedback_consistent;
pub mod uniform_length;

pub use budget_consistent::BudgetConsistentInvariant;
pub use feedback_consistent::FeedbackConsistentInvariant;
pub use uniform_length::UniformLengthInvariant;

/// All Mastermind board invariants as a composable set.
pub type MastermindInvariants = (
    BudgetConsistentInvariant,
    UniformLengthInvariant,
    FeedbackConsistentInvariant,
);
