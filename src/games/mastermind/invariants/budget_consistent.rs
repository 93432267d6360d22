//! Budget invariant: inserted plus remaining attempts equals the budget.

use super::super::BoardInPlay;
use super::Invariant;

/// Invariant: `attempts_inserted + left_attempts == max_attempts` and the
/// history never outgrows the budget.
pub struct BudgetConsistentInvariant;

impl Invariant<BoardInPlay> for BudgetConsistentInvariant {
    fn holds(board: &BoardInPlay) -> bool {
        let max = *board.settings().max_attempts();
        board.attempts_inserted() <= max
            && board.attempts_inserted() + board.left_attempts() == max
    }

    fn description() -> &'static str {
        "Inserted and remaining attempts add up to the budget"
    }
}
