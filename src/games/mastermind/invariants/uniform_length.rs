//! Length invariant: every attempt is as long as the secret.

use super::super::BoardInPlay;
use super::Invariant;

/// Invariant: the secret and every recorded guess have the configured length.
pub struct UniformLengthInvariant;

impl Invariant<BoardInPlay> for UniformLengthInvariant {
    fn holds(board: &BoardInPlay) -> bool {
        let length = *board.settings().sequence_length();
        board.secret().len() == length
            && board
                .attempts()
                .iter()
                .all(|attempt| attempt.guess().len() == length)
    }

    fn description() -> &'static str {
        "Secret and attempts all have the configured length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::{Attempt, BoardSetup, Feedback, Peg, Sequence};
    use crate::settings::MatchSettings;

    #[test]
    fn test_short_guess_violates() {
        let mut board = BoardSetup::new(&MatchSettings::default())
            .unwrap()
            .install_secret(Sequence::new(vec![Peg::Red; 4]))
            .unwrap();
        assert!(UniformLengthInvariant::holds(&board));

        board.attempts.push(Attempt::new(
            Sequence::new(vec![Peg::Red; 3]),
            Feedback::new(3, 0),
        ));
        assert!(!UniformLengthInvariant::holds(&board));
    }
}
