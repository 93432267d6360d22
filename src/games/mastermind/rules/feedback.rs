//! Peg-matching feedback.

use super::super::{BoardError, Feedback, Peg, Sequence};
use strum::EnumCount;
use tracing::instrument;

/// Scores `guess` against `secret`.
///
/// Positions with equal pegs count as exact and are consumed. Among the
/// remaining positions, each colour contributes the smaller of its
/// leftover counts in the secret and in the guess, so a repeated colour
/// in the guess never scores more often than the secret holds it.
///
/// # Errors
///
/// Returns [`BoardError::InvalidLength`] if the sequences differ in length.
#[instrument(level = "trace", skip_all, fields(secret = %secret, guess = %guess))]
pub fn evaluate(secret: &Sequence, guess: &Sequence) -> Result<Feedback, BoardError> {
    if secret.len() != guess.len() {
        return Err(BoardError::InvalidLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut secret_left = [0usize; Peg::COUNT];
    let mut guess_left = [0usize; Peg::COUNT];
    let mut exact = 0;

    for (s, g) in secret.iter().zip(guess.iter()) {
        if s == g {
            exact += 1;
        } else {
            secret_left[s.index()] += 1;
            guess_left[g.index()] += 1;
        }
    }

    let color_only = secret_left
        .iter()
        .zip(guess_left.iter())
        .map(|(s, g)| *s.min(g))
        .sum();

    Ok(Feedback::new(exact, color_only))
}
