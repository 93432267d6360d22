//! Contract-based validation for Mastermind.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::invariants::{InvariantSet, MastermindInvariants};
use super::phases::{MakerVictory, Outcome};
use super::rules;
use super::typestate::{BoardInPlay, BoardSetup};
use super::{BoardError, Sequence};
use crate::settings::MatchSettings;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BoardError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BoardError>;
}

// ─────────────────────────────────────────────────────────────
//  Sequence Preconditions
// ─────────────────────────────────────────────────────────────

/// Which role supplied a sequence. Only the secret is bound by the
/// no-repeat rule; guesses may always repeat colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceRole {
    /// The maker's hidden sequence.
    Secret,
    /// One of the breaker's guesses.
    Guess,
}

/// Precondition: the sequence has the configured length.
pub struct LengthMatches;

impl LengthMatches {
    /// Checks the length against the settings.
    #[instrument(skip_all)]
    pub fn check(settings: &MatchSettings, seq: &Sequence) -> Result<(), BoardError> {
        let expected = *settings.sequence_length();
        if seq.len() != expected {
            Err(BoardError::InvalidLength {
                expected,
                actual: seq.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: every peg belongs to the configured palette.
pub struct WithinPalette;

impl WithinPalette {
    /// Checks palette membership.
    #[instrument(skip_all)]
    pub fn check(settings: &MatchSettings, seq: &Sequence) -> Result<(), BoardError> {
        let palette_size = *settings.palette_size();
        match seq.iter().find(|peg| peg.index() >= palette_size) {
            Some(peg) => Err(BoardError::PegOutOfPalette(*peg, palette_size)),
            None => Ok(()),
        }
    }
}

/// Precondition: a secret repeats no colour when repeats are disabled.
pub struct NoForbiddenRepeats;

impl NoForbiddenRepeats {
    /// Checks the repeat rule for the given role.
    #[instrument(skip(settings, seq))]
    pub fn check(
        settings: &MatchSettings,
        seq: &Sequence,
        role: SequenceRole,
    ) -> Result<(), BoardError> {
        if *settings.allow_repeats() || role == SequenceRole::Guess {
            return Ok(());
        }
        let pegs = seq.pegs();
        for (i, peg) in pegs.iter().enumerate() {
            if pegs[..i].contains(peg) {
                return Err(BoardError::RepeatedPeg(*peg));
            }
        }
        Ok(())
    }
}

/// Composite precondition: a sequence is well formed for its role.
///
/// Presentation code may call this to re-prompt before submitting.
#[instrument(skip(settings, seq), fields(seq = %seq))]
pub fn check_sequence(
    settings: &MatchSettings,
    seq: &Sequence,
    role: SequenceRole,
) -> Result<(), BoardError> {
    LengthMatches::check(settings, seq)?;
    WithinPalette::check(settings, seq)?;
    NoForbiddenRepeats::check(settings, seq, role)?;
    Ok(())
}

/// Precondition for installing a secret.
pub struct SecretContract;

impl SecretContract {
    /// Validates the secret against the board's settings.
    #[instrument(skip_all)]
    pub fn check(board: &BoardSetup, secret: &Sequence) -> Result<(), BoardError> {
        check_sequence(board.settings(), secret, SequenceRole::Secret)
    }
}

// ─────────────────────────────────────────────────────────────
//  Attempt Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: at least one attempt is left.
pub struct BudgetRemaining;

impl BudgetRemaining {
    /// Checks the remaining budget.
    #[instrument(skip(board))]
    pub fn check(board: &BoardInPlay) -> Result<(), BoardError> {
        if board.left_attempts() == 0 {
            Err(BoardError::AttemptsExhausted(*board.settings().max_attempts()))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a guess is legal if it is well formed and
/// budget remains.
pub struct LegalAttempt;

impl LegalAttempt {
    /// Validates all preconditions for an attempt.
    #[instrument(skip_all)]
    pub fn check(guess: &Sequence, board: &BoardInPlay) -> Result<(), BoardError> {
        check_sequence(board.settings(), guess, SequenceRole::Guess)?;
        BudgetRemaining::check(board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Attempt Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for recording attempts.
///
/// Preconditions:
/// - Guess has the configured length and palette
/// - Budget remains
///
/// Postconditions:
/// - History grew by exactly one and earlier attempts are unchanged
/// - Budget, length and feedback invariants hold
pub struct AttemptContract;

impl Contract<BoardInPlay, Sequence> for AttemptContract {
    fn pre(board: &BoardInPlay, guess: &Sequence) -> Result<(), BoardError> {
        LegalAttempt::check(guess, board)
    }

    fn post(before: &BoardInPlay, after: &BoardInPlay) -> Result<(), BoardError> {
        let grew_by_one = after.attempts().len() == before.attempts().len() + 1;
        let prefix_kept = after.attempts().starts_with(before.attempts());
        if !(grew_by_one && prefix_kept) {
            warn!(
                before = before.attempts().len(),
                after = after.attempts().len(),
                "History is not append-only"
            );
            return Err(BoardError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one attempt".to_string(),
            ));
        }

        MastermindInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            BoardError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Outcome Precondition
// ─────────────────────────────────────────────────────────────

/// Precondition for finishing: the declared outcome agrees with the board.
///
/// A concession is accepted only while the rules derive no outcome; any
/// other outcome must be the one they derive from the recorded attempts.
pub struct OutcomeMatchesBoard;

impl OutcomeMatchesBoard {
    /// Checks the declared outcome against the board.
    #[instrument(skip(board))]
    pub fn check(board: &BoardInPlay, outcome: &Outcome) -> Result<(), BoardError> {
        let derived = rules::judge(
            board.attempts(),
            board.left_attempts(),
            *board.settings().sequence_length(),
        );
        let consistent = match outcome {
            Outcome::MakerWon(MakerVictory::BreakerConceded) => derived.is_none(),
            _ => derived == Some(*outcome),
        };
        if consistent {
            Ok(())
        } else {
            Err(BoardError::InvariantViolation(format!(
                "Declared outcome {:?} does not match board ({:?})",
                outcome, derived
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mastermind::{Attempt, Feedback, Peg};

    fn secret() -> Sequence {
        Sequence::new(vec![Peg::Red, Peg::Green, Peg::Blue, Peg::Yellow])
    }

    fn in_play(settings: &MatchSettings) -> BoardInPlay {
        BoardSetup::new(settings)
            .unwrap()
            .install_secret(secret())
            .unwrap()
    }

    #[test]
    fn test_precondition_wrong_length() {
        let board = in_play(&MatchSettings::default());
        let guess = Sequence::new(vec![Peg::Red; 3]);
        assert_eq!(
            AttemptContract::pre(&board, &guess),
            Err(BoardError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_precondition_outside_palette() {
        let board = in_play(&MatchSettings::default());
        let guess = Sequence::new(vec![Peg::Red, Peg::Red, Peg::Red, Peg::White]);
        assert_eq!(
            AttemptContract::pre(&board, &guess),
            Err(BoardError::PegOutOfPalette(Peg::White, 6))
        );
    }

    #[test]
    fn test_guesses_may_repeat_without_repeats() {
        let settings = MatchSettings::default().with_allow_repeats(false);
        let board = in_play(&settings);
        let guess = Sequence::new(vec![Peg::Red; 4]);
        assert!(AttemptContract::pre(&board, &guess).is_ok());

        let setup = BoardSetup::new(&settings).unwrap();
        assert_eq!(
            SecretContract::check(&setup, &guess),
            Err(BoardError::RepeatedPeg(Peg::Red))
        );
    }

    #[test]
    fn test_precondition_budget_spent() {
        let settings = MatchSettings::default().with_max_attempts(1);
        let mut board = in_play(&settings);
        board.record_attempt(secret()).unwrap();
        assert_eq!(
            AttemptContract::pre(&board, &secret()),
            Err(BoardError::AttemptsExhausted(1))
        );
    }

    #[test]
    fn test_postcondition_holds_after_attempt() {
        let board = in_play(&MatchSettings::default());
        let mut after = board.clone();
        after
            .record_attempt(Sequence::new(vec![Peg::Red; 4]))
            .unwrap();
        assert!(AttemptContract::post(&board, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_forged_feedback() {
        let board = in_play(&MatchSettings::default());
        let mut after = board.clone();
        after.attempts.push(Attempt::new(
            Sequence::new(vec![Peg::Red; 4]),
            Feedback::new(4, 0),
        ));
        assert!(AttemptContract::post(&board, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_rewritten_history() {
        let mut board = in_play(&MatchSettings::default());
        board.record_attempt(Sequence::new(vec![Peg::Red; 4])).unwrap();
        let mut after = board.clone();
        after.record_attempt(Sequence::new(vec![Peg::Blue; 4])).unwrap();
        after.attempts[0] = after.attempts[1].clone();
        assert!(AttemptContract::post(&board, &after).is_err());
    }

    #[test]
    fn test_outcome_must_match_board() {
        let mut board = in_play(&MatchSettings::default());
        board.record_attempt(Sequence::new(vec![Peg::Red; 4])).unwrap();

        let claimed = Outcome::BreakerWon { attempts: 1 };
        assert!(OutcomeMatchesBoard::check(&board, &claimed).is_err());

        let conceded = Outcome::MakerWon(MakerVictory::BreakerConceded);
        assert!(OutcomeMatchesBoard::check(&board, &conceded).is_ok());

        board.record_attempt(secret()).unwrap();
        let won = Outcome::BreakerWon { attempts: 2 };
        assert!(OutcomeMatchesBoard::check(&board, &won).is_ok());
    }

    #[test]
    fn test_concession_rejected_once_solved() {
        let mut board = in_play(&MatchSettings::default());
        board.record_attempt(secret()).unwrap();

        let conceded = Outcome::MakerWon(MakerVictory::BreakerConceded);
        assert!(matches!(
            OutcomeMatchesBoard::check(&board, &conceded),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_concession_rejected_once_exhausted() {
        let settings = MatchSettings::default().with_max_attempts(1);
        let mut board = in_play(&settings);
        board.record_attempt(Sequence::new(vec![Peg::Red; 4])).unwrap();

        let conceded = Outcome::MakerWon(MakerVictory::BreakerConceded);
        assert!(OutcomeMatchesBoard::check(&board, &conceded).is_err());

        let exhausted = Outcome::MakerWon(MakerVictory::AttemptsExhausted);
        assert!(OutcomeMatchesBoard::check(&board, &exhausted).is_ok());
    }
}
