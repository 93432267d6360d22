//! Phase-specific typestate structs for the Mastermind board.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! A `BoardInPlay` ALWAYS has a secret and a `BoardFinished` ALWAYS has
//! an outcome, so neither is an `Option`.

use super::action::BoardError;
use super::contracts::{AttemptContract, Contract, OutcomeMatchesBoard, SecretContract};
use super::phases::{MatchStatus, Outcome};
use super::rules::{evaluate, judge};
use super::snapshot::BoardSnapshot;
use super::{Attempt, Sequence};
use crate::settings::{MatchSettings, SettingsError};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  AwaitingSecret Phase
// ─────────────────────────────────────────────────────────────

/// Board waiting for the maker's secret.
///
/// Holds validated settings and nothing else.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    settings: MatchSettings,
}

impl BoardSetup {
    /// Creates a board for one match.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if any setting is out of bounds.
    #[instrument]
    pub fn new(settings: &MatchSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings: settings.clone(),
        })
    }

    /// Returns the match settings.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Installs the secret (consumes setup, returns in-play).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLength`], [`BoardError::PegOutOfPalette`]
    /// or [`BoardError::RepeatedPeg`] if the secret is malformed.
    #[instrument(skip_all, fields(length = secret.len()))]
    pub fn install_secret(self, secret: Sequence) -> Result<BoardInPlay, BoardError> {
        SecretContract::check(&self, &secret)?;
        debug!("Secret installed");
        Ok(BoardInPlay {
            settings: self.settings,
            secret,
            attempts: Vec::new(),
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  InPlay Phase
// ─────────────────────────────────────────────────────────────

/// Board accepting guesses.
///
/// The board reports feedback and remaining budget; it does not decide
/// who won. The match controller declares the outcome via [`BoardInPlay::finish`].
#[derive(Debug, Clone)]
pub struct BoardInPlay {
    pub(crate) settings: MatchSettings,
    pub(crate) secret: Sequence,
    pub(crate) attempts: Vec<Attempt>,
}

impl BoardInPlay {
    /// Scores a guess and appends it to the history.
    ///
    /// Either the attempt is fully recorded or the board is unchanged.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalAttempt)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLength`] or [`BoardError::PegOutOfPalette`]
    /// for a malformed guess and [`BoardError::AttemptsExhausted`] once the
    /// budget is spent.
    #[instrument(skip_all, fields(guess = %guess, inserted = self.attempts.len()))]
    pub fn record_attempt(&mut self, guess: Sequence) -> Result<&Attempt, BoardError> {
        AttemptContract::pre(self, &guess)?;

        let feedback = evaluate(&self.secret, &guess)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.attempts.push(Attempt::new(guess, feedback));

        #[cfg(debug_assertions)]
        if let Err(e) = AttemptContract::post(&before, self) {
            tracing::warn!(error = %e, "Rolling back attempt");
            self.attempts.pop();
            return Err(e);
        }

        info!(
            attempt = self.attempts.len(),
            exact = feedback.exact(),
            color_only = feedback.color_only(),
            left = self.left_attempts(),
            "Attempt recorded"
        );

        let last = self.attempts.len() - 1;
        Ok(&self.attempts[last])
    }

    /// Attempts still available.
    pub fn left_attempts(&self) -> usize {
        self.settings
            .max_attempts()
            .saturating_sub(self.attempts.len())
    }

    /// Attempts recorded so far.
    pub fn attempts_inserted(&self) -> usize {
        self.attempts.len()
    }

    /// Returns the attempt history in order.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Returns the match settings.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// The hidden sequence. Never handed to roles while in play.
    pub(crate) fn secret(&self) -> &Sequence {
        &self.secret
    }

    /// Outcome the rules derive from the history, if any.
    ///
    /// Concession is not visible here.
    #[instrument(skip(self))]
    pub fn judge(&self) -> Option<Outcome> {
        judge(
            &self.attempts,
            self.left_attempts(),
            *self.settings.sequence_length(),
        )
    }

    /// Read-only view without the secret.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(
            self.settings.clone(),
            self.attempts.clone(),
            self.left_attempts(),
            MatchStatus::InProgress,
            None,
        )
    }

    /// Finishes the match with the given outcome (consumes in-play).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvariantViolation`] if the outcome contradicts
    /// the recorded attempts.
    #[instrument(skip(self))]
    pub fn finish(self, outcome: Outcome) -> Result<BoardFinished, BoardError> {
        OutcomeMatchesBoard::check(&self, &outcome)?;
        info!(%outcome, attempts = self.attempts.len(), "Match finished");
        Ok(BoardFinished {
            settings: self.settings,
            secret: self.secret,
            attempts: self.attempts,
            outcome,
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Board after the match, kept read-only for reporting.
///
/// The outcome is ALWAYS present and the secret is now public.
#[derive(Debug, Clone)]
pub struct BoardFinished {
    settings: MatchSettings,
    secret: Sequence,
    attempts: Vec<Attempt>,
    outcome: Outcome,
}

impl BoardFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the revealed secret.
    pub fn secret(&self) -> &Sequence {
        &self.secret
    }

    /// Returns the attempt history.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Attempts recorded.
    pub fn attempts_inserted(&self) -> usize {
        self.attempts.len()
    }

    /// Attempts left unused.
    pub fn left_attempts(&self) -> usize {
        self.settings
            .max_attempts()
            .saturating_sub(self.attempts.len())
    }

    /// Returns the match settings.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Human-readable closing message, revealing the secret.
    pub fn message(&self) -> String {
        format!("{} The secret was {}.", self.outcome, self.secret)
    }

    /// Read-only view including the secret.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(
            self.settings.clone(),
            self.attempts.clone(),
            self.left_attempts(),
            MatchStatus::Finished(self.outcome),
            Some(self.secret.clone()),
        )
    }

    /// Starts a fresh board with the same settings (consumes finished).
    #[instrument(skip(self))]
    pub fn restart(self) -> BoardSetup {
        BoardSetup {
            settings: self.settings,
        }
    }
}
