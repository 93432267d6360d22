//! Match settings: sequence length, attempt budget and palette.

use crate::games::mastermind::Peg;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Shortest allowed sequence.
pub const MIN_SEQUENCE_LENGTH: usize = 1;
/// Longest allowed sequence.
pub const MAX_SEQUENCE_LENGTH: usize = 10;
/// Smallest allowed attempt budget.
pub const MIN_ATTEMPTS: usize = 1;
/// Smallest allowed palette.
pub const MIN_PALETTE_SIZE: usize = 2;
/// Largest allowed palette.
pub const MAX_PALETTE_SIZE: usize = Peg::ALL.len();

/// Configuration for one match.
///
/// Owned by the caller and passed by reference into every match; the
/// engine never keeps global settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct MatchSettings {
    /// Pegs per sequence.
    #[serde(default = "default_sequence_length")]
    sequence_length: usize,

    /// Guesses the breaker may submit.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Number of colours in play.
    #[serde(default = "default_palette_size")]
    palette_size: usize,

    /// Whether the secret may repeat a colour.
    #[serde(default = "default_allow_repeats")]
    allow_repeats: bool,
}

#[instrument]
fn default_sequence_length() -> usize {
    4
}

#[instrument]
fn default_max_attempts() -> usize {
    9
}

#[instrument]
fn default_palette_size() -> usize {
    6
}

#[instrument]
fn default_allow_repeats() -> bool {
    true
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            sequence_length: default_sequence_length(),
            max_attempts: default_max_attempts(),
            palette_size: default_palette_size(),
            allow_repeats: default_allow_repeats(),
        }
    }
}

impl MatchSettings {
    /// Creates settings, validating every bound.
    #[instrument]
    pub fn new(
        sequence_length: usize,
        max_attempts: usize,
        palette_size: usize,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            sequence_length,
            max_attempts,
            palette_size,
            allow_repeats: default_allow_repeats(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        info!(
            sequence_length = settings.sequence_length,
            max_attempts = settings.max_attempts,
            palette_size = settings.palette_size,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Checks every bound.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_SEQUENCE_LENGTH..=MAX_SEQUENCE_LENGTH).contains(&self.sequence_length) {
            return Err(SettingsError::new(format!(
                "Sequence length {} is outside {}..={}",
                self.sequence_length, MIN_SEQUENCE_LENGTH, MAX_SEQUENCE_LENGTH
            )));
        }
        if self.max_attempts < MIN_ATTEMPTS {
            return Err(SettingsError::new(format!(
                "Attempt budget must be at least {}",
                MIN_ATTEMPTS
            )));
        }
        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&self.palette_size) {
            return Err(SettingsError::new(format!(
                "Palette size {} is outside {}..={}",
                self.palette_size, MIN_PALETTE_SIZE, MAX_PALETTE_SIZE
            )));
        }
        if !self.allow_repeats && self.palette_size < self.sequence_length {
            return Err(SettingsError::new(format!(
                "A {}-peg secret without repeats needs at least {} colours, palette has {}",
                self.sequence_length, self.sequence_length, self.palette_size
            )));
        }
        Ok(())
    }

    /// The colours in play.
    pub fn palette(&self) -> &'static [Peg] {
        Peg::palette(self.palette_size)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
