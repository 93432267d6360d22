//! Command-line interface for strictly_mastermind.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_mastermind::{MatchSettings, RoleKind};

/// Strictly Mastermind - type-safe Mastermind matches in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_mastermind")]
#[command(about = "Play or simulate Mastermind matches", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to mastermind.toml if present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Match settings overriding the file
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Per-match overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Pegs per sequence
    #[arg(long, global = true)]
    pub length: Option<usize>,

    /// Guesses allowed per match
    #[arg(long, global = true)]
    pub attempts: Option<usize>,

    /// Number of colours in play
    #[arg(long, global = true)]
    pub palette: Option<usize>,

    /// Forbid repeated colours in the secret
    #[arg(long, global = true)]
    pub no_repeats: bool,
}

impl SettingsArgs {
    /// Applies the flags that were given on top of `base`.
    pub fn apply(&self, base: MatchSettings) -> MatchSettings {
        let mut settings = base;
        if let Some(length) = self.length {
            settings = settings.with_sequence_length(length);
        }
        if let Some(attempts) = self.attempts {
            settings = settings.with_max_attempts(attempts);
        }
        if let Some(palette) = self.palette {
            settings = settings.with_palette_size(palette);
        }
        if self.no_repeats {
            settings = settings.with_allow_repeats(false);
        }
        settings
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play matches at the console
    Play {
        /// Who makes the secret
        #[arg(long, value_enum, default_value = "bot")]
        maker: RoleKind,

        /// Who guesses
        #[arg(long, value_enum, default_value = "human")]
        breaker: RoleKind,

        /// Seed for bot roles
        #[arg(long)]
        seed: Option<u64>,

        /// Disable coloured pegs
        #[arg(long)]
        no_color: bool,
    },

    /// Run bot-versus-bot matches and report statistics
    Simulate {
        /// Number of matches
        #[arg(short = 'n', long, default_value = "100")]
        matches: usize,

        /// Base seed; in match i the maker uses seed + 2i and the breaker seed + 2i + 1
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
