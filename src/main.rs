//! Strictly Mastermind - Unified CLI
//!
//! Plays Mastermind at the console or simulates bot matches.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use strictly_mastermind::{
    CodeBreaker, CodeMaker, ConsoleInput, MatchController, MatchEvent, MatchSettings,
    RandomBreaker, RandomMaker, RoleKind, SessionStats,
};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Settings file picked up from the working directory.
const DEFAULT_CONFIG: &str = "mastermind.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = match cli.command {
        Command::Play { .. } => "warn",
        Command::Simulate { .. } => "warn,strictly_mastermind=info",
    };
    initialize_tracing(default_filter);

    let settings = load_settings(cli.config.as_deref(), &cli.settings)?;

    match cli.command {
        Command::Play {
            maker,
            breaker,
            seed,
            no_color,
        } => run_play(settings, maker, breaker, seed, !no_color).await,
        Command::Simulate {
            matches,
            seed,
            json,
        } => run_simulate(settings, matches, seed, json).await,
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Defaults, then the settings file, then command-line flags.
#[instrument(skip(flags))]
fn load_settings(config: Option<&Path>, flags: &SettingsArgs) -> Result<MatchSettings> {
    let base = match config {
        Some(path) => MatchSettings::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => MatchSettings::from_file(DEFAULT_CONFIG)?,
        None => {
            debug!("No settings file, using defaults");
            MatchSettings::default()
        }
    };

    let settings = flags.apply(base);
    settings.validate()?;
    info!(
        sequence_length = settings.sequence_length(),
        max_attempts = settings.max_attempts(),
        palette_size = settings.palette_size(),
        allow_repeats = settings.allow_repeats(),
        "Settings ready"
    );
    Ok(settings)
}

/// Seed for one role in one round, so every match differs but replays alike.
fn role_seed(seed: Option<u64>, round: u64, offset: u64) -> Option<u64> {
    seed.map(|s| s.wrapping_add(round.wrapping_mul(2)).wrapping_add(offset))
}

/// Interactive loop: play, show the result, ask to go again.
#[instrument(skip(settings))]
async fn run_play(
    mut settings: MatchSettings,
    maker_kind: RoleKind,
    breaker_kind: RoleKind,
    seed: Option<u64>,
    color: bool,
) -> Result<()> {
    let console = Arc::new(Mutex::new(ConsoleInput::stdio().with_color(color)));
    let mut stats = SessionStats::new();
    let mut round = 0u64;

    loop {
        let maker = maker_kind.maker("Maker", role_seed(seed, round, 0), console.clone());
        let breaker = breaker_kind.breaker("Breaker", role_seed(seed, round, 1), console.clone());
        let mut controller = MatchController::new(maker, breaker);

        console
            .lock()
            .await
            .say(&format!(
                "\nMatch {}: {} ({}) sets the code, {} ({}) breaks it.\n",
                round + 1,
                controller.maker_name(),
                maker_kind,
                controller.breaker_name(),
                breaker_kind
            ))
            .await?;

        let finished = controller.run(&settings).await?;
        stats.record(finished.outcome());

        let mut io = console.lock().await;
        io.show_result(&finished).await?;
        io.say(&format!("{}\n\n", stats)).await?;

        if !io.ask_yes_no("Play again?").await? {
            break;
        }
        if !io.ask_yes_no("Keep the same settings?").await? {
            settings = io.ask_settings(&settings).await?;
        }
        round += 1;
    }

    info!(%stats, "Session over");
    Ok(())
}

/// Summary printed by `simulate --json`.
#[derive(Debug, Serialize)]
struct SimulationReport {
    settings: MatchSettings,
    seed: Option<u64>,
    stats: SessionStats,
    average_winning_attempts: Option<f64>,
}

/// Bot-versus-bot matches.
#[instrument(skip(settings))]
async fn run_simulate(
    settings: MatchSettings,
    matches: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<MatchEvent>();
    let logger = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!(?event, "Match event");
        }
    });

    let mut stats = SessionStats::new();
    for round in 0..matches as u64 {
        let maker: Box<dyn CodeMaker> = match role_seed(seed, round, 0) {
            Some(s) => Box::new(RandomMaker::seeded("Maker", s)),
            None => Box::new(RandomMaker::new("Maker")),
        };
        let breaker: Box<dyn CodeBreaker> = match role_seed(seed, round, 1) {
            Some(s) => Box::new(RandomBreaker::seeded("Breaker", s)),
            None => Box::new(RandomBreaker::new("Breaker")),
        };

        let mut controller = MatchController::new(maker, breaker).with_events(event_tx.clone());
        let finished = controller.run(&settings).await?;
        stats.record(finished.outcome());
    }

    drop(event_tx);
    logger.await?;
    info!(%stats, "Simulation finished");

    if json {
        let report = SimulationReport {
            average_winning_attempts: stats.average_winning_attempts(),
            settings,
            seed,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", stats);
    }
    Ok(())
}
