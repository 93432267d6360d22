//! Strictly Mastermind library - type-safe Mastermind match engine
//!
//! A code maker commits a secret sequence of coloured pegs and a code
//! breaker tries to reproduce it within a fixed attempt budget, receiving
//! exact/colour-only feedback after every guess.
//!
//! # Architecture
//!
//! - **Games**: Board typestates, feedback rules, contracts and invariants
//! - **Settings**: Validated per-match configuration, loadable from TOML
//! - **Players**: Async maker/breaker roles (random bots, fixed, interactive)
//! - **Orchestrator**: Runs one match between two roles
//! - **Session**: Win tallies across matches
//! - **Console**: Line-based human input and board rendering
//!
//! # Example
//!
//! ```no_run
//! use strictly_mastermind::{MatchController, MatchSettings, RandomBreaker, RandomMaker};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = MatchSettings::default();
//! let mut controller = MatchController::new(
//!     Box::new(RandomMaker::seeded("Maker", 7)),
//!     Box::new(RandomBreaker::seeded("Breaker", 11)),
//! );
//! let finished = controller.run(&settings).await?;
//! println!("{}", finished.message());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod orchestrator;
mod players;
mod session;
mod settings;

// Crate-level exports - Match engine
pub use games::mastermind::{
    AnyBoard, Attempt, BoardError, BoardFinished, BoardInPlay, BoardPhase, BoardSetup,
    BoardSnapshot, Feedback, MakerVictory, MatchStatus, Outcome, ParseSequenceError, Peg,
    Sequence, SequenceRole, check_sequence, evaluate, judge,
};

// Crate-level exports - Contracts and invariants
pub use games::mastermind::{
    AttemptContract, BudgetConsistentInvariant, BudgetRemaining, Contract,
    FeedbackConsistentInvariant, Invariant, InvariantSet, InvariantViolation, LegalAttempt,
    LengthMatches, MastermindInvariants, NoForbiddenRepeats, OutcomeMatchesBoard, SecretContract,
    UniformLengthInvariant, WithinPalette,
};

// Crate-level exports - Settings
pub use settings::{
    MAX_PALETTE_SIZE, MAX_SEQUENCE_LENGTH, MIN_ATTEMPTS, MIN_PALETTE_SIZE, MIN_SEQUENCE_LENGTH,
    MatchSettings, SettingsError,
};

// Crate-level exports - Roles
pub use players::{
    CodeBreaker, CodeMaker, FixedMaker, GuessInput, HumanInput, InteractiveBreaker,
    InteractiveMaker, RandomBreaker, RandomMaker, RoleKind,
};

// Crate-level exports - Orchestration
pub use orchestrator::{MatchController, MatchError, MatchEvent};
pub use session::SessionStats;

// Crate-level exports - Console
pub use console::ConsoleInput;
