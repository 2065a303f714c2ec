//! One round of rock-paper-scissors against a randomly drawn computer move.
//!
//! The crate is organized the way a round flows:
//! - [`Move`] — the three throws and the beats-relation between them
//! - [`Opponent`] — anything that can throw a move ([`Robot`] draws uniformly)
//! - [`Round`] — a raw user string paired with a computer move, classified into an [`Outcome`]
//! - [`RoundEvaluator`] — prompts, reads one line, draws, classifies and prints
pub mod cli;
pub mod evaluator;
pub mod moves;
pub mod outcome;
pub mod players;
pub mod round;

pub use evaluator::RoundEvaluator;
pub use moves::Move;
pub use outcome::Outcome;
pub use outcome::Verdict;
pub use players::Human;
pub use players::Opponent;
pub use players::Robot;
pub use round::Round;

// ============================================================================
// MESSAGES
// ============================================================================
/// Written to stdout, without a newline, before reading the user's move.
pub const PROMPT: &str = "Enter rock, paper, or scissors: ";
/// Advisory line printed when the user's input is not a move.
pub const INVALID_NOTICE: &str = "Invalid choice. Please try again.";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable that raises the terminal log level to DEBUG.
pub const DEBUG_ENV: &str = "ROSHAMBO_DEBUG";

/// Terminal stream for logs; stdout belongs to the game.
#[cfg(feature = "cli")]
pub const LOG_TERMINAL: simplelog::TerminalMode = simplelog::TerminalMode::Stderr;

/// DEBUG when the debug variable is present at all, WARN otherwise.
pub fn verbosity(debug: Option<std::ffi::OsString>) -> log::LevelFilter {
    match debug {
        Some(_) => log::LevelFilter::Debug,
        None => log::LevelFilter::Warn,
    }
}

/// Initialize terminal logging on stderr, keeping stdout for the game itself.
/// Logs WARN and above, or DEBUG and above when `ROSHAMBO_DEBUG` is set.
#[cfg(feature = "cli")]
pub fn log() {
    let level = verbosity(std::env::var_os(DEBUG_ENV));
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        LOG_TERMINAL,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
