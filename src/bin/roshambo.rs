//! Rock-Paper-Scissors Binary
//!
//! Prompts for a move on stdin, plays it against a random computer move,
//! and prints the outcome. Always exits 0 unless stdio itself fails.

use clap::Parser;
use roshambo::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::Cli::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let round = RoundEvaluator::<Robot>::default().play(stdin.lock(), stdout.lock())?;
    log::debug!("round finished: {}", round.classify());
    Ok(())
}
