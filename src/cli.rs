//! Command-line surface. The game takes no arguments of its own; `clap`
//! supplies `--help` and `--version` and rejects anything else.
#[cfg(feature = "cli")]
#[derive(Debug, clap::Parser)]
#[command(name = "roshambo")]
#[command(version, about = "Play one round of rock-paper-scissors against the computer", long_about = None)]
pub struct Cli {}
