//! CLI interface for Flightdeck.
//!
//! Running `flightdeck` with no subcommand opens the TUI. The `roster`
//! subcommand is the non-interactive surface: arguments in, structured
//! output out, for scripts and humans alike.

use clap::{Parser, Subcommand};

use crate::board::Board;
use crate::model::{Filter, MissionStatus};

/// Flightdeck — mission status at a glance.
#[derive(Debug, Parser)]
#[command(name = "flightdeck")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the mission roster as JSON.
    ///
    /// Pure read, no side effects, repeatable. The same derivation the
    /// TUI renders, written to stdout.
    Roster {
        /// Show only missions with this status (planned, active, completed).
        #[arg(long)]
        status: Option<MissionStatus>,
    },
}

/// Runs the roster command.
pub fn run_roster(status: Option<MissionStatus>) -> serde_json::Result<()> {
    let json = roster_json(status)?;
    println!("{json}");
    Ok(())
}

/// The visible roster under the given status filter, as pretty JSON.
fn roster_json(status: Option<MissionStatus>) -> serde_json::Result<String> {
    let mut board = Board::new();
    if let Some(status) = status {
        board.set_filter(Filter::Status(status));
    }
    serde_json::to_string_pretty(&board.visible())
}
