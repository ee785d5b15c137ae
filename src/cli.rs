//! Command-line interface for the terminal shell.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe - terminal shell over the game core
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe: hot seat, AI opponents, AI vs AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path of the save file used by the save/load commands
    #[arg(long, default_value = "gameState.ini")]
    pub save_file: PathBuf,

    /// Initial game mode code (0 hot seat, 1 AI easy, 2 AI hard, 3 AI vs AI)
    #[arg(long, default_value_t = 0)]
    pub mode: u8,

    /// Append outcome notifications to this file (stands in for the serial device)
    #[arg(long)]
    pub notify_device: Option<PathBuf>,

    /// Delay between AI-vs-AI moves, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub move_delay_ms: u64,
}
