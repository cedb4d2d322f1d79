//! Command-line interface for minimax_tictactoe.

use minimax_tictactoe::Player;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tic-tac-toe against an unbeatable computer opponent
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the terminal
    Play {
        /// Path to the game config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Symbol to play as
        #[arg(long, value_enum, ignore_case = true)]
        human_player: Option<Player>,

        /// Let the computer move first
        #[arg(long)]
        computer_first: bool,

        /// Pause before the computer's move, in milliseconds
        #[arg(long)]
        think_delay_ms: Option<u64>,
    },

    /// Let the computer play against itself
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Pause before each move, in milliseconds
        #[arg(long, default_value = "0")]
        think_delay_ms: u64,
    },
}
