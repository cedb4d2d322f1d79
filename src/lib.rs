//! Tic-tac-toe against an unbeatable computer opponent.
//!
//! The opponent searches the whole game tree with minimax and always
//! plays an optimal move, so the best a human can do is draw.
//!
//! # Architecture
//!
//! - **Games**: board model, win/draw rules, minimax search and the game
//!   session (`Game`)
//! - **Players**: human (line input) and computer (minimax) players
//! - **Orchestrator**: turn loop emitting `GameEvent`s
//! - **Terminal**: plain-text rendering of events
//! - **Config**: TOML game settings
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Player, Position, Square, select_move};
//!
//! let mut board = Board::new();
//! board.set(Position::TopLeft, Square::Occupied(Player::X));
//! board.set(Position::TopCenter, Square::Occupied(Player::X));
//! board.set(Position::Center, Square::Occupied(Player::O));
//!
//! // O must block the top row.
//! let best = select_move(&board, Player::O, Player::O).unwrap();
//! assert_eq!(best.position, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod orchestrator;
mod players;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{HumanPlayer, MinimaxPlayer, Player as GamePlayer};

// Crate-level exports - Rendering
pub use terminal::{format_event, render_events};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameState, GameStatus, MoveError, Outcome, Player, Position, Score, ScoredMove,
    Square, WINNING_PATTERNS, check_winner, has_won, is_draw, is_full, minimax, select_move,
    terminal_score,
};
