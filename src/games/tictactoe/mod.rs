//! Tic-tac-toe: board model, rules, minimax search and game session.

mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use game::{Game, GameState, GameStatus, MoveError, Outcome};
pub use position::Position;
pub use rules::{WINNING_PATTERNS, check_winner, has_won, is_draw, is_full};
pub use search::{Score, ScoredMove, minimax, select_move, terminal_score};
pub use types::{Board, Player, Square};
