//! Game session for tic-tac-toe.
//!
//! Applies moves with validation, tracks status and history, and asks the
//! search for the best reply of the player to move.

use super::rules::{check_winner, is_full};
use super::search::{ScoredMove, select_move};
use super::types::{Board, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Move history (positions played).
    history: Vec<Position>,
}

impl GameState {
    fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    first_player: Player,
}

impl Game {
    /// Creates a new game with X to move first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Creates a new game with the given player to move first.
    #[instrument]
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            state: GameState::new(first_player),
            first_player,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        (!self.is_over()).then_some(self.state.current_player)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.status != GameStatus::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.state.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Places the current player's mark at `position`.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.state.current_player;
        self.state.board.set(position, Square::Occupied(player));
        self.state.history.push(position);
        self.state.current_player = player.opponent();
        debug!(%player, %position, "Move applied");

        self.update_status();
        Ok(())
    }

    /// Returns the optimal move for the player to move, or `None` once the
    /// game is over.
    #[instrument(skip(self))]
    pub fn best_move(&self) -> Option<ScoredMove> {
        let player = self.to_move()?;
        select_move(&self.state.board, player, player)
    }

    /// Clears the board and history, keeping the configured first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(first_player = %self.first_player, "Resetting game");
        self.state = GameState::new(self.first_player);
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = check_winner(&self.state.board) {
            info!(%winner, "Game won");
            self.state.status = GameStatus::Won(winner);
        } else if is_full(&self.state.board) {
            info!("Game drawn");
            self.state.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a finished game from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The human completed a pattern.
    #[display("You win")]
    HumanWins,
    /// The computer completed a pattern.
    #[display("You lose")]
    ComputerWins,
    /// The board filled up without a winner.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Interprets a finished game for a human playing `human`.
    ///
    /// Returns `None` while the game is still in progress.
    pub fn for_human(status: GameStatus, human: Player) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::Won(winner) if winner == human => Some(Outcome::HumanWins),
            GameStatus::Won(_) => Some(Outcome::ComputerWins),
        }
    }
}
