//! Game orchestration between players.

use crate::games::tictactoe::{Game, GameStatus, Player as Mark, Position};
use crate::players::Player;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator and players to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game state updated; carries the rendered board.
    StateChanged(String),
    /// A computer player is choosing its move.
    Thinking(String),
    /// A player is asked for input.
    Prompt(String),
    /// Input was rejected.
    InvalidMove(String),
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Square that was played.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// Name of the winner, `None` for a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator for a game where `first` moves first.
    pub fn new(
        first: Mark,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::with_first_player(first),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game is won or drawn.
    ///
    /// Only the player to move is asked for input, so nobody can play
    /// while the computer is thinking.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.event_tx
            .send(GameEvent::StateChanged(self.game.board().display()))?;

        loop {
            let Some(current) = self.game.to_move() else {
                let winner = self.game.winner().map(|mark| self.player(mark).name().to_string());
                info!(?winner, "Game over");
                self.event_tx.send(GameEvent::GameOver { winner })?;
                return Ok(self.game.state().status());
            };

            let player = match current {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            if player.is_computer() {
                self.event_tx.send(GameEvent::Thinking(player_name.clone()))?;
            }

            debug!(player = %player_name, "Waiting for move");
            let position = player.get_move(&self.game).await?;

            if let Err(e) = self.game.make_move(position) {
                warn!(player = %player_name, error = %e, "Rejected move");
                if player.is_computer() {
                    return Err(e.into());
                }
                self.event_tx.send(GameEvent::InvalidMove(e.to_string()))?;
                continue;
            }

            self.event_tx.send(GameEvent::MoveMade {
                player: player_name,
                position,
            })?;
            self.event_tx
                .send(GameEvent::StateChanged(self.game.board().display()))?;
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.game.reset();
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }
}
