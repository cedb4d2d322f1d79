//! Computer player backed by exhaustive minimax search.

use super::Player;
use crate::games::tictactoe::{Game, Position};
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent that always plays an optimal move.
pub struct MinimaxPlayer {
    name: String,
    think_delay: Duration,
}

impl MinimaxPlayer {
    /// Creates a new minimax player that waits `think_delay` before
    /// its move is applied.
    pub fn new(name: impl Into<String>, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        let best = game
            .best_move()
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(position = %best.position, score = %best.score, "Computer chose position");

        // The move is already decided; the pause only paces the game.
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        Ok(best.position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}
