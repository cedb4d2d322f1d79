//! Human player that types moves on a line-oriented input.

use super::Player;
use crate::games::tictactoe::{Game, Position};
use crate::orchestrator::GameEvent;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Human player reading one move per line.
///
/// Accepts a square number (1-9) or a position label. Prompts and
/// complaints about bad input are sent as [`GameEvent`]s so they are
/// rendered in order with the board.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        input: R,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
            event_tx,
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        loop {
            self.event_tx
                .send(GameEvent::Prompt(format!("{}, your move (1-9): ", self.name)))?;

            let Some(line) = self.lines.next_line().await? else {
                anyhow::bail!("Input closed");
            };

            match Position::from_label_or_number(&line) {
                Some(pos) if game.board().is_empty(pos) => {
                    debug!(position = %pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => {
                    self.event_tx
                        .send(GameEvent::InvalidMove(format!("{} is already taken", pos)))?;
                }
                None => {
                    self.event_tx.send(GameEvent::InvalidMove(format!(
                        "'{}' is not a square, enter a number from 1 to 9",
                        line.trim()
                    )))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
