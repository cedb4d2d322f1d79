//! Plain-text rendering of game events.

use crate::orchestrator::GameEvent;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Formats one event as terminal text.
pub fn format_event(event: &GameEvent) -> String {
    match event {
        GameEvent::StateChanged(board) => format!("\n{}\n\n", board),
        GameEvent::Thinking(name) => format!("{} is thinking...\n", name),
        GameEvent::Prompt(prompt) => prompt.clone(),
        GameEvent::InvalidMove(reason) => format!("Invalid move: {}\n", reason),
        GameEvent::MoveMade { player, position } => {
            format!("{} played {}\n", player, position)
        }
        GameEvent::GameOver { winner: Some(name) } => format!("Game over: {} wins\n", name),
        GameEvent::GameOver { winner: None } => "Game over: draw\n".to_string(),
    }
}

/// Writes events to `out` until every sender has been dropped.
#[instrument(skip_all)]
pub async fn render_events<W>(
    mut events: mpsc::UnboundedReceiver<GameEvent>,
    mut out: W,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(event) = events.recv().await {
        out.write_all(format_event(&event).as_bytes()).await?;
        out.flush().await?;
    }
    debug!("Event channel closed");
    Ok(())
}
