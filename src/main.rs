//! minimax_tictactoe - Unified CLI
//!
//! Play tic-tac-toe against the minimax opponent, or watch it play itself.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{
    GameConfig, GamePlayer, GameStatus, HumanPlayer, MinimaxPlayer, Orchestrator, Outcome, Player,
    render_events,
};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            human_player,
            computer_first,
            think_delay_ms,
        } => run_play(config, human_player, computer_first, think_delay_ms).await,
        Command::SelfPlay {
            games,
            think_delay_ms,
        } => run_self_play(games, think_delay_ms).await,
    }
}

/// Play one game against the computer on stdin/stdout.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: PathBuf,
    human_player: Option<Player>,
    computer_first: bool,
    think_delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)?;
    if let Some(player) = human_player {
        config = config.with_human_player(player);
    }
    if computer_first {
        config = config.with_human_first(false);
    }
    if let Some(delay) = think_delay_ms {
        config = config.with_think_delay_ms(delay);
    }
    info!(?config, "Starting game against the computer");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx, tokio::io::stdout()));

    let human: Box<dyn GamePlayer> = Box::new(HumanPlayer::new(
        "You",
        BufReader::new(tokio::io::stdin()),
        event_tx.clone(),
    ));
    let computer: Box<dyn GamePlayer> =
        Box::new(MinimaxPlayer::new("Computer", config.think_delay()));

    let (player_x, player_o) = match config.human_player() {
        Player::X => (human, computer),
        Player::O => (computer, human),
    };

    let mut orchestrator = Orchestrator::new(config.first_player(), player_x, player_o, event_tx);
    let result = orchestrator.run().await;

    // Dropping the orchestrator closes the event channel so the renderer
    // drains, even when the game ended with an error.
    drop(orchestrator);
    renderer.await??;
    let status = result?;

    if let Some(outcome) = Outcome::for_human(status, *config.human_player()) {
        println!("{}", outcome);
    }

    Ok(())
}

/// Let two minimax players face each other and report the results.
#[instrument]
async fn run_self_play(games: u32, think_delay_ms: u64) -> Result<()> {
    let delay = Duration::from_millis(think_delay_ms);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx, tokio::io::stdout()));

    let mut orchestrator = Orchestrator::new(
        Player::X,
        Box::new(MinimaxPlayer::new("Computer X", delay)),
        Box::new(MinimaxPlayer::new("Computer O", delay)),
        event_tx,
    );

    let result = play_games(&mut orchestrator, games).await;

    drop(orchestrator);
    renderer.await??;
    let (draws, wins) = result?;

    println!("Played {} game(s): {} draw(s), {} win(s)", games, draws, wins);
    Ok(())
}

/// Runs `games` games back to back and returns the draw and win counts.
async fn play_games(orchestrator: &mut Orchestrator, games: u32) -> Result<(u32, u32)> {
    let mut draws = 0;
    let mut wins = 0;
    for game in 1..=games {
        info!(game, "Starting self-play game");
        if orchestrator.run().await? == GameStatus::Draw {
            draws += 1;
        } else {
            wins += 1;
        }
        orchestrator.restart();
    }
    Ok((draws, wins))
}

fn initialize_tracing() {
    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
