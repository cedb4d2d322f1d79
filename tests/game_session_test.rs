//! Tests for the game session and orchestrated play.

use minimax_tictactoe::{
    Game, GameEvent, GameStatus, HumanPlayer, MinimaxPlayer, MoveError, Orchestrator, Outcome,
    Player, Position, render_events,
};
use std::time::Duration;
use tokio::io::BufReader;
use tokio::sync::mpsc;

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[test]
fn test_draw_detection() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ] {
        game.make_move(pos).expect("Valid move");
    }

    assert_eq!(game.state().status(), GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert_eq!(game.state().history().len(), 9);
}

#[test]
fn test_reset_restores_first_player() {
    let mut game = Game::with_first_player(Player::O);
    game.make_move(Position::Center).unwrap();
    assert_eq!(game.to_move(), Some(Player::X));

    game.reset();
    assert_eq!(game.to_move(), Some(Player::O));
    assert!(game.state().history().is_empty());
    assert!(game.board().is_empty(Position::Center));
}

#[test]
fn test_best_move_completes_row() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
    ] {
        game.make_move(pos).unwrap();
    }

    let best = game.best_move().expect("Game in progress");
    assert_eq!(best.position, Position::TopRight);
    game.make_move(best.position).unwrap();
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
    assert_eq!(
        game.make_move(Position::BottomRight),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_computer_plays_every_human_game_to_at_least_a_draw() {
    // Human opens in each square; the computer answers optimally after that,
    // with the human also playing optimal replies.
    for opening in Position::ALL {
        let mut game = Game::new();
        game.make_move(opening).unwrap();
        while let Some(best) = game.best_move() {
            game.make_move(best.position).unwrap();
        }
        assert_eq!(game.state().status(), GameStatus::Draw, "opening {opening}");
    }
}

#[tokio::test]
async fn test_self_play_is_a_draw() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Player::X,
        Box::new(MinimaxPlayer::new("Computer X", Duration::ZERO)),
        Box::new(MinimaxPlayer::new("Computer O", Duration::ZERO)),
        tx,
    );

    let status = orchestrator.run().await.expect("Game completes");
    assert_eq!(status, GameStatus::Draw);

    let events = drain(&mut rx);
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 9);
    assert_eq!(events.last(), Some(&GameEvent::GameOver { winner: None }));

    orchestrator.restart();
    assert!(orchestrator.game().state().history().is_empty());
}

#[tokio::test]
async fn test_human_loses_after_blunder() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    // 1 and 2 force the computer to take the center and block at 3;
    // 9 ignores the computer's diagonal threat. Later lines fill any
    // remaining turn, skipping squares that are taken.
    let input = BufReader::new(&b"1\n2\n9\n4\n5\n6\n7\n8\n3\n"[..]);
    let human = HumanPlayer::new("You", input, tx.clone());
    let computer = MinimaxPlayer::new("Computer", Duration::ZERO);

    let mut orchestrator = Orchestrator::new(Player::X, Box::new(human), Box::new(computer), tx);
    let status = orchestrator.run().await.expect("Game completes");

    assert_eq!(status, GameStatus::Won(Player::O));
    assert_eq!(Outcome::for_human(status, Player::X), Some(Outcome::ComputerWins));
    assert_eq!(Outcome::ComputerWins.to_string(), "You lose");

    let events = drain(&mut rx);
    assert!(events.contains(&GameEvent::Thinking("Computer".to_string())));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            winner: Some("Computer".to_string())
        })
    );
}

#[tokio::test]
async fn test_human_input_is_validated() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let input = BufReader::new(&b"abc\n5\n5\n"[..]);
    let human = HumanPlayer::new("You", input, tx.clone());
    let computer = MinimaxPlayer::new("Computer", Duration::ZERO);

    let mut orchestrator = Orchestrator::new(Player::X, Box::new(human), Box::new(computer), tx);
    let result = orchestrator.run().await;
    assert!(result.is_err(), "input ends before the game does");

    let events = drain(&mut rx);
    assert!(events.contains(&GameEvent::InvalidMove(
        "'abc' is not a square, enter a number from 1 to 9".to_string()
    )));
    assert!(events.contains(&GameEvent::InvalidMove("Center is already taken".to_string())));
    assert!(events.contains(&GameEvent::MoveMade {
        player: "You".to_string(),
        position: Position::Center,
    }));
}

#[tokio::test]
async fn test_events_reach_renderer_after_failed_game() {
    let (tx, rx) = mpsc::unbounded_channel();
    let input = BufReader::new(&b"abc\n"[..]);
    let human = HumanPlayer::new("You", input, tx.clone());
    let computer = MinimaxPlayer::new("Computer", Duration::ZERO);

    let mut orchestrator = Orchestrator::new(Player::X, Box::new(human), Box::new(computer), tx);
    let result = orchestrator.run().await;
    drop(orchestrator);

    // With every sender gone the renderer finishes after writing the backlog.
    let mut out = Vec::new();
    render_events(rx, &mut out).await.expect("Render to memory");
    assert!(result.is_err());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Invalid move: 'abc' is not a square, enter a number from 1 to 9\n"));
    assert!(text.ends_with("You, your move (1-9): "));
}
