//! Exhaustive minimax search for the computer opponent.
//!
//! The 3x3 game tree is small enough to search to the end without
//! pruning or heuristics. Scores are taken from the perspective of a
//! fixed maximizing player and are not discounted by depth, so every
//! forced win scores the same regardless of how long it takes.

use super::rules::{has_won, is_full};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a board for the maximizing player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct Score(i32);

impl Score {
    /// The maximizing player wins.
    pub const WIN: Score = Score(10);
    /// The minimizing player wins.
    pub const LOSS: Score = Score(-10);
    /// Nobody wins.
    pub const DRAW: Score = Score(0);

    /// Returns the raw score.
    pub fn value(self) -> i32 {
        self.0
    }
}

/// A candidate move paired with the outcome it leads to under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Square to play.
    pub position: Position,
    /// Predicted outcome if this move is played.
    pub score: Score,
}

impl ScoredMove {
    /// Returns the board index (0-8) of the move.
    pub fn index(&self) -> usize {
        self.position.to_index()
    }
}

impl std::fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (score {})", self.position, self.score)
    }
}

/// Scores a terminal board, or returns `None` if play can continue.
///
/// The minimizing player's win is checked first, so on an (illegal)
/// board where both players own a pattern the result is [`Score::LOSS`].
pub fn terminal_score(board: &Board, maximizing: Player) -> Option<Score> {
    if has_won(board, maximizing.opponent()) {
        Some(Score::LOSS)
    } else if has_won(board, maximizing) {
        Some(Score::WIN)
    } else if is_full(board) {
        Some(Score::DRAW)
    } else {
        None
    }
}

/// Chooses the optimal move for `player_to_move`.
///
/// Empty squares are tried in ascending index order and ties keep the
/// first candidate, so the result is deterministic. The caller's board is
/// never modified; the search works on its own copy.
///
/// Returns `None` when the board is already terminal (a winner exists or
/// no square is empty).
#[instrument(skip(board))]
pub fn select_move(board: &Board, player_to_move: Player, maximizing: Player) -> Option<ScoredMove> {
    if let Some(score) = terminal_score(board, maximizing) {
        debug!(%score, "Board is terminal, no move to select");
        return None;
    }

    let mut working = *board;
    let mut search = Search::new(maximizing);
    let best = search.best_child(&mut working, player_to_move);

    debug!(nodes = search.nodes, best = ?best, "Search complete");
    best
}

/// Returns the backed-up minimax value of `board` with `player_to_move`
/// next to play.
#[instrument(skip(board))]
pub fn minimax(board: &Board, player_to_move: Player, maximizing: Player) -> Score {
    let mut working = *board;
    let mut search = Search::new(maximizing);
    let score = search.value(&mut working, player_to_move);
    debug!(nodes = search.nodes, %score, "Evaluation complete");
    score
}

/// State shared by one search invocation.
struct Search {
    maximizing: Player,
    nodes: u64,
}

impl Search {
    fn new(maximizing: Player) -> Self {
        Self {
            maximizing,
            nodes: 0,
        }
    }

    fn value(&mut self, board: &mut Board, to_move: Player) -> Score {
        self.nodes += 1;
        if let Some(score) = terminal_score(board, self.maximizing) {
            return score;
        }
        // A non-terminal board always has an empty square.
        self.best_child(board, to_move)
            .map_or(Score::DRAW, |best| best.score)
    }

    /// Plays every empty square in turn, restoring it afterwards, and
    /// keeps the best child for `to_move`.
    fn best_child(&mut self, board: &mut Board, to_move: Player) -> Option<ScoredMove> {
        let maximizing = to_move == self.maximizing;
        let mut best: Option<ScoredMove> = None;

        for position in Position::valid_moves(board) {
            board.set(position, Square::Occupied(to_move));
            let score = self.value(board, to_move.opponent());
            board.set(position, Square::Empty);

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove { position, score });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells.chars()) {
            *square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_score_values() {
        assert_eq!(Score::WIN.value(), 10);
        assert_eq!(Score::LOSS.value(), -10);
        assert_eq!(Score::DRAW.value(), 0);
        assert!(Score::LOSS < Score::DRAW && Score::DRAW < Score::WIN);
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(&board_from("XXXOO...."), Player::X), Some(Score::WIN));
        assert_eq!(terminal_score(&board_from("XXXOO...."), Player::O), Some(Score::LOSS));
        assert_eq!(terminal_score(&board_from("XOXOXXOXO"), Player::X), Some(Score::DRAW));
        assert_eq!(terminal_score(&board_from("XO......."), Player::X), None);
    }

    #[test]
    fn test_minimizing_win_takes_precedence() {
        let board = board_from("XXXOOO...");
        assert_eq!(terminal_score(&board, Player::X), Some(Score::LOSS));
        assert_eq!(terminal_score(&board, Player::O), Some(Score::LOSS));
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        assert_eq!(select_move(&board_from("XXXOO...."), Player::O, Player::O), None);
        assert_eq!(select_move(&board_from("XOXOXXOXO"), Player::X, Player::X), None);
    }

    #[test]
    fn test_single_empty_square_is_chosen() {
        // X O X / X O O / O X _
        let board = board_from("XOXXOOOX.");
        let best = select_move(&board, Player::X, Player::X).unwrap();
        assert_eq!(best.position, Position::BottomRight);
        assert_eq!(best.score, Score::DRAW);
    }

    #[test]
    fn test_minimizer_picks_lowest_score() {
        // O to move but X is maximizing: blocking at 2 holds the draw.
        let board = board_from("XX..O....");
        let best = select_move(&board, Player::O, Player::X).unwrap();
        assert_eq!(best.index(), 2);
        assert_eq!(best.score, Score::DRAW);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax(&Board::new(), Player::X, Player::X), Score::DRAW);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        // Every reply draws from the empty board, so the first square wins the tie.
        let best = select_move(&Board::new(), Player::X, Player::X).unwrap();
        assert_eq!(best.position, Position::TopLeft);
        assert_eq!(best.score, Score::DRAW);
    }
}
