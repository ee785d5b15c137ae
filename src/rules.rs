//! Outcome evaluation over a board.
//!
//! Pure functions only: the evaluator never mutates the board and has
//! no side effects, so the session and codec can call it freely.

use crate::board::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues; at least one cell is open and no line is won.
    InProgress,
    /// A line is fully occupied by this mark.
    Won(Mark),
    /// Every cell is occupied and no line is won.
    Tie,
}

impl GameStatus {
    /// Whether this status is terminal (win or tie).
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Whether the game ended with a full board and no winner.
    pub fn is_tie(self) -> bool {
        self == GameStatus::Tie
    }
}

/// The eight winning lines, in evaluation order: rows A, B, C, then
/// columns 1, 2, 3, then diagonal A1-C3, then diagonal C1-A3.
const LINES: [[Position; 3]; 8] = [
    [Position::A1, Position::A2, Position::A3],
    [Position::B1, Position::B2, Position::B3],
    [Position::C1, Position::C2, Position::C3],
    [Position::A1, Position::B1, Position::C1],
    [Position::A2, Position::B2, Position::C2],
    [Position::A3, Position::B3, Position::C3],
    [Position::A1, Position::B2, Position::C3],
    [Position::C1, Position::B2, Position::A3],
];

/// Checks the eight lines for a winner.
///
/// Returns the first winning mark in evaluation order. On a legal board
/// at most one mark can hold a line, so order only matters for boards
/// that never arose from normal play.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }
    None
}

/// Checks whether every cell is occupied.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Evaluates a board to a [`GameStatus`].
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_all_eight_lines_win_for_x() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (pos, Mark::X)));
            let status = evaluate(&board);
            assert_eq!(status, GameStatus::Won(Mark::X), "line {line:?}");
            assert!(status.is_over());
            assert_eq!(status.winner(), Some(Mark::X));
            assert!(!status.is_tie());
        }
    }

    #[test]
    fn test_column_win_for_o() {
        let board = board_with(&[
            (Position::A2, Mark::O),
            (Position::B2, Mark::O),
            (Position::C2, Mark::O),
        ]);
        assert_eq!(evaluate(&board), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_full_board_no_line_is_tie() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[
            (Position::A1, Mark::X),
            (Position::A2, Mark::O),
            (Position::A3, Mark::X),
            (Position::B1, Mark::X),
            (Position::B2, Mark::O),
            (Position::B3, Mark::O),
            (Position::C1, Mark::O),
            (Position::C2, Mark::X),
            (Position::C3, Mark::X),
        ]);
        let status = evaluate(&board);
        assert_eq!(status, GameStatus::Tie);
        assert!(status.is_over());
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn test_open_board_no_line_continues() {
        let board = board_with(&[
            (Position::A1, Mark::X),
            (Position::A2, Mark::X),
            (Position::B2, Mark::O),
        ]);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = board_with(&[(Position::A1, Mark::X)]);
        let before = board.clone();
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}
