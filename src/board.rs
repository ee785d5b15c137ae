//! Core domain types for the tic-tac-toe board.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The single-character symbol used in save files and displays.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parses a mark from its symbol.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// A cell on the 3x3 board, named row-letter + column-digit.
///
/// Rows A, B, C run top to bottom; columns 1-3 run left to right.
/// The cell keys double as the `[Board]` keys in the save format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left.
    A1,
    /// Top-center.
    A2,
    /// Top-right.
    A3,
    /// Middle-left.
    B1,
    /// Center.
    B2,
    /// Middle-right.
    B3,
    /// Bottom-left.
    C1,
    /// Bottom-center.
    C2,
    /// Bottom-right.
    C3,
}

impl Position {
    /// All 9 cells in row-major order.
    pub const ALL: [Position; 9] = [
        Position::A1,
        Position::A2,
        Position::A3,
        Position::B1,
        Position::B2,
        Position::B3,
        Position::C1,
        Position::C2,
        Position::C3,
    ];

    /// The stable cell key used in save files.
    pub fn key(self) -> &'static str {
        match self {
            Position::A1 => "A1",
            Position::A2 => "A2",
            Position::A3 => "A3",
            Position::B1 => "B1",
            Position::B2 => "B2",
            Position::B3 => "B3",
            Position::C1 => "C1",
            Position::C2 => "C2",
            Position::C3 => "C3",
        }
    }

    /// Parses a cell from its key (case-sensitive, e.g. `"B2"`).
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "A1" => Some(Position::A1),
            "A2" => Some(Position::A2),
            "A3" => Some(Position::A3),
            "B1" => Some(Position::B1),
            "B2" => Some(Position::B2),
            "B3" => Some(Position::B3),
            "C1" => Some(Position::C1),
            "C2" => Some(Position::C2),
            "C3" => Some(Position::C3),
            _ => None,
        }
    }

    /// Row index (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column index (0-2, left to right).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::A1 => 0,
            Position::A2 => 1,
            Position::A3 => 2,
            Position::B1 => 3,
            Position::B2 => 4,
            Position::B3 => 5,
            Position::C1 => 6,
            Position::C2 => 7,
            Position::C3 => 8,
        }
    }

    /// Creates a cell from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks whether a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Cells that are still empty, in row-major order.
    pub fn open_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Square::Empty => '.',
                    Square::Occupied(mark) => mark.symbol(),
                };
                out.push(symbol);
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_keys_round_trip() {
        for pos in Position::ALL {
            assert_eq!(Position::from_key(pos.key()), Some(pos));
        }
    }

    #[test]
    fn test_position_indices_row_major() {
        assert_eq!(Position::A1.to_index(), 0);
        assert_eq!(Position::B2.to_index(), 4);
        assert_eq!(Position::C3.to_index(), 8);
        assert_eq!(Position::B2.row(), 1);
        assert_eq!(Position::B2.col(), 1);
    }

    #[test]
    fn test_board_set_get() {
        let mut board = Board::new();
        assert!(board.is_empty(Position::B2));
        board.set(Position::B2, Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::B2), Square::Occupied(Mark::X));
        assert!(!board.is_empty(Position::B2));
    }

    #[test]
    fn test_open_cells_shrinks() {
        let mut board = Board::new();
        assert_eq!(board.open_cells().len(), 9);
        board.set(Position::A1, Square::Occupied(Mark::X));
        let open = board.open_cells();
        assert_eq!(open.len(), 8);
        assert!(!open.contains(&Position::A1));
    }
}
