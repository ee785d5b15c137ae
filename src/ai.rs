//! Pluggable move strategies for the AI opponent.

use crate::board::{Board, Mark, Position, Square};
use crate::rules;
use rand::Rng;
use tracing::{debug, instrument};

/// AI strength selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Uniformly random open cell.
    Easy,
    /// Win if able, block if threatened, then positional preference.
    Hard,
}

/// A move-selection strategy.
///
/// `choose` must return an open cell; `None` only when the board is
/// full. Returning an occupied cell is a bug in the strategy, and the
/// session will reject the move.
pub trait Strategy: Send {
    /// Picks the next cell for `mark` on `board`.
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position>;

    /// The strategy's display name.
    fn name(&self) -> &'static str;
}

/// Builds the strategy for a difficulty level.
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyStrategy::new()),
        Difficulty::Hard => Box::new(HardStrategy),
    }
}

/// Picks a uniformly random open cell.
#[derive(Debug, Default)]
pub struct EasyStrategy;

impl EasyStrategy {
    /// Creates the random strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for EasyStrategy {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position> {
        let open = board.open_cells();
        if open.is_empty() {
            return None;
        }
        let pick = open[rand::rng().random_range(0..open.len())];
        debug!(cell = %pick, "easy strategy chose");
        Some(pick)
    }

    fn name(&self) -> &'static str {
        "easy"
    }
}

/// Deterministic heuristic: complete an own line, block the opponent's,
/// otherwise prefer center, then corners, then the first open cell.
#[derive(Debug, Default)]
pub struct HardStrategy;

impl Strategy for HardStrategy {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position> {
        let pick = winning_cell(board, mark)
            .or_else(|| winning_cell(board, mark.opponent()))
            .or_else(|| open(board, Position::B2))
            .or_else(|| {
                [Position::A1, Position::A3, Position::C1, Position::C3]
                    .into_iter()
                    .find(|pos| board.is_empty(*pos))
            })
            .or_else(|| board.open_cells().first().copied());
        if let Some(cell) = pick {
            debug!(cell = %cell, "hard strategy chose");
        }
        pick
    }

    fn name(&self) -> &'static str {
        "hard"
    }
}

fn open(board: &Board, pos: Position) -> Option<Position> {
    board.is_empty(pos).then_some(pos)
}

/// Finds a cell that would complete a line for `mark`, if one exists.
fn winning_cell(board: &Board, mark: Mark) -> Option<Position> {
    board.open_cells().into_iter().find(|pos| {
        let mut trial = board.clone();
        trial.set(*pos, Square::Occupied(mark));
        rules::check_winner(&trial) == Some(mark)
    })
}
