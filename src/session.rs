//! Game session state and move application.

use crate::board::{Board, Mark, Position, Square};
use crate::mode::Mode;
use crate::rules::{self, GameStatus};
use crate::stats::Stats;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
    /// The game has already ended; reset before playing again.
    #[display("the game is already over")]
    Finished,
}

/// One game's in-memory state: board, turn, mode, and running stats.
///
/// All mutation goes through the session's methods; the evaluator and
/// codec are pure functions over this state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    turn: Mark,
    mode: Mode,
    stats: Stats,
    status: GameStatus,
}

impl Session {
    /// Creates a fresh session: empty board, X to move, zeroed stats.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            mode,
            stats: Stats::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Reassembles a session from persisted parts.
    ///
    /// The status is not persisted; it is recomputed from the board.
    pub fn from_parts(board: Board, turn: Mark, mode: Mode, stats: Stats) -> Self {
        let status = rules::evaluate(&board);
        Self {
            board,
            turn,
            mode,
            stats,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose move is next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches mode.
    ///
    /// Re-read by the auto-play loop at the top of every iteration, so
    /// changing away from [`Mode::AiVsAi`] cancels it.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns the running stats.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the last evaluated status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the session has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Places the current turn's mark at `pos`.
    ///
    /// On success the turn flips, the board is re-evaluated, and a
    /// terminal outcome is recorded into the stats. Rejected moves
    /// (occupied cell, finished game) leave the session untouched.
    ///
    /// # Errors
    ///
    /// [`MoveError::Finished`] if the game is over,
    /// [`MoveError::Occupied`] if the cell holds a mark.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::Finished);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.turn));
        self.turn = self.turn.opponent();
        self.status = rules::evaluate(&self.board);

        if self.status.is_over() {
            info!(status = ?self.status, "game over");
            self.stats.record(&self.status);
        }
        Ok(self.status)
    }

    /// Clears the board for another round, keeping the stats.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
    }

    /// Clears the board and zeroes the stats.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.restart();
        self.stats.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::HotSeat)
    }
}
