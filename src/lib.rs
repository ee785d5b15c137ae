//! Tic-tac-toe game core: rules, session state, stats, and save files.
//!
//! This crate is the engine behind a desktop tic-tac-toe client. The
//! shell (GUI or terminal) owns a [`Session`] and calls into the core;
//! the core never touches presentation.
//!
//! # Architecture
//!
//! - **Board**: marks, named cells (`A1`..`C3`), and the 3x3 grid
//! - **Rules**: pure outcome evaluation over the eight winning lines
//! - **Session**: move application, turn order, restart vs. new game
//! - **Codec**: the INI-style save-file format, round-trip safe
//! - **AI**: pluggable easy/hard move strategies
//! - **Autoplay**: the AI-vs-AI loop with a fixed inter-move delay
//! - **Notify**: best-effort outcome delivery to a peer device
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Mode, Position, Session};
//!
//! let mut session = Session::new(Mode::HotSeat);
//! session.apply_move(Position::B2)?;
//! assert!(!session.is_over());
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod autoplay;
mod board;
pub mod codec;
mod mode;
mod notify;
mod rules;
mod session;
mod stats;

pub use ai::{Difficulty, EasyStrategy, HardStrategy, Strategy, strategy_for};
pub use autoplay::{Autoplay, DEFAULT_MOVE_DELAY, GameEvent};
pub use board::{Board, Mark, Position, Square};
pub use codec::ParseError;
pub use mode::Mode;
pub use notify::{LineNotifier, outcome_message, spawn_line_reader};
pub use rules::{GameStatus, check_winner, evaluate, is_full};
pub use session::{MoveError, Session};
pub use stats::Stats;
