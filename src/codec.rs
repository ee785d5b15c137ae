//! Save-file codec.
//!
//! The format is the flat INI-style text the desktop client always
//! wrote: three bracketed sections, one `key=value` pair per line.
//!
//! ```text
//! [Game]
//! Turn=X
//! Mode=0
//! [Board]
//! A1=X
//! A2=
//! ...
//! [Stats]
//! WinsX=2
//! WinsO=1
//! Ties=3
//! ```
//!
//! Unknown keys are ignored so newer writers stay readable. The game
//! status is not stored; it is recomputed from the board on load.

use crate::board::{Board, Mark, Position, Square};
use crate::mode::Mode;
use crate::session::Session;
use crate::stats::Stats;
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Errors produced while loading a saved session.
#[derive(Debug, Display, Error, From)]
pub enum ParseError {
    /// The save file could not be read.
    #[display("failed to read save file: {_0}")]
    #[from]
    Io(std::io::Error),
    /// A required `[section]` header is absent.
    #[display("missing section [{section}]")]
    MissingSection {
        /// Name of the absent section.
        section: &'static str,
    },
    /// A required key is absent from its section.
    #[display("missing key {key} in section [{section}]")]
    MissingKey {
        /// Section the key belongs to.
        section: &'static str,
        /// Name of the absent key.
        key: String,
    },
    /// A cell or turn value is not a recognized mark.
    #[display("invalid mark {value:?} for key {key}")]
    InvalidMark {
        /// Key whose value failed to parse.
        key: String,
        /// The offending value.
        value: String,
    },
    /// A numeric field is not a valid decimal integer.
    #[display("invalid number {value:?} for key {key}")]
    InvalidNumber {
        /// Key whose value failed to parse.
        key: String,
        /// The offending value.
        value: String,
    },
    /// The mode code is outside the known range.
    #[display("unknown mode code {_0}")]
    UnknownMode(#[error(not(source))] u8),
}

/// Serializes a session to the save-file text.
#[instrument(skip(session))]
pub fn serialize(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("[Game]\n");
    out.push_str(&format!("Turn={}\n", session.turn().symbol()));
    out.push_str(&format!("Mode={}\n", session.mode().code()));

    out.push_str("[Board]\n");
    for pos in Position::ALL {
        let value = match session.board().get(pos) {
            Square::Empty => String::new(),
            Square::Occupied(mark) => mark.symbol().to_string(),
        };
        out.push_str(&format!("{}={}\n", pos.key(), value));
    }

    out.push_str("[Stats]\n");
    out.push_str(&format!("WinsX={}\n", session.stats().wins_x));
    out.push_str(&format!("WinsO={}\n", session.stats().wins_o));
    out.push_str(&format!("Ties={}\n", session.stats().ties));
    out
}

/// Parses the save-file text back into a session.
///
/// Never mutates any existing session; on failure the caller's state
/// is simply left alone.
///
/// # Errors
///
/// See [`ParseError`] for the failure cases: missing section or key,
/// unparseable mark, non-numeric counter, unknown mode code.
#[instrument(skip(text))]
pub fn deserialize(text: &str) -> Result<Session, ParseError> {
    let sections = split_sections(text);

    let game = section(&sections, "Game")?;
    let turn_raw = require(game, "Game", "Turn")?;
    let turn = Mark::from_symbol(turn_raw).ok_or_else(|| ParseError::InvalidMark {
        key: "Turn".to_string(),
        value: turn_raw.to_string(),
    })?;
    let mode_raw = require(game, "Game", "Mode")?;
    let code: u8 = mode_raw.parse().map_err(|_| ParseError::InvalidNumber {
        key: "Mode".to_string(),
        value: mode_raw.to_string(),
    })?;
    let mode = Mode::from_code(code).ok_or(ParseError::UnknownMode(code))?;

    let cells = section(&sections, "Board")?;
    let mut board = Board::new();
    for pos in Position::ALL {
        let value = require(cells, "Board", pos.key())?;
        let square = if value.is_empty() {
            Square::Empty
        } else {
            let mark = Mark::from_symbol(value).ok_or_else(|| ParseError::InvalidMark {
                key: pos.key().to_string(),
                value: value.to_string(),
            })?;
            Square::Occupied(mark)
        };
        board.set(pos, square);
    }

    let stats_section = section(&sections, "Stats")?;
    let stats = Stats::with_counts(
        counter(stats_section, "WinsX")?,
        counter(stats_section, "WinsO")?,
        counter(stats_section, "Ties")?,
    );

    debug!(?mode, turn = %turn, "loaded session");
    Ok(Session::from_parts(board, turn, mode, stats))
}

/// Writes the session to `path`, replacing any previous file wholesale.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be written.
#[instrument(skip(session))]
pub fn save_to_file(session: &Session, path: &Path) -> Result<(), ParseError> {
    std::fs::write(path, serialize(session))?;
    Ok(())
}

/// Reads and parses the session saved at `path`.
///
/// # Errors
///
/// Returns [`ParseError::Io`] for a missing or unreadable file, or any
/// [`deserialize`] failure.
#[instrument]
pub fn load_from_file(path: &Path) -> Result<Session, ParseError> {
    let text = std::fs::read_to_string(path)?;
    deserialize(&text)
}

/// Splits the text into per-section key/value maps.
///
/// Lines before the first header and lines without `=` are skipped;
/// duplicate keys keep the last occurrence.
fn split_sections(text: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim_end_matches('\r').trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            current = Some(name.to_string());
            sections.entry(name.to_string()).or_default();
            continue;
        }
        let Some(section) = &current else {
            continue;
        };
        if let Some((key, value)) = line.split_once('=') {
            sections
                .entry(section.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    sections
}

fn section<'a>(
    sections: &'a HashMap<String, HashMap<String, String>>,
    name: &'static str,
) -> Result<&'a HashMap<String, String>, ParseError> {
    sections
        .get(name)
        .ok_or(ParseError::MissingSection { section: name })
}

fn require<'a>(
    section: &'a HashMap<String, String>,
    section_name: &'static str,
    key: &str,
) -> Result<&'a str, ParseError> {
    section
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingKey {
            section: section_name,
            key: key.to_string(),
        })
}

fn counter(section: &HashMap<String, String>, key: &str) -> Result<u32, ParseError> {
    let raw = require(section, "Stats", key)?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
