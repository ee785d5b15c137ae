//! Integration tests for the save-file codec: round-tripping, error
//! reporting, and the untouched-session guarantee on failed loads.

use tictactoe_core::codec::{self, ParseError};
use tictactoe_core::{Board, Mark, Mode, Position, Session, Square, Stats};

/// Builds a mid-game session: mixed marks, O to move, AI easy mode,
/// stats (2, 1, 3).
fn mixed_session() -> Session {
    let mut board = Board::new();
    board.set(Position::B2, Square::Occupied(Mark::X));
    board.set(Position::C3, Square::Occupied(Mark::X));
    board.set(Position::A1, Square::Occupied(Mark::O));
    Session::from_parts(board, Mark::O, Mode::AiEasy, Stats::with_counts(2, 1, 3))
}

#[test]
fn test_round_trip_preserves_session() {
    let session = mixed_session();
    let text = codec::serialize(&session);
    let restored = codec::deserialize(&text).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn test_serialized_form_matches_format() {
    let session = mixed_session();
    let text = codec::serialize(&session);
    assert!(text.starts_with("[Game]\nTurn=O\nMode=1\n[Board]\n"));
    assert!(text.contains("\nA1=O\n"));
    assert!(text.contains("\nB2=X\n"));
    assert!(text.contains("\nA2=\n"));
    assert!(text.ends_with("[Stats]\nWinsX=2\nWinsO=1\nTies=3\n"));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gameState.ini");
    let session = mixed_session();

    codec::save_to_file(&session, &path).unwrap();
    let restored = codec::load_from_file(&path).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn test_save_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gameState.ini");

    codec::save_to_file(&mixed_session(), &path).unwrap();
    let fresh = Session::new(Mode::HotSeat);
    codec::save_to_file(&fresh, &path).unwrap();
    assert_eq!(codec::load_from_file(&path).unwrap(), fresh);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = codec::load_from_file(&dir.path().join("nope.ini")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn test_failed_load_leaves_session_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gameState.ini");
    std::fs::write(&path, "[Game]\nTurn=Q\nMode=0\n").unwrap();

    let mut current = mixed_session();
    let before = current.clone();
    // Only a successful load replaces the session.
    if let Ok(loaded) = codec::load_from_file(&path) {
        current = loaded;
    }
    assert_eq!(current, before);
}

#[test]
fn test_invalid_mark_reported() {
    let text = codec::serialize(&mixed_session()).replace("Turn=O", "Turn=Q");
    let err = codec::deserialize(&text).unwrap_err();
    assert!(matches!(err, ParseError::InvalidMark { key, .. } if key == "Turn"));
}

#[test]
fn test_unknown_mode_code_reported() {
    let text = codec::serialize(&mixed_session()).replace("Mode=1", "Mode=7");
    let err = codec::deserialize(&text).unwrap_err();
    assert!(matches!(err, ParseError::UnknownMode(7)));
}

#[test]
fn test_loaded_terminal_board_stays_terminal() {
    let mut session = Session::new(Mode::HotSeat);
    session.apply_move(Position::A1).unwrap();
    session.apply_move(Position::B1).unwrap();
    session.apply_move(Position::A2).unwrap();
    session.apply_move(Position::B2).unwrap();
    session.apply_move(Position::A3).unwrap();
    assert!(session.is_over());

    let restored = codec::deserialize(&codec::serialize(&session)).unwrap();
    assert!(restored.is_over());
    assert_eq!(restored, session);
}
