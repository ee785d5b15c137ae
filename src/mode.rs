//! Game mode selection.

use serde::{Deserialize, Serialize};

/// How moves are produced after the first player's turn.
///
/// The integer codes are the values written to the `Mode=` line of the
/// save file and must stay stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mode {
    /// Two humans alternate at the same machine.
    #[default]
    HotSeat,
    /// Human as X, easy AI as O.
    AiEasy,
    /// Human as X, hard AI as O.
    AiHard,
    /// Both marks played automatically until the game ends.
    AiVsAi,
}

impl Mode {
    /// The stable integer code persisted in save files.
    pub fn code(self) -> u8 {
        match self {
            Mode::HotSeat => 0,
            Mode::AiEasy => 1,
            Mode::AiHard => 2,
            Mode::AiVsAi => 3,
        }
    }

    /// Parses a mode from its persisted code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Mode::HotSeat),
            1 => Some(Mode::AiEasy),
            2 => Some(Mode::AiHard),
            3 => Some(Mode::AiVsAi),
            _ => None,
        }
    }

    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::HotSeat => "Hot seat",
            Mode::AiEasy => "AI (easy)",
            Mode::AiHard => "AI (hard)",
            Mode::AiVsAi => "AI vs AI",
        }
    }

    /// Whether O's replies come from an AI strategy.
    pub fn has_ai_opponent(self) -> bool {
        matches!(self, Mode::AiEasy | Mode::AiHard)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip() {
        for mode in Mode::iter() {
            assert_eq!(Mode::from_code(mode.code()), Some(mode));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(Mode::from_code(4), None);
        assert_eq!(Mode::from_code(255), None);
    }
}
