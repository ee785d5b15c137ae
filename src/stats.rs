//! Win and tie counters for a game session.

use crate::board::Mark;
use crate::rules::GameStatus;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Running totals across games, persisted in the `[Stats]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Games won by X.
    pub wins_x: u32,
    /// Games won by O.
    pub wins_o: u32,
    /// Games that ended with a full board and no winner.
    pub ties: u32,
}

impl Stats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates counters with the given values.
    pub fn with_counts(wins_x: u32, wins_o: u32, ties: u32) -> Self {
        Self {
            wins_x,
            wins_o,
            ties,
        }
    }

    /// Records a terminal outcome, incrementing exactly one counter.
    ///
    /// A non-terminal status leaves the counters unchanged; callers
    /// should only pass terminal statuses.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.wins_x += 1,
            GameStatus::Won(Mark::O) => self.wins_o += 1,
            GameStatus::Tie => self.ties += 1,
            GameStatus::InProgress => {
                debug!("ignoring non-terminal status");
            }
        }
    }

    /// Zeroes all three counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_record_increments_one_counter() {
        let mut stats = Stats::new();
        stats.record(&GameStatus::Won(Mark::X));
        assert_eq!(stats, Stats::with_counts(1, 0, 0));
        stats.record(&GameStatus::Won(Mark::O));
        stats.record(&GameStatus::Won(Mark::O));
        assert_eq!(stats, Stats::with_counts(1, 2, 0));
        stats.record(&GameStatus::Tie);
        assert_eq!(stats, Stats::with_counts(1, 2, 1));
    }

    #[test]
    fn test_record_ignores_in_progress() {
        let mut stats = Stats::with_counts(2, 1, 3);
        stats.record(&GameStatus::InProgress);
        assert_eq!(stats, Stats::with_counts(2, 1, 3));
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = Stats::with_counts(5, 4, 3);
        stats.reset();
        assert_eq!(stats, Stats::new());
    }
}
