//! AI-vs-AI auto-play.
//!
//! Drives both marks from strategies until the game ends, sleeping a
//! fixed delay between moves so the owner can observe intermediate
//! boards. The current mode is re-read at the top of every iteration;
//! switching away from [`Mode::AiVsAi`] cancels the loop.

use crate::ai::Strategy;
use crate::board::{Mark, Position};
use crate::mode::Mode;
use crate::rules::GameStatus;
use crate::session::Session;
use anyhow::{Context, Result, anyhow};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Delay between automatic moves.
pub const DEFAULT_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Events published to the owning shell while auto-play runs.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A strategy placed a mark.
    MoveMade {
        /// The mark that moved.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// Rendered board after the latest move.
    StateChanged(String),
    /// The game reached a terminal outcome.
    GameOver(GameStatus),
    /// The mode changed away from AI-vs-AI before the game ended.
    Cancelled,
}

/// Runs both sides of a session from strategies.
pub struct Autoplay {
    session: Arc<Mutex<Session>>,
    strategy_x: Box<dyn Strategy>,
    strategy_o: Box<dyn Strategy>,
    delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Autoplay {
    /// Creates an auto-play driver with the default move delay.
    pub fn new(
        session: Arc<Mutex<Session>>,
        strategy_x: Box<dyn Strategy>,
        strategy_o: Box<dyn Strategy>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            strategy_x,
            strategy_o,
            delay: DEFAULT_MOVE_DELAY,
            event_tx,
        }
    }

    /// Overrides the inter-move delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs until the game ends or the mode changes.
    ///
    /// # Errors
    ///
    /// Fails if a strategy returns no move on a non-terminal board or
    /// an occupied cell; both are programming faults in the strategy.
    pub async fn run(mut self) -> Result<()> {
        info!("starting AI-vs-AI auto-play");
        loop {
            // Mode is re-read every iteration; a change cancels the loop.
            let event = {
                let mut session = self
                    .session
                    .lock()
                    .map_err(|_| anyhow!("session lock poisoned"))?;

                if session.mode() != Mode::AiVsAi {
                    debug!(mode = %session.mode(), "mode changed, cancelling auto-play");
                    let _ = self.event_tx.send(GameEvent::Cancelled);
                    return Ok(());
                }
                if session.is_over() {
                    let _ = self.event_tx.send(GameEvent::GameOver(session.status()));
                    return Ok(());
                }

                let mark = session.turn();
                let strategy = match mark {
                    Mark::X => &mut self.strategy_x,
                    Mark::O => &mut self.strategy_o,
                };
                let position = strategy
                    .choose(session.board(), mark)
                    .context("strategy produced no move for an open board")?;
                let status = session
                    .apply_move(position)
                    .context("strategy chose an invalid cell")?;

                let _ = self.event_tx.send(GameEvent::MoveMade { mark, position });
                let _ = self
                    .event_tx
                    .send(GameEvent::StateChanged(session.board().display()));
                if status.is_over() {
                    Some(GameEvent::GameOver(status))
                } else {
                    None
                }
            };

            if let Some(over) = event {
                let _ = self.event_tx.send(over);
                return Ok(());
            }
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::HardStrategy;

    #[tokio::test]
    async fn test_autoplay_runs_to_terminal() {
        let session = Arc::new(Mutex::new(Session::new(Mode::AiVsAi)));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let autoplay = Autoplay::new(
            Arc::clone(&session),
            Box::new(HardStrategy),
            Box::new(HardStrategy),
            tx,
        )
        .with_delay(Duration::from_millis(1));

        autoplay.run().await.unwrap();

        let mut saw_game_over = false;
        while let Ok(event) = rx.try_recv() {
            if let GameEvent::GameOver(status) = event {
                assert!(status.is_over());
                saw_game_over = true;
            }
        }
        assert!(saw_game_over);
        assert!(session.lock().unwrap().is_over());
    }

    #[tokio::test]
    async fn test_mode_change_cancels_loop() {
        let session = Arc::new(Mutex::new(Session::new(Mode::AiVsAi)));
        session.lock().unwrap().set_mode(Mode::HotSeat);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let autoplay = Autoplay::new(
            Arc::clone(&session),
            Box::new(HardStrategy),
            Box::new(HardStrategy),
            tx,
        );

        autoplay.run().await.unwrap();

        assert!(matches!(rx.try_recv(), Ok(GameEvent::Cancelled)));
        assert!(!session.lock().unwrap().is_over());
    }
}
