//! Events published to the display sink.

use crate::games::hit_and_blow::{Answer, Guess, JudgeStatus, Side};
use derive_getters::Getters;
use derive_new::new;
use tokio::sync::mpsc;
use tracing::debug;

/// One row of a score table: a guess, its answer, and whose guess it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct ScoreRow {
    /// Side that made the guess.
    side: Side,
    /// 1-based index of the guess within that side's history.
    round: usize,
    /// The guess.
    guess: Guess,
    /// The answer it received.
    answer: Answer,
}

impl std::fmt::Display for ScoreRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] #{} {} -> {}",
            self.side, self.round, self.guess, self.answer
        )
    }
}

/// Something the display should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// The match started; `first` moves first.
    Started {
        /// First mover.
        first: Side,
    },
    /// A round completed.
    Score(ScoreRow),
    /// Seconds left for the local move.
    Countdown(u32),
    /// The match was decided.
    Judgment(JudgeStatus),
    /// Free-form system notice.
    Notice(String),
}

/// Write-only handle to the display. Never blocks; a closed display is
/// silently ignored.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<mpsc::UnboundedSender<MatchEvent>>,
}

impl EventSink {
    /// Publishes to the given channel.
    pub fn new(tx: mpsc::UnboundedSender<MatchEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sink that drops everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Publishes an event.
    pub fn emit(&self, event: MatchEvent) {
        if let Some(tx) = &self.tx
            && tx.send(event).is_err()
        {
            debug!("Display sink closed");
        }
    }
}
