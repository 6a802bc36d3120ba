//! Turn/timeout coordination for the local move.

use crate::games::hit_and_blow::{Guess, Qa};
use crate::players::GuessSource;
use super::events::{EventSink, MatchEvent};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

/// Seconds each side has to submit a guess.
pub const TURN_BUDGET_SECS: u64 = 60;

/// Extra seconds allowed before the race declares a timeout.
pub const GRACE_SECS: u64 = 1;

/// Result of waiting for the local guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// A guess arrived in time.
    Guessed(Guess),
    /// The budget ran out.
    TimedOut,
}

impl WaitOutcome {
    /// True if the budget ran out.
    pub fn timed_out(&self) -> bool {
        matches!(self, WaitOutcome::TimedOut)
    }

    /// The guess, if one arrived.
    pub fn guess(&self) -> Option<Guess> {
        match self {
            WaitOutcome::Guessed(guess) => Some(*guess),
            WaitOutcome::TimedOut => None,
        }
    }
}

/// Races the local input against a fixed per-turn budget while
/// publishing a once-per-second countdown.
///
/// Both peers must use the same budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTimer {
    budget: Duration,
    grace: Duration,
}

impl TurnTimer {
    /// Creates a timer with the given budget and grace period.
    pub fn new(budget: Duration, grace: Duration) -> Self {
        Self { budget, grace }
    }

    /// Returns the per-turn budget.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns the grace period.
    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Waits for the next local guess or for the budget to expire.
    ///
    /// The countdown runs as its own task and is stopped as soon as the
    /// race resolves, so no tick is published after the move was made.
    /// A source that closes without yielding is treated as one that never
    /// yields.
    #[instrument(skip_all, fields(budget = self.budget.as_secs()))]
    pub async fn wait_guess<S>(&self, source: &mut S, history: &[Qa], events: &EventSink) -> WaitOutcome
    where
        S: GuessSource + ?Sized,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let countdown = tokio::spawn(countdown(self.budget.as_secs(), cancel_rx, events.clone()));

        let next = async {
            match source.next_guess(history).await {
                Some(guess) => guess,
                None => {
                    warn!("Input source closed; waiting out the turn");
                    std::future::pending().await
                }
            }
        };

        let outcome = tokio::select! {
            guess = next => WaitOutcome::Guessed(guess),
            _ = tokio::time::sleep(self.budget + self.grace) => WaitOutcome::TimedOut,
        };

        // Countdown may already have finished on its own.
        let _ = cancel_tx.send(());
        if let Err(e) = countdown.await {
            warn!(error = %e, "Countdown task failed");
        }

        match outcome {
            WaitOutcome::Guessed(guess) => debug!(%guess, "Guess arrived"),
            WaitOutcome::TimedOut => info!("Turn budget exhausted"),
        }
        outcome
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(TURN_BUDGET_SECS),
            Duration::from_secs(GRACE_SECS),
        )
    }
}

async fn countdown(secs: u64, mut cancel: oneshot::Receiver<()>, events: EventSink) {
    let mut remaining = secs;
    loop {
        remaining = remaining.saturating_sub(1);
        events.emit(MatchEvent::Countdown(remaining as u32));
        if remaining == 0 {
            return;
        }
        tokio::select! {
            _ = &mut cancel => {
                debug!(remaining, "Countdown stopped");
                return;
            }
            _ = tokio::time::sleep(Duration::from_secs(1)) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::ChannelInput;
    use tokio::sync::mpsc;

    fn drain(rx: &mut mpsc::UnboundedReceiver<MatchEvent>) -> Vec<u32> {
        let mut ticks = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let MatchEvent::Countdown(n) = event {
                ticks.push(n);
            }
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_without_input() {
        let (_guess_tx, guess_rx) = mpsc::unbounded_channel();
        let mut input = ChannelInput::new("idle", guess_rx);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let start = tokio::time::Instant::now();
        let outcome = TurnTimer::default()
            .wait_guess(&mut input, &[], &EventSink::new(tx))
            .await;

        assert_eq!(outcome, WaitOutcome::TimedOut);
        assert!(outcome.timed_out());
        assert_eq!(outcome.guess(), None);
        assert!(start.elapsed() >= Duration::from_secs(61));

        let ticks = drain(&mut rx);
        assert_eq!(ticks.first(), Some(&59));
        assert_eq!(ticks.last(), Some(&0));
        assert_eq!(ticks.len(), 60);
    }

    #[tokio::test(start_paused = true)]
    async fn test_guess_stops_countdown() {
        let (guess_tx, guess_rx) = mpsc::unbounded_channel();
        let mut input = ChannelInput::new("quick", guess_rx);
        let (tx, mut rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            let _ = guess_tx.send(Guess::parse("123").unwrap());
        });

        let outcome = TurnTimer::default()
            .wait_guess(&mut input, &[], &EventSink::new(tx))
            .await;
        assert_eq!(outcome.guess(), Some(Guess::parse("123").unwrap()));

        let ticks = drain(&mut rx);
        assert!(ticks.iter().all(|&n| n >= 54), "late ticks: {:?}", ticks);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_source_waits_for_timeout() {
        let (guess_tx, guess_rx) = mpsc::unbounded_channel::<Guess>();
        drop(guess_tx);
        let mut input = ChannelInput::new("gone", guess_rx);

        let outcome = TurnTimer::new(Duration::from_secs(3), Duration::from_secs(1))
            .wait_guess(&mut input, &[], &EventSink::disabled())
            .await;
        assert!(outcome.timed_out());
    }
}
