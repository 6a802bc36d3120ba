//! Guesses pushed in from elsewhere (a UI, a test script).

use super::GuessSource;
use crate::games::hit_and_blow::{Guess, Qa};
use tokio::sync::mpsc;

/// Input source fed through a channel.
pub struct ChannelInput {
    name: String,
    rx: mpsc::UnboundedReceiver<Guess>,
}

impl ChannelInput {
    /// Creates a channel-fed input.
    pub fn new(name: impl Into<String>, rx: mpsc::UnboundedReceiver<Guess>) -> Self {
        Self {
            name: name.into(),
            rx,
        }
    }
}

#[async_trait::async_trait]
impl GuessSource for ChannelInput {
    async fn next_guess(&mut self, _history: &[Qa]) -> Option<Guess> {
        self.rx.recv().await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
