//! Local input sources: where the local side's guesses come from.

mod channel;
mod line;
mod solver;

pub use channel::ChannelInput;
pub use line::LineInput;
pub use solver::{Solver, candidates};

use crate::games::hit_and_blow::{Guess, Qa};

/// Trait for anything that can supply the local side's next guess.
#[async_trait::async_trait]
pub trait GuessSource: Send {
    /// Waits for the next guess.
    ///
    /// `history` holds the local side's previous guesses and the answers
    /// they received. Returns `None` if the source will never yield again.
    async fn next_guess(&mut self, history: &[Qa]) -> Option<Guess>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

#[async_trait::async_trait]
impl<T: GuessSource + ?Sized> GuessSource for Box<T> {
    async fn next_guess(&mut self, history: &[Qa]) -> Option<Guess> {
        (**self).next_guess(history).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
