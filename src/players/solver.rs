//! Computer player that keeps only hands consistent with past answers.

use super::GuessSource;
use crate::games::hit_and_blow::{Guess, Hand, Qa, all_hands};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Returns every hand that would have produced exactly the recorded answers.
#[instrument(skip(history), fields(rounds = history.len()))]
pub fn candidates(history: &[Qa]) -> Vec<Hand> {
    all_hands()
        .iter()
        .copied()
        .filter(|hand| history.iter().all(|qa| hand.score(qa.guess()) == *qa.answer()))
        .collect()
}

/// Candidate-elimination solver.
pub struct Solver {
    name: String,
    rng: StdRng,
    think: Duration,
}

impl Solver {
    /// Creates a solver; `seed` makes its choices reproducible.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
            think: Duration::ZERO,
        }
    }

    /// Pauses this long before each guess.
    pub fn with_think_time(mut self, think: Duration) -> Self {
        self.think = think;
        self
    }
}

#[async_trait::async_trait]
impl GuessSource for Solver {
    async fn next_guess(&mut self, history: &[Qa]) -> Option<Guess> {
        if !self.think.is_zero() {
            tokio::time::sleep(self.think).await;
        }

        let remaining = candidates(history);
        debug!(remaining = remaining.len(), "Solver narrowed the field");
        let pick = match remaining.choose(&mut self.rng) {
            Some(hand) => *hand,
            None => {
                warn!("No hand fits the answers; guessing blind");
                *all_hands().choose(&mut self.rng)?
            }
        };
        Some(pick.into())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hit_and_blow::HAND_SPACE_SIZE;

    #[test]
    fn test_no_history_keeps_everything() {
        assert_eq!(candidates(&[]).len(), HAND_SPACE_SIZE);
    }

    #[test]
    fn test_candidates_match_answers() {
        let secret = Hand::parse("305").unwrap();
        let guess = Guess::parse("350").unwrap();
        let history = [Qa::new(guess, secret.score(&guess))];

        let left = candidates(&history);
        assert!(left.contains(&secret));
        assert!(left.iter().all(|h| h.score(&guess) == secret.score(&guess)));
    }

    #[tokio::test]
    async fn test_solver_cracks_a_hand() {
        let secret = Hand::parse("918").unwrap();
        let mut solver = Solver::new("bot", 7);
        let mut history = Vec::new();

        // Every wrong guess eliminates itself, so the field only shrinks.
        for _ in 0..HAND_SPACE_SIZE {
            let guess = solver.next_guess(&history).await.unwrap();
            let answer = secret.score(&guess);
            history.push(Qa::new(guess, answer));
            if answer.is_all_hit() {
                return;
            }
        }
        panic!("solver did not converge: {:?}", history);
    }
}
