//! Append-only history of exchanges for both sides.

use super::guess::Qa;
use super::types::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Per-side question/answer history plus per-side turn counters.
///
/// `mine` holds guesses the local player made and the answers the peer
/// returned; `theirs` holds the peer's guesses and the answers we computed.
/// The counter for a side advances once per round, when that side is the
/// current mover at the moment the round completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    mine: Vec<Qa>,
    theirs: Vec<Qa>,
    my_turn_count: u32,
    op_turn_count: u32,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an exchange for `side`.
    #[instrument(skip(self))]
    pub fn push(&mut self, side: Side, qa: Qa) {
        debug!(%side, guess = %qa.guess(), answer = %qa.answer(), "Recording exchange");
        match side {
            Side::Mine => self.mine.push(qa),
            Side::Opponent => self.theirs.push(qa),
        }
    }

    /// Advances the turn counter for `side`.
    pub fn count(&mut self, side: Side) {
        match side {
            Side::Mine => self.my_turn_count += 1,
            Side::Opponent => self.op_turn_count += 1,
        }
    }

    /// Returns the turn counter for `side`.
    pub fn turn_count(&self, side: Side) -> u32 {
        match side {
            Side::Mine => self.my_turn_count,
            Side::Opponent => self.op_turn_count,
        }
    }

    /// Returns every exchange recorded for `side`, oldest first.
    pub fn history(&self, side: Side) -> &[Qa] {
        match side {
            Side::Mine => &self.mine,
            Side::Opponent => &self.theirs,
        }
    }

    /// Returns the most recent exchange for `side`.
    pub fn last(&self, side: Side) -> Option<&Qa> {
        self.history(side).last()
    }

    /// Total number of completed exchanges across both sides.
    pub fn rounds(&self) -> usize {
        self.mine.len() + self.theirs.len()
    }
}
