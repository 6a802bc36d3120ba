//! Hit & Blow: guess the peer's three distinct digits before they guess yours.

mod board;
mod error;
mod guess;
mod hand;
pub mod invariants;
mod ledger;
pub mod rules;
mod types;

pub use board::Board;
pub use error::GameError;
pub use guess::{Answer, Guess, Qa};
pub use hand::{DIGITS, HAND_SPACE_SIZE, Hand, all_hands, hand_by_seed};
pub use ledger::Ledger;
pub use types::{JudgeStatus, MatchState, Side};
