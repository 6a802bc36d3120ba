//! Game rules for Hit & Blow.
//!
//! Pure functions over the ledger and turn state. The Board composes them
//! into a single judgment; they are kept separate so each rule can be
//! tested on its own.

pub mod draw;
pub mod judge;

pub use draw::{MAX_TURN_COUNT, is_draw};
pub use judge::check_winner;

use super::{JudgeStatus, Ledger, Side};

/// Evaluates the match: win/lose first, then draw.
pub fn evaluate(ledger: &Ledger, turn: Side, init_turn: Side) -> JudgeStatus {
    if let Some(status) = check_winner(ledger, turn, init_turn) {
        return status;
    }
    if is_draw(ledger) {
        return JudgeStatus::Draw;
    }
    JudgeStatus::NotYet
}
