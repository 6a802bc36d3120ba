//! Counter consistency invariant: turn counters track the ledgers.

use super::super::{Board, Side};
use super::Invariant;

/// Invariant: each side's turn counter matches the exchanges recorded
/// while that side was the mover.
///
/// The local counter advances when the peer's guess is answered (the turn
/// has just passed to us), and the peer's counter advances when our guess
/// is answered, so each counter mirrors the opposite ledger's length.
pub struct CountersConsistentInvariant;

impl Invariant<Board> for CountersConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let ledger = board.ledger();
        ledger.turn_count(Side::Mine) as usize == ledger.history(Side::Opponent).len()
            && ledger.turn_count(Side::Opponent) as usize == ledger.history(Side::Mine).len()
    }

    fn description() -> &'static str {
        "Turn counters must match the number of answered guesses"
    }
}
