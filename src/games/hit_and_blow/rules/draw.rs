//! Draw detection for Hit & Blow.

use super::super::{Ledger, Side};
use tracing::instrument;

/// Rounds each side may play before the match is a draw.
pub const MAX_TURN_COUNT: u32 = 8;

/// Checks if both sides have used up their rounds.
#[instrument(skip(ledger))]
pub fn is_draw(ledger: &Ledger) -> bool {
    let mine = ledger.turn_count(Side::Mine);
    mine == ledger.turn_count(Side::Opponent) && mine == MAX_TURN_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(mine: u32, theirs: u32) -> Ledger {
        let mut ledger = Ledger::new();
        (0..mine).for_each(|_| ledger.count(Side::Mine));
        (0..theirs).for_each(|_| ledger.count(Side::Opponent));
        ledger
    }

    #[test]
    fn test_fresh_ledger_not_draw() {
        assert!(!is_draw(&Ledger::new()));
    }

    #[test]
    fn test_uneven_counts_not_draw() {
        assert!(!is_draw(&counted(8, 7)));
        assert!(!is_draw(&counted(7, 8)));
    }

    #[test]
    fn test_both_at_cap_is_draw() {
        assert!(is_draw(&counted(8, 8)));
    }
}
