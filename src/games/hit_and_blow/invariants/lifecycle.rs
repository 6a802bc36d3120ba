//! Lifecycle invariant: nothing is recorded before the match starts.

use super::super::{Board, MatchState};
use super::Invariant;

/// Invariant: an unstarted Board has no hand, no history and no
/// outstanding guess; a started Board always has a hand.
pub struct LifecycleInvariant;

impl Invariant<Board> for LifecycleInvariant {
    fn holds(board: &Board) -> bool {
        match board.state() {
            MatchState::InMenu => {
                board.hand().is_none()
                    && board.ledger().rounds() == 0
                    && board.pending_guess().is_none()
            }
            MatchState::Playing | MatchState::Finished => board.hand().is_some(),
        }
    }

    fn description() -> &'static str {
        "Only a started match may hold a hand or history"
    }
}
