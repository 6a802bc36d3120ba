//! Alternating turn invariant: the mover flips exactly once per round.

use super::super::{Board, MatchState};
use super::Invariant;

/// Invariant: `turn` equals `init_turn` flipped once per round.
///
/// A round counts from the moment the local guess is committed, so an
/// outstanding guess counts as a round in progress.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        if board.state() == MatchState::InMenu {
            return true;
        }

        let rounds = board.ledger().rounds() + usize::from(board.pending_guess().is_some());
        let expected = if rounds % 2 == 0 {
            board.init_turn()
        } else {
            board.init_turn().reverse()
        };
        board.turn() == expected
    }

    fn description() -> &'static str {
        "Turn must alternate once per round starting from the initial mover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hit_and_blow::{Answer, Guess, Hand, Side};

    #[test]
    fn test_holds_through_rounds() {
        let mut board = Board::new();
        board.start(Hand::parse("012").unwrap(), Side::Opponent).unwrap();
        assert!(AlternatingTurnInvariant::holds(&board));

        board.receive_guess(Guess::parse("345").unwrap()).unwrap();
        assert!(AlternatingTurnInvariant::holds(&board));

        board.commit_guess(Guess::parse("678").unwrap()).unwrap();
        assert!(AlternatingTurnInvariant::holds(&board));

        board.receive_answer(Answer::from_wire(0, 1).unwrap()).unwrap();
        assert!(AlternatingTurnInvariant::holds(&board));
    }

    #[test]
    fn test_detects_extra_toggle() {
        let mut board = Board::new();
        board.start(Hand::parse("012").unwrap(), Side::Mine).unwrap();
        board.toggle_turn().unwrap();
        assert!(!AlternatingTurnInvariant::holds(&board));
    }
}
