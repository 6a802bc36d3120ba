//! Win/lose detection for Hit & Blow.

use super::super::{JudgeStatus, Ledger, Side};
use tracing::instrument;

fn last_all_hit(ledger: &Ledger, side: Side) -> bool {
    ledger
        .last(side)
        .is_some_and(|qa| qa.answer().is_all_hit())
}

/// Checks for a win or a loss.
///
/// The two peers evaluate at different local moments, so only the peer
/// that has just observed both sides' answers for the round may decide:
/// the first mover after answering the second mover's guess, and the
/// second mover after receiving the answer to its own guess.
///
/// Returns `None` when neither condition applies.
#[instrument(skip(ledger))]
pub fn check_winner(ledger: &Ledger, turn: Side, init_turn: Side) -> Option<JudgeStatus> {
    let mine = last_all_hit(ledger, Side::Mine);
    let theirs = last_all_hit(ledger, Side::Opponent);

    match (turn, init_turn) {
        (Side::Mine, Side::Mine) => {
            if theirs {
                Some(JudgeStatus::Lose)
            } else if mine {
                Some(JudgeStatus::Win)
            } else {
                None
            }
        }
        (Side::Opponent, Side::Opponent) => {
            if mine {
                Some(JudgeStatus::Win)
            } else if theirs {
                Some(JudgeStatus::Lose)
            } else {
                None
            }
        }
        _ => None,
    }
}
