//! First-class invariants for Hit & Blow.
//!
//! Invariants are logical properties of a [`Board`](super::Board) that must
//! hold after every round. The Board checks them in debug builds; they are
//! also testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod alternating_turn;
pub mod counters_consistent;
pub mod lifecycle;

pub use alternating_turn::AlternatingTurnInvariant;
pub use counters_consistent::CountersConsistentInvariant;
pub use lifecycle::LifecycleInvariant;

/// All Board invariants as a composable set.
pub type BoardInvariants = (
    LifecycleInvariant,
    AlternatingTurnInvariant,
    CountersConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hit_and_blow::{Board, Guess, Hand, Side};

    fn started(init: Side) -> Board {
        let mut board = Board::new();
        board.start(Hand::parse("123").unwrap(), init).unwrap();
        board
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
        assert!(BoardInvariants::check_all(&started(Side::Opponent)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rounds() {
        let mut board = started(Side::Mine);
        board.commit_guess(Guess::parse("456").unwrap()).unwrap();
        board
            .receive_answer(crate::games::hit_and_blow::Answer::from_wire(0, 0).unwrap())
            .unwrap();
        board.receive_guess(Guess::parse("321").unwrap()).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_stray_toggle() {
        let mut board = started(Side::Mine);
        board.toggle_turn().unwrap();

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (LifecycleInvariant, CountersConsistentInvariant);
        assert!(TwoInvariants::check_all(&started(Side::Mine)).is_ok());
    }
}
