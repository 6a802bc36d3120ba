//! The match state machine.
//!
//! The Board is the single authority on whose turn it is and what the
//! outcome is. Both inbound messages and local guesses are applied to it,
//! one at a time, by the peer engine.
//!
//! ```text
//! ┌────────┐  start   ┌─────────┐  finish  ┌──────────┐
//! │ InMenu │─────────>│ Playing │─────────>│ Finished │
//! └────────┘          └─────────┘          └──────────┘
//! ```

use super::error::GameError;
use super::guess::{Answer, Guess, Qa};
use super::hand::Hand;
use super::ledger::Ledger;
use super::rules;
use super::types::{JudgeStatus, MatchState, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Local view of one Hit & Blow match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    state: MatchState,
    init_turn: Side,
    turn: Side,
    my_hand: Option<Hand>,
    /// Guess sent to the peer whose answer has not arrived yet.
    pending: Option<Guess>,
    ledger: Ledger,
}

impl Board {
    /// Creates an unstarted Board with empty ledgers.
    pub fn new() -> Self {
        Self {
            state: MatchState::InMenu,
            init_turn: Side::Mine,
            turn: Side::Mine,
            my_hand: None,
            pending: None,
            ledger: Ledger::new(),
        }
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Returns true before the match starts.
    pub fn is_in_menu(&self) -> bool {
        self.state == MatchState::InMenu
    }

    /// Returns true while rounds are being exchanged.
    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    /// Returns true once an outcome was reached.
    pub fn is_finished(&self) -> bool {
        self.state == MatchState::Finished
    }

    /// Returns the side that moved first.
    pub fn init_turn(&self) -> Side {
        self.init_turn
    }

    /// Returns the current mover.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Returns true if the local side is the current mover.
    pub fn is_my_turn(&self) -> bool {
        self.turn == Side::Mine
    }

    /// Returns the local secret, once started.
    pub fn hand(&self) -> Option<&Hand> {
        self.my_hand.as_ref()
    }

    /// Returns the outstanding local guess, if any.
    pub fn pending_guess(&self) -> Option<&Guess> {
        self.pending.as_ref()
    }

    /// Returns the exchange history.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the turn counter of the current mover.
    pub fn turn_count(&self) -> u32 {
        self.ledger.turn_count(self.turn)
    }

    fn require(&self, expected: MatchState, op: &str) -> Result<(), GameError> {
        if self.state != expected {
            return Err(GameError::IllegalTransition(format!(
                "{} requires {:?}, board is {:?}",
                op, expected, self.state
            )));
        }
        Ok(())
    }

    /// Starts the match with the local secret and the first mover.
    ///
    /// Legal exactly once, from `InMenu`.
    #[instrument(skip(self, hand))]
    pub fn start(&mut self, hand: Hand, init_turn: Side) -> Result<(), GameError> {
        self.require(MatchState::InMenu, "start")?;
        self.state = MatchState::Playing;
        self.init_turn = init_turn;
        self.turn = init_turn;
        self.my_hand = Some(hand);
        info!(first = %init_turn, "Match started");
        Ok(())
    }

    /// Passes the move to the other side.
    pub fn toggle_turn(&mut self) -> Result<(), GameError> {
        self.require(MatchState::Playing, "toggle_turn")?;
        self.turn = self.turn.reverse();
        Ok(())
    }

    /// Advances the round counter of the current mover.
    pub fn count_turn(&mut self) -> Result<(), GameError> {
        self.require(MatchState::Playing, "count_turn")?;
        self.ledger.count(self.turn);
        Ok(())
    }

    /// Scores a guess against the local secret.
    pub fn calc_answer(&self, guess: &Guess) -> Result<Answer, GameError> {
        self.my_hand
            .map(|hand| hand.score(guess))
            .ok_or_else(|| GameError::IllegalTransition("no hand to score against".to_string()))
    }

    /// Records one of our guesses and the peer's answer.
    pub(crate) fn add_my_qa(&mut self, qa: Qa) -> Result<(), GameError> {
        self.require(MatchState::Playing, "add_my_qa")?;
        self.ledger.push(Side::Mine, qa);
        Ok(())
    }

    /// Records one of the peer's guesses and our answer.
    pub(crate) fn add_op_qa(&mut self, qa: Qa) -> Result<(), GameError> {
        self.require(MatchState::Playing, "add_op_qa")?;
        self.ledger.push(Side::Opponent, qa);
        Ok(())
    }

    /// Evaluates the match. Pure; never stored.
    pub fn judge(&self) -> JudgeStatus {
        rules::evaluate(&self.ledger, self.turn, self.init_turn)
    }

    /// Ends the match. Legal exactly once, from `Playing`.
    #[instrument(skip(self))]
    pub fn finish(&mut self) -> Result<(), GameError> {
        self.require(MatchState::Playing, "finish")?;
        self.state = MatchState::Finished;
        info!(rounds = self.ledger.rounds(), "Match finished");
        Ok(())
    }

    /// Commits a local guess that is about to be sent and hands the move over.
    #[instrument(skip(self, guess), fields(guess = %guess))]
    pub fn commit_guess(&mut self, guess: Guess) -> Result<(), GameError> {
        self.require(MatchState::Playing, "commit_guess")?;
        if !self.is_my_turn() || self.pending.is_some() {
            return Err(GameError::IllegalTransition(
                "guess committed outside the local move".to_string(),
            ));
        }
        self.pending = Some(guess);
        self.toggle_turn()?;
        self.check_invariants()
    }

    /// Completes a round started by the peer: takes the move back, scores
    /// the peer's guess and records it.
    #[instrument(skip(self, guess), fields(guess = %guess))]
    pub fn receive_guess(&mut self, guess: Guess) -> Result<Answer, GameError> {
        self.require(MatchState::Playing, "receive_guess")?;
        if self.is_my_turn() {
            return Err(GameError::IllegalTransition(
                "peer guessed during the local move".to_string(),
            ));
        }
        self.toggle_turn()?;
        let answer = self.calc_answer(&guess)?;
        self.count_turn()?;
        self.add_op_qa(Qa::new(guess, answer))?;
        debug!(hit = answer.hit(), blow = answer.blow(), "Answered peer guess");
        self.check_invariants()?;
        Ok(answer)
    }

    /// Completes a round started locally with the peer's answer.
    #[instrument(skip(self, answer), fields(hit = answer.hit(), blow = answer.blow()))]
    pub fn receive_answer(&mut self, answer: Answer) -> Result<Qa, GameError> {
        self.require(MatchState::Playing, "receive_answer")?;
        if self.is_my_turn() {
            return Err(GameError::IllegalTransition(
                "answer arrived during the local move".to_string(),
            ));
        }
        let guess = self.pending.take().ok_or_else(|| {
            GameError::IllegalTransition("answer arrived with no outstanding guess".to_string())
        })?;
        self.count_turn()?;
        let qa = Qa::new(guess, answer);
        self.add_my_qa(qa)?;
        self.check_invariants()?;
        Ok(qa)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), GameError> {
        use super::invariants::{BoardInvariants, InvariantSet};

        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::IllegalTransition(format!("Postcondition failed: {}", descriptions))
        })
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) -> Result<(), GameError> {
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(init: Side) -> Board {
        let mut board = Board::new();
        board.start(Hand::parse("123").unwrap(), init).unwrap();
        board
    }

    #[test]
    fn test_start_twice_is_illegal() {
        let mut board = started(Side::Mine);
        let result = board.start(Hand::parse("456").unwrap(), Side::Mine);
        assert!(matches!(result, Err(GameError::IllegalTransition(_))));
        assert_eq!(board.hand(), Some(&Hand::parse("123").unwrap()));
    }

    #[test]
    fn test_toggle_before_start_is_illegal() {
        let mut board = Board::new();
        assert!(matches!(
            board.toggle_turn(),
            Err(GameError::IllegalTransition(_))
        ));
    }

    #[test]
    fn test_finish_is_one_way() {
        let mut board = started(Side::Mine);
        board.finish().unwrap();
        assert!(board.is_finished());
        assert!(board.finish().is_err());
        assert!(board.toggle_turn().is_err());
        assert!(board.start(Hand::parse("456").unwrap(), Side::Mine).is_err());
    }

    #[test]
    fn test_receive_answer_requires_pending_guess() {
        let mut board = started(Side::Opponent);
        let result = board.receive_answer(Answer::from_wire(0, 0).unwrap());
        assert!(matches!(result, Err(GameError::IllegalTransition(_))));
    }

    #[test]
    fn test_receive_guess_scores_against_hand() {
        let mut board = started(Side::Opponent);
        let answer = board.receive_guess(Guess::parse("132").unwrap()).unwrap();
        assert_eq!((answer.hit(), answer.blow()), (1, 2));
        assert!(board.is_my_turn());
        assert_eq!(board.ledger().turn_count(Side::Mine), 1);
        assert_eq!(board.ledger().history(Side::Opponent).len(), 1);
    }

    #[test]
    fn test_recording_needs_a_running_match() {
        let qa = Qa::new(Guess::parse("456").unwrap(), Answer::from_wire(0, 0).unwrap());

        let mut board = Board::new();
        assert!(matches!(
            board.add_my_qa(qa),
            Err(GameError::IllegalTransition(_))
        ));
        assert!(board.add_op_qa(qa).is_err());
        assert_eq!(board.ledger().rounds(), 0);

        let mut board = started(Side::Mine);
        board.finish().unwrap();
        assert!(board.add_my_qa(qa).is_err());
        assert!(board.add_op_qa(qa).is_err());
        assert_eq!(board.ledger().rounds(), 0);
    }

    #[test]
    fn test_commit_guess_out_of_turn_is_illegal() {
        let mut board = started(Side::Opponent);
        assert!(board.commit_guess(Guess::parse("000").unwrap()).is_err());
        assert!(board.pending_guess().is_none());
    }
}
