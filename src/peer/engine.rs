//! The single-consumer message loop that drives one peer's Board.
//!
//! # Flow
//!
//! ```text
//! opener                                   joiner
//!   start Board(seed)
//!   ── start{turn} ───────────────────────>  start Board(own seed, reversed turn)
//!                                            if joiner moves second:
//!   <─────────────────────────── start{} ──
//!   my move
//!   ── guess ─────────────────────────────>  score, judge
//!   <───────────────────────────── answer ──  my move
//!   record, judge
//!   <────────────────────────────── guess ──
//!   ...
//! ```
//!
//! A local timeout sends `timeout` and loses; receiving `timeout` wins.

use super::error::PeerError;
use super::events::{EventSink, MatchEvent, ScoreRow};
use super::timer::{TurnTimer, WaitOutcome};
use crate::games::hit_and_blow::{
    Answer, Board, GameError, Hand, JudgeStatus, MatchState, Side, hand_by_seed,
};
use crate::players::GuessSource;
use crate::protocol::{Message, MessageChannel};
use derive_getters::Getters;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Which end of the channel this peer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Role {
    /// Created the channel; decides who moves first.
    Opener,
    /// Accepted the channel; follows the opener's announcement.
    Joiner,
}

/// Final state of a match as seen by one peer.
#[derive(Debug, Clone, Getters)]
pub struct MatchReport {
    /// Outcome from this peer's point of view.
    outcome: JudgeStatus,
    /// Board at the end of the match.
    board: Board,
}

/// What the loop should do after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Keep reading messages.
    Wait,
    /// The move is ours: wait for a local guess.
    MyMove,
}

/// One side of a duel.
pub struct Peer<C, S> {
    role: Role,
    board: Board,
    channel: C,
    input: S,
    timer: TurnTimer,
    events: EventSink,
    seed: u64,
    hand: Option<Hand>,
    start_delay: Duration,
    outcome: JudgeStatus,
}

impl<C, S> Peer<C, S>
where
    C: MessageChannel,
    S: GuessSource,
{
    /// Creates a peer. `seed` picks the local hand and, for the opener,
    /// the first mover.
    pub fn new(role: Role, channel: C, input: S, seed: u64) -> Self {
        Self {
            role,
            board: Board::new(),
            channel,
            input,
            timer: TurnTimer::default(),
            events: EventSink::disabled(),
            seed,
            hand: None,
            start_delay: Duration::ZERO,
            outcome: JudgeStatus::NotYet,
        }
    }

    /// Uses a non-default turn timer.
    pub fn with_timer(mut self, timer: TurnTimer) -> Self {
        self.timer = timer;
        self
    }

    /// Publishes display events to `events`.
    pub fn with_events(mut self, events: EventSink) -> Self {
        self.events = events;
        self
    }

    /// Uses an explicit secret instead of one derived from the seed.
    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = Some(hand);
        self
    }

    /// Delays the opener's `start` announcement.
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Returns the Board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the match to completion.
    ///
    /// Undecodable or out-of-turn messages are logged and dropped. Returns
    /// an error if the Board rejects a transition or the channel fails.
    #[instrument(skip(self), fields(role = %self.role))]
    pub async fn run(mut self) -> Result<MatchReport, PeerError> {
        if self.role == Role::Opener {
            self.open().await?;
        }

        while !self.board.is_finished() {
            let Some(text) = self.channel.recv_text().await else {
                warn!("Peer went away mid-match");
                return Err(PeerError::ChannelClosed);
            };
            debug!(%text, "Received message");

            let message = match Message::decode(&text) {
                Ok(message) => message,
                Err(e) => {
                    warn!(error = %e, "Dropping undecodable message");
                    continue;
                }
            };

            match self.handle(message).await {
                Ok(Step::MyMove) => self.take_turn().await?,
                Ok(Step::Wait) => {}
                Err(PeerError::Game(e)) if e.is_recoverable() => {
                    warn!(error = %e, "Dropping invalid message");
                }
                Err(e) => return Err(e),
            }
        }

        info!(outcome = %self.outcome, "Match over");
        Ok(MatchReport {
            outcome: self.outcome,
            board: self.board,
        })
    }

    fn my_hand(&self) -> Hand {
        self.hand.unwrap_or_else(|| hand_by_seed(self.seed))
    }

    #[instrument(skip(self))]
    async fn open(&mut self) -> Result<(), PeerError> {
        let init_turn = Side::from_seed(self.seed);
        let hand = self.my_hand();
        self.board.start(hand, init_turn)?;
        self.events.emit(MatchEvent::Started { first: init_turn });

        if !self.start_delay.is_zero() {
            tokio::time::sleep(self.start_delay).await;
        }
        self.send(Message::start(init_turn)).await
    }

    async fn send(&mut self, message: Message) -> Result<(), PeerError> {
        let text = message.encode()?;
        debug!(%text, "Sending message");
        self.channel.send_text(text).await?;
        Ok(())
    }

    async fn handle(&mut self, message: Message) -> Result<Step, PeerError> {
        match message {
            Message::Start { turn } => self.on_start(turn).await,
            Message::Guess { guess } => self.on_guess(&guess).await,
            Message::Answer { hit, blow } => self.on_answer(hit, blow),
            Message::Timeout => self.on_timeout(),
        }
    }

    #[instrument(skip(self))]
    async fn on_start(&mut self, turn: Option<u8>) -> Result<Step, PeerError> {
        match (self.board.state(), turn) {
            (MatchState::InMenu, Some(turn)) => {
                let sender_first = Side::try_from_wire(turn).ok_or_else(|| {
                    GameError::ProtocolDecode(format!("turn must be 0 or 1, got {}", turn))
                })?;
                let init_turn = sender_first.reverse();
                let hand = self.my_hand();
                self.board.start(hand, init_turn)?;
                self.events.emit(MatchEvent::Started { first: init_turn });

                if init_turn == Side::Opponent {
                    self.send(Message::start_reply()).await?;
                    return Ok(Step::Wait);
                }
                Ok(Step::MyMove)
            }
            (MatchState::InMenu, None) => Err(GameError::ProtocolDecode(
                "start without turn before the match began".to_string(),
            )
            .into()),
            (MatchState::Playing, None)
                if self.role == Role::Opener
                    && self.board.is_my_turn()
                    && self.board.ledger().rounds() == 0
                    && self.board.pending_guess().is_none() =>
            {
                Ok(Step::MyMove)
            }
            _ => {
                warn!("Ignoring unexpected start");
                Ok(Step::Wait)
            }
        }
    }

    #[instrument(skip(self))]
    async fn on_guess(&mut self, text: &str) -> Result<Step, PeerError> {
        if !self.board.is_playing() || self.board.is_my_turn() {
            warn!("Ignoring guess outside the peer's move");
            return Ok(Step::Wait);
        }

        let guess = Message::parsed_guess(text)?;
        let answer = self.board.receive_guess(guess)?;
        let round = self.board.ledger().history(Side::Opponent).len();
        self.events
            .emit(MatchEvent::Score(ScoreRow::new(Side::Opponent, round, guess, answer)));

        let status = self.board.judge();
        self.send(Message::answer(answer)).await?;
        if status.is_decided() {
            self.conclude(status)?;
            return Ok(Step::Wait);
        }
        Ok(Step::MyMove)
    }

    #[instrument(skip(self))]
    fn on_answer(&mut self, hit: u8, blow: u8) -> Result<Step, PeerError> {
        if !self.board.is_playing()
            || self.board.is_my_turn()
            || self.board.pending_guess().is_none()
        {
            warn!("Ignoring answer with no outstanding guess");
            return Ok(Step::Wait);
        }

        let answer = Answer::from_wire(hit, blow)?;
        let qa = self.board.receive_answer(answer)?;
        let round = self.board.ledger().history(Side::Mine).len();
        self.events.emit(MatchEvent::Score(ScoreRow::new(
            Side::Mine,
            round,
            *qa.guess(),
            answer,
        )));

        let status = self.board.judge();
        if status.is_decided() {
            self.conclude(status)?;
        }
        Ok(Step::Wait)
    }

    fn on_timeout(&mut self) -> Result<Step, PeerError> {
        if !self.board.is_playing() {
            warn!("Ignoring timeout outside a match");
            return Ok(Step::Wait);
        }
        self.events
            .emit(MatchEvent::Notice("Opponent timed out".to_string()));
        self.conclude(JudgeStatus::Win)?;
        Ok(Step::Wait)
    }

    fn conclude(&mut self, status: JudgeStatus) -> Result<(), PeerError> {
        self.events.emit(MatchEvent::Judgment(status));
        self.board.finish()?;
        self.outcome = status;
        Ok(())
    }

    #[instrument(skip(self), fields(round = self.board.ledger().history(Side::Mine).len() + 1))]
    async fn take_turn(&mut self) -> Result<(), PeerError> {
        let outcome = self
            .timer
            .wait_guess(
                &mut self.input,
                self.board.ledger().history(Side::Mine),
                &self.events,
            )
            .await;

        match outcome {
            WaitOutcome::TimedOut => {
                if let Err(e) = self.send(Message::Timeout).await {
                    warn!(error = %e, "Could not announce timeout");
                }
                self.events
                    .emit(MatchEvent::Notice("You timed out".to_string()));
                self.conclude(JudgeStatus::Lose)
            }
            WaitOutcome::Guessed(guess) => {
                self.board.commit_guess(guess)?;
                self.send(Message::guess(&guess)).await
            }
        }
    }
}
