//! Per-peer match engine.
//!
//! Each peer runs one [`Peer`]: a single consumer that reads protocol
//! messages from the channel and, whenever the move is local, races the
//! local input source against the turn budget. Only this task ever
//! mutates the Board.

mod engine;
mod error;
mod events;
mod timer;

pub use engine::{MatchReport, Peer, Role};
pub use error::PeerError;
pub use events::{EventSink, MatchEvent, ScoreRow};
pub use timer::{GRACE_SECS, TURN_BUDGET_SECS, TurnTimer, WaitOutcome};
