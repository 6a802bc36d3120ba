//! Hit & Blow library - a peer-synchronized turn engine
//!
//! Two peers each run their own copy of the engine and agree on turn
//! order and outcome purely through the messages they exchange.
//!
//! # Architecture
//!
//! - **Game**: hand space, scoring, ledger, and the match Board
//! - **Protocol**: the four JSON messages and the channel seam
//! - **Peer**: the single-consumer engine and the turn timer
//! - **Players**: local guess sources (channel, stdin, solver)
//!
//! # Example
//!
//! ```no_run
//! use hit_and_blow::{Peer, Role, Solver, memory_pair};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (a, b) = memory_pair();
//! let opener = Peer::new(Role::Opener, a, Solver::new("left", 1), 1);
//! let joiner = Peer::new(Role::Joiner, b, Solver::new("right", 2), 2);
//!
//! let (left, right) = tokio::join!(opener.run(), joiner.run());
//! println!("{} / {}", left?.outcome(), right?.outcome());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod peer;
mod players;
mod protocol;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Game types
pub use games::hit_and_blow::{
    Answer, Board, DIGITS, GameError, Guess, HAND_SPACE_SIZE, Hand, JudgeStatus, Ledger,
    MatchState, Qa, Side, all_hands, hand_by_seed, invariants, rules,
};

// Crate-level exports - Protocol
pub use protocol::{ChannelError, MemoryChannel, Message, MessageChannel, memory_pair};

// Crate-level exports - Peer engine
pub use peer::{
    EventSink, GRACE_SECS, MatchEvent, MatchReport, Peer, PeerError, Role, ScoreRow,
    TURN_BUDGET_SECS, TurnTimer, WaitOutcome,
};

// Crate-level exports - Players
pub use players::{ChannelInput, GuessSource, LineInput, Solver, candidates};
