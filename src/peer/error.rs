//! Errors that abort a running match.

use crate::games::hit_and_blow::GameError;
use crate::protocol::ChannelError;

/// Why a peer stopped before reaching an outcome.
#[derive(Debug, Clone, derive_more::Display)]
pub enum PeerError {
    /// A Board transition was rejected; the peers are out of step.
    #[display("{}", _0)]
    Game(GameError),

    /// A message could not be handed to the channel.
    #[display("{}", _0)]
    Channel(ChannelError),

    /// The inbound stream ended before the match finished.
    #[display("Channel closed before the match finished")]
    ChannelClosed,
}

impl std::error::Error for PeerError {}

impl From<GameError> for PeerError {
    fn from(err: GameError) -> Self {
        PeerError::Game(err)
    }
}

impl From<ChannelError> for PeerError {
    fn from(err: ChannelError) -> Self {
        PeerError::Channel(err)
    }
}
