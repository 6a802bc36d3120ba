//! Peer-to-peer wire protocol.
//!
//! One JSON object per message over an already-open, reliable, ordered
//! channel. Establishing that channel is somebody else's job; this module
//! only defines the messages and the seam the engine talks through.

mod channel;
mod message;

pub use channel::{ChannelError, MemoryChannel, MessageChannel, memory_pair};
pub use message::Message;
