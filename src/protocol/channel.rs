//! The message channel seam and an in-memory loopback implementation.

use async_trait::async_trait;
use derive_more::{Display, Error};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Failure to hand a message to the channel.
#[derive(Debug, Clone, Display, Error)]
#[display("Channel error: {} at {}:{}", message, file, line)]
pub struct ChannelError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ChannelError {
    /// Creates a new channel error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// An open, bidirectional, reliable and ordered text-message channel to
/// the peer.
///
/// Implementations wrap whatever transport the connection layer produced
/// (a WebRTC data channel, a websocket, a pair of queues).
#[async_trait]
pub trait MessageChannel: Send {
    /// Sends one message atomically.
    async fn send_text(&mut self, text: String) -> Result<(), ChannelError>;

    /// Receives the next message, or `None` once the peer has gone.
    async fn recv_text(&mut self) -> Option<String>;
}

/// One end of an in-process channel pair.
#[derive(Debug)]
pub struct MemoryChannel {
    tx: mpsc::UnboundedSender<String>,
    rx: mpsc::UnboundedReceiver<String>,
}

/// Creates two connected ends: whatever one sends, the other receives.
#[instrument]
pub fn memory_pair() -> (MemoryChannel, MemoryChannel) {
    let (a_tx, b_rx) = mpsc::unbounded_channel();
    let (b_tx, a_rx) = mpsc::unbounded_channel();
    debug!("Created loopback channel pair");
    (
        MemoryChannel { tx: a_tx, rx: a_rx },
        MemoryChannel { tx: b_tx, rx: b_rx },
    )
}

#[async_trait]
impl MessageChannel for MemoryChannel {
    async fn send_text(&mut self, text: String) -> Result<(), ChannelError> {
        self.tx
            .send(text)
            .map_err(|_| ChannelError::new("peer end dropped"))
    }

    async fn recv_text(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}
