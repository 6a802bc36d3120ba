//! The four protocol messages and their JSON codec.

use crate::games::hit_and_blow::{Answer, GameError, Guess, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A protocol message, tagged by `type` on the wire.
///
/// ```text
/// {"type":"start","turn":0}
/// {"type":"start"}
/// {"type":"guess","guess":"132"}
/// {"type":"answer","hit":1,"blow":2}
/// {"type":"timeout"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    /// Announces the match. `turn` is the sender's own first-mover flag
    /// (0 = sender moves first); omitted when the joiner hands the first
    /// move back to the opener.
    Start {
        /// Sender's view of who moves first.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        turn: Option<u8>,
    },
    /// A guess at the receiver's hand.
    Guess {
        /// Three-digit guess text.
        guess: String,
    },
    /// Score of the guess the receiver sent last.
    Answer {
        /// Hits.
        hit: u8,
        /// Blows.
        blow: u8,
    },
    /// The sender ran out of time and forfeits.
    Timeout,
}

impl Message {
    /// Opener's announcement carrying its first-mover flag.
    pub fn start(init_turn: Side) -> Self {
        Message::Start {
            turn: Some(init_turn.to_wire()),
        }
    }

    /// Joiner's reply handing the first move to the opener.
    pub fn start_reply() -> Self {
        Message::Start { turn: None }
    }

    /// Wraps a local guess.
    pub fn guess(guess: &Guess) -> Self {
        Message::Guess {
            guess: guess.to_wire(),
        }
    }

    /// Wraps an answer to the peer's guess.
    pub fn answer(answer: Answer) -> Self {
        Message::Answer {
            hit: answer.hit(),
            blow: answer.blow(),
        }
    }

    /// Short name of the message kind, as used in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Start { .. } => "start",
            Message::Guess { .. } => "guess",
            Message::Answer { .. } => "answer",
            Message::Timeout => "timeout",
        }
    }

    /// Serializes the message to its JSON text.
    pub fn encode(&self) -> Result<String, GameError> {
        serde_json::to_string(self)
            .map_err(|e| GameError::ProtocolDecode(format!("failed to encode {}: {}", self.kind(), e)))
    }

    /// Parses a message from JSON text.
    ///
    /// Fails with [`GameError::ProtocolDecode`] on malformed JSON, unknown
    /// message types, or missing fields.
    #[instrument]
    pub fn decode(text: &str) -> Result<Self, GameError> {
        serde_json::from_str(text).map_err(|e| GameError::ProtocolDecode(e.to_string()))
    }

    /// Extracts the validated guess from a `guess` message.
    pub fn parsed_guess(text: &str) -> Result<Guess, GameError> {
        Guess::parse(text).map_err(|e| GameError::ProtocolDecode(e.to_string()))
    }
}
