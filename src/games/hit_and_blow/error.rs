//! Error taxonomy for the Hit & Blow engine.

/// Error raised by hand construction, guess parsing, message decoding,
/// or an out-of-order Board transition.
///
/// `InvalidHand`, `InvalidGuess` and `ProtocolDecode` are recoverable:
/// the offending input is rejected and the Board is left untouched.
/// `IllegalTransition` means the two peers (or the local driver) lost
/// track of the match and the match must be aborted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A secret hand was malformed (wrong length, duplicate or out-of-range digits).
    #[display("Invalid hand: {}", _0)]
    InvalidHand(String),

    /// A guess was malformed (wrong length or non-digit characters).
    #[display("Invalid guess: {}", _0)]
    InvalidGuess(String),

    /// An inbound protocol message could not be decoded.
    #[display("Protocol decode error: {}", _0)]
    ProtocolDecode(String),

    /// A Board transition was attempted from the wrong state.
    #[display("Illegal transition: {}", _0)]
    IllegalTransition(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Returns true if the error leaves the match in a usable state.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::IllegalTransition(_))
    }
}
