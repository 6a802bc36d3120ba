//! Core domain types for Hit & Blow.

use serde::{Deserialize, Serialize};

/// Which side of the duel, from the local peer's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Side {
    /// The local player.
    Mine,
    /// The remote player.
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn reverse(self) -> Self {
        match self {
            Side::Mine => Side::Opponent,
            Side::Opponent => Side::Mine,
        }
    }

    /// Derives who moves first from a seed (even seeds: local side).
    pub fn from_seed(seed: u64) -> Self {
        if seed % 2 == 0 { Side::Mine } else { Side::Opponent }
    }

    /// Wire encoding: `0` means "the sender moves first".
    pub fn to_wire(self) -> u8 {
        match self {
            Side::Mine => 0,
            Side::Opponent => 1,
        }
    }

    /// Decodes the sender's `turn` field into the sender's own view.
    pub fn try_from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Mine),
            1 => Some(Side::Opponent),
            _ => None,
        }
    }
}

/// Lifecycle of a match. Only ever advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for the match to start.
    InMenu,
    /// Rounds are being exchanged.
    Playing,
    /// An outcome has been reached.
    Finished,
}

/// Outcome of evaluating the Board, from the local side's perspective.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum JudgeStatus {
    /// No outcome yet.
    NotYet,
    /// The local side won.
    Win,
    /// The local side lost.
    Lose,
    /// Both sides ran out of rounds.
    Draw,
}

impl JudgeStatus {
    /// True once the match has an outcome.
    pub fn is_decided(self) -> bool {
        self != JudgeStatus::NotYet
    }
}
