//! Secret hands and the fixed universe of every possible hand.

use super::error::GameError;
use super::guess::{Answer, Guess};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::instrument;

/// Number of digits in a hand or a guess.
pub const DIGITS: usize = 3;

/// Number of distinct hands: ordered 3-permutations of ten digits (10 * 9 * 8).
pub const HAND_SPACE_SIZE: usize = 720;

/// A secret hand: three pairwise-distinct digits in `0..=9`.
///
/// The only constructors validate, so a `Hand` value always satisfies
/// the distinctness and range constraints. Deserialization goes through
/// [`Hand::from_digits`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 3]")]
pub struct Hand([u8; DIGITS]);

impl Hand {
    /// Builds a hand from explicit digits.
    ///
    /// Fails with [`GameError::InvalidHand`] if there are not exactly three
    /// digits, any digit is above 9, or two digits repeat.
    #[instrument]
    pub fn from_digits(digits: &[u8]) -> Result<Self, GameError> {
        let digits: [u8; DIGITS] = digits.try_into().map_err(|_| {
            GameError::InvalidHand(format!(
                "expected {} digits, got {}",
                DIGITS,
                digits.len()
            ))
        })?;

        if let Some(d) = digits.iter().find(|&&d| d > 9) {
            return Err(GameError::InvalidHand(format!("digit {} out of range", d)));
        }

        if digits[0] == digits[1] || digits[0] == digits[2] || digits[1] == digits[2] {
            return Err(GameError::InvalidHand(format!(
                "digits must be distinct: {:?}",
                digits
            )));
        }

        Ok(Self(digits))
    }

    /// Parses a hand from text such as `"042"`, for manual secret entry.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let digits = text
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| GameError::InvalidHand(format!("'{}' is not a digit", c)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_digits(&digits)
    }

    /// Returns the digits of the hand.
    pub fn digits(&self) -> &[u8; DIGITS] {
        &self.0
    }

    /// Returns true if `digit` appears anywhere in the hand.
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// Scores a guess against this hand.
    ///
    /// A position whose digit matches is a hit. Otherwise the guessed digit
    /// is a blow if it occurs anywhere in the hand. Each guess position is
    /// judged on its own, so a guess that repeats a digit present in the
    /// hand may collect more than one blow from a single hand digit.
    #[instrument]
    pub fn score(&self, guess: &Guess) -> Answer {
        let mut hit = 0;
        let mut blow = 0;
        for (i, &digit) in guess.digits().iter().enumerate() {
            if digit == self.0[i] {
                hit += 1;
            } else if self.contains(digit) {
                blow += 1;
            }
        }
        Answer::new(hit, blow)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

impl TryFrom<[u8; DIGITS]> for Hand {
    type Error = GameError;

    fn try_from(digits: [u8; DIGITS]) -> Result<Self, Self::Error> {
        Self::from_digits(&digits)
    }
}

impl From<Hand> for Guess {
    fn from(hand: Hand) -> Self {
        Guess::from_digits(*hand.digits())
    }
}

static ALL_HANDS: LazyLock<Vec<Hand>> = LazyLock::new(generate);

/// Lexicographic enumeration of every ordered triple of distinct digits.
fn generate() -> Vec<Hand> {
    let mut hands = Vec::with_capacity(HAND_SPACE_SIZE);
    for a in 0..10u8 {
        for b in (0..10u8).filter(|&b| b != a) {
            for c in (0..10u8).filter(|&c| c != a && c != b) {
                hands.push(Hand([a, b, c]));
            }
        }
    }
    hands
}

/// Every valid hand, in a fixed order shared by all peers and all runs.
pub fn all_hands() -> &'static [Hand] {
    &ALL_HANDS
}

/// Selects a hand deterministically from a seed.
///
/// The seed is reduced modulo the table size, so every seed is valid.
#[instrument]
pub fn hand_by_seed(seed: u64) -> Hand {
    ALL_HANDS[(seed % HAND_SPACE_SIZE as u64) as usize]
}
