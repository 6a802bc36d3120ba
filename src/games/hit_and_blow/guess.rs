//! Guesses, answers, and the recorded exchange between them.

use super::error::GameError;
use super::hand::DIGITS;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A guess at the opponent's hand: three digits, repeats allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 3]")]
pub struct Guess([u8; DIGITS]);

impl Guess {
    /// Builds a guess from digits already known to be in range.
    pub(crate) fn from_digits(digits: [u8; DIGITS]) -> Self {
        Self(digits)
    }

    /// Parses a fixed-width numeric guess such as `"132"`.
    ///
    /// Fails with [`GameError::InvalidGuess`] unless the text is exactly
    /// three ASCII digits.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != DIGITS {
            return Err(GameError::InvalidGuess(format!(
                "expected {} digits, got {:?}",
                DIGITS, text
            )));
        }

        let mut digits = [0u8; DIGITS];
        for (slot, c) in digits.iter_mut().zip(chars) {
            if !c.is_ascii_digit() {
                return Err(GameError::InvalidGuess(format!("'{}' is not a digit", c)));
            }
            *slot = c as u8 - b'0';
        }
        Ok(Self(digits))
    }

    /// Returns the guessed digits.
    pub fn digits(&self) -> &[u8; DIGITS] {
        &self.0
    }

    /// Compact form used on the wire, e.g. `"132"`.
    pub fn to_wire(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl FromStr for Guess {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<[u8; DIGITS]> for Guess {
    type Error = GameError;

    fn try_from(digits: [u8; DIGITS]) -> Result<Self, Self::Error> {
        if let Some(d) = digits.iter().find(|&&d| d > 9) {
            return Err(GameError::InvalidGuess(format!("digit {} out of range", d)));
        }
        Ok(Self(digits))
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

/// Score of one guess: hits and blows, with `hit + blow <= 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAnswer")]
pub struct Answer {
    hit: u8,
    blow: u8,
}

impl Answer {
    pub(crate) fn new(hit: u8, blow: u8) -> Self {
        Self { hit, blow }
    }

    /// Validates an answer reported by the peer.
    ///
    /// Fails with [`GameError::ProtocolDecode`] if the tally cannot come
    /// from a three-digit comparison.
    #[instrument]
    pub fn from_wire(hit: u8, blow: u8) -> Result<Self, GameError> {
        if usize::from(hit) + usize::from(blow) > DIGITS {
            return Err(GameError::ProtocolDecode(format!(
                "impossible answer: {} hit, {} blow",
                hit, blow
            )));
        }
        Ok(Self { hit, blow })
    }

    /// Digits in the right place.
    pub fn hit(&self) -> u8 {
        self.hit
    }

    /// Digits present elsewhere in the hand.
    pub fn blow(&self) -> u8 {
        self.blow
    }

    /// True when every digit was a hit.
    pub fn is_all_hit(&self) -> bool {
        usize::from(self.hit) == DIGITS && self.blow == 0
    }
}

#[derive(Deserialize)]
struct RawAnswer {
    hit: u8,
    blow: u8,
}

impl TryFrom<RawAnswer> for Answer {
    type Error = GameError;

    fn try_from(raw: RawAnswer) -> Result<Self, Self::Error> {
        Self::from_wire(raw.hit, raw.blow)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} hit, {} blow", self.hit, self.blow)
    }
}

/// One recorded exchange: a guess and the answer it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Qa {
    /// The guess that was asked.
    guess: Guess,
    /// The answer it earned.
    answer: Answer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hit_and_blow::hand::Hand;

    fn hand(d: [u8; 3]) -> Hand {
        Hand::from_digits(&d).unwrap()
    }

    #[test]
    fn test_score_mixed() {
        let answer = hand([1, 2, 3]).score(&Guess::parse("132").unwrap());
        assert_eq!((answer.hit(), answer.blow()), (1, 2));
    }

    #[test]
    fn test_score_all_hit() {
        let answer = hand([4, 5, 6]).score(&Guess::parse("456").unwrap());
        assert_eq!((answer.hit(), answer.blow()), (3, 0));
        assert!(answer.is_all_hit());
    }

    #[test]
    fn test_score_nothing() {
        let answer = hand([0, 1, 2]).score(&Guess::parse("999").unwrap());
        assert_eq!((answer.hit(), answer.blow()), (0, 0));
        assert!(!answer.is_all_hit());
    }

    #[test]
    fn test_repeated_guess_digit_counts_twice() {
        // One `1` in the hand, two `1`s in the guess at non-matching positions.
        let answer = hand([5, 7, 1]).score(&Guess::parse("115").unwrap());
        assert_eq!((answer.hit(), answer.blow()), (0, 3));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for text in ["", "12", "1234", "12a", " 12", "1-2", "１２３"] {
            assert!(
                matches!(Guess::parse(text), Err(GameError::InvalidGuess(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_allows_repeats() {
        assert_eq!(Guess::parse("999").unwrap().digits(), &[9, 9, 9]);
    }

    #[test]
    fn test_wire_form() {
        let guess: Guess = "072".parse().unwrap();
        assert_eq!(guess.to_wire(), "072");
        assert_eq!(guess.to_string(), "0 7 2");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_digits() {
        let guess: Guess = serde_json::from_str("[9,9,1]").unwrap();
        assert_eq!(guess.to_wire(), "991");
        assert!(serde_json::from_str::<Guess>("[250,0,0]").is_err());
        assert!(serde_json::from_str::<Guess>("[1,2,10]").is_err());
    }

    #[test]
    fn test_deserialize_answer_checks_tally() {
        let answer: Answer = serde_json::from_str(r#"{"hit":1,"blow":2}"#).unwrap();
        assert_eq!(answer, Answer::from_wire(1, 2).unwrap());
        assert!(serde_json::from_str::<Answer>(r#"{"hit":3,"blow":3}"#).is_err());
    }

    #[test]
    fn test_answer_from_wire_bounds() {
        assert!(Answer::from_wire(3, 0).is_ok());
        assert!(Answer::from_wire(1, 2).is_ok());
        assert!(matches!(
            Answer::from_wire(2, 2),
            Err(GameError::ProtocolDecode(_))
        ));
    }
}
