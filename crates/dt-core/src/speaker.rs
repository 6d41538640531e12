//! Speaker identity.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::TimerError;

/// A validated speaker number in the range 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SpeakerId(u8);

impl SpeakerId {
    /// Lowest supported speaker number.
    pub const MIN: u8 = 1;
    /// Highest supported speaker number.
    pub const MAX: u8 = 9;

    /// Every speaker, in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a speaker id, rejecting anything outside 1-9.
    pub fn new(id: i64) -> Result<Self, TimerError> {
        u8::try_from(id)
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
            .ok_or_else(|| TimerError::unsupported(id.to_string()))
    }

    /// Classifies a keystroke as a speaker number.
    ///
    /// Only the digits `1`-`9` are speakers; the error carries the key as typed.
    pub fn from_key(key: char) -> Result<Self, TimerError> {
        match key.to_digit(10) {
            Some(digit) if digit != 0 => Self::new(i64::from(digit)),
            _ => Err(TimerError::unsupported(key)),
        }
    }

    /// Returns the speaker number.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpeakerId {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| TimerError::unsupported(s))
            .and_then(Self::new)
    }
}
