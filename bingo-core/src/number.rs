use crate::constants::{MAX_NUMBER, MIN_NUMBER};

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A number that can be called in a round, always within `MIN_NUMBER..=MAX_NUMBER`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BallNumber(u8);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("number {0} is outside of 1..=75")]
pub struct NumberOutOfRangeError(pub u8);

impl BallNumber {
    pub fn new(raw: u8) -> Result<Self, NumberOutOfRangeError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&raw) {
            return Err(NumberOutOfRangeError(raw));
        }

        Ok(Self(raw))
    }

    /// Every number of the pool, in ascending order.
    pub fn all() -> impl Iterator<Item = BallNumber> {
        (MIN_NUMBER..=MAX_NUMBER).map(BallNumber)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BallNumber {
    type Error = NumberOutOfRangeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<BallNumber> for u8 {
    fn from(number: BallNumber) -> Self {
        number.0
    }
}

impl Display for BallNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
