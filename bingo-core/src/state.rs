use crate::{constants::POOL_SIZE, number::BallNumber};

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single call within a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawRecord {
    pub n: BallNumber,
    /// Seconds since the UNIX epoch.
    pub ts: u64,
}

/// The persisted draw state of the current round.
///
/// Numbers move from `remaining` to `history` one at a time, so together they always cover the
/// whole pool exactly once. The value is treated as immutable: drawing produces a new `State`.
///
/// Serialized keys are declared in sorted order and `remaining` is kept as an ordered set, which
/// makes the JSON form deterministic for a given state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct State {
    pub(crate) history: Vec<DrawRecord>,
    pub(crate) remaining: BTreeSet<BallNumber>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("number {0} appears more than once in `remaining`")]
    DuplicateRemaining(BallNumber),
    #[error("number {0} was drawn more than once this round")]
    DuplicateHistory(BallNumber),
    #[error("number {0} is both drawn and remaining")]
    DrawnAndRemaining(BallNumber),
    #[error("{history} drawn and {remaining} remaining do not cover the pool of 75")]
    IncompletePool { history: usize, remaining: usize },
}

// Wire shape, accepted before the round invariants are checked.
#[derive(Deserialize)]
struct StateRecord {
    history: Vec<DrawRecord>,
    remaining: Vec<BallNumber>,
}

impl TryFrom<StateRecord> for State {
    type Error = StateError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let mut remaining = BTreeSet::new();
        for number in record.remaining {
            if !remaining.insert(number) {
                return Err(StateError::DuplicateRemaining(number));
            }
        }

        let state = State {
            history: record.history,
            remaining,
        };
        state.validate()?;

        Ok(state)
    }
}

impl State {
    /// A new round: every number remaining, nothing drawn.
    pub fn fresh() -> Self {
        State {
            history: Vec::new(),
            remaining: BallNumber::all().collect(),
        }
    }

    pub fn remaining(&self) -> &BTreeSet<BallNumber> {
        &self.remaining
    }

    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    pub fn last_draw(&self) -> Option<&DrawRecord> {
        self.history.last()
    }

    pub fn called_count(&self) -> usize {
        POOL_SIZE - self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Checks that `history` and `remaining` partition the pool.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut drawn = HashSet::with_capacity(self.history.len());
        for record in &self.history {
            if !drawn.insert(record.n) {
                return Err(StateError::DuplicateHistory(record.n));
            }
            if self.remaining.contains(&record.n) {
                return Err(StateError::DrawnAndRemaining(record.n));
            }
        }

        if self.history.len() + self.remaining.len() != POOL_SIZE {
            return Err(StateError::IncompletePool {
                history: self.history.len(),
                remaining: self.remaining.len(),
            });
        }

        Ok(())
    }
}

impl Default for State {
    fn default() -> Self {
        Self::fresh()
    }
}
