use crate::{
    error::{Error, Result},
    number::BallNumber,
    state::{DrawRecord, State},
};

use std::time::SystemTime;

use rand::{
    Rng, SeedableRng,
    rngs::{StdRng, ThreadRng},
};
use tracing::event;

/// Source of the uniform choice made on every draw.
pub trait RandomSource {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// Adapts any [rand::Rng] into a [RandomSource].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

pub type ThreadSource = RngSource<ThreadRng>;
pub type SeededSource = RngSource<StdRng>;

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// The same seed always yields the same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Source of draw timestamps, in seconds since the UNIX epoch.
pub trait Clock {
    fn now(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

/// The outcome of a single draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    pub number: BallNumber,
    pub state: State,
    /// Whether the pool was exhausted and a new round started before drawing.
    pub round_reset: bool,
}

pub struct Drawer<S, C = SystemClock> {
    source: S,
    clock: C,
}

impl<S: RandomSource> Drawer<S> {
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock)
    }
}

impl<S: RandomSource, C: Clock> Drawer<S, C> {
    pub fn with_clock(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    /// Draw one number from `state` without replacement.
    ///
    /// An exhausted pool is refilled (and the history cleared) before drawing. The input state
    /// is left untouched; the updated state is returned in the [Draw].
    ///
    /// # Errors
    ///
    /// - [Error::RangeInvariantViolation] if there is nothing to draw from after the reset
    ///   step, or the random source picks a position outside of the pool.
    pub fn pick(&mut self, state: &State) -> Result<Draw> {
        let mut next = state.clone();

        let round_reset = next.is_exhausted();
        if round_reset {
            event!(
                tracing::Level::INFO,
                "All {} numbers called, starting a new round",
                next.history.len()
            );
            next = State::fresh();
        }

        let candidates = next.remaining.len();
        if candidates == 0 {
            return Err(Error::RangeInvariantViolation(
                "no numbers remaining after the round reset".to_string(),
            ));
        }

        let idx = self.source.index(candidates);
        let number = next.remaining.iter().nth(idx).copied().ok_or_else(|| {
            Error::RangeInvariantViolation(format!(
                "random index {idx} outside of {candidates} remaining numbers"
            ))
        })?;

        next.remaining.remove(&number);
        next.history.push(DrawRecord {
            n: number,
            ts: self.clock.now(),
        });

        event!(
            tracing::Level::DEBUG,
            "Drew [{}], {} numbers remaining",
            number,
            next.remaining.len()
        );

        Ok(Draw {
            number,
            state: next,
            round_reset,
        })
    }
}
