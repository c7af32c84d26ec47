mod constants;
mod drawer;
mod error;
mod label;
mod number;
mod state;
mod store;

pub use constants::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_LETTER, POOL_SIZE};
pub use drawer::{
    Clock, Draw, Drawer, RandomSource, RngSource, SeededSource, SystemClock, ThreadSource,
};
pub use error::{Error, Result};
pub use label::{Letter, called_count, label_for, letter_for, progress_line};
pub use number::{BallNumber, NumberOutOfRangeError};
pub use state::{DrawRecord, State, StateError};
pub use store::{JsonFileStore, MemoryStore, StateStore};
