pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 75;

pub const POOL_SIZE: usize = MAX_NUMBER as usize;

// Each column of the card covers this many consecutive numbers.
pub const NUMBERS_PER_LETTER: u8 = 15;

pub(crate) const TEMP_FILE_SUFFIX: &str = ".tmp";

#[cfg(test)]
pub(crate) const TEST_TIMESTAMP: u64 = 1_717_000_000;
