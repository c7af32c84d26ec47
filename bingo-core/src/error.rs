use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the draw engine. None of them are retried; each one aborts the
/// current invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// The state record could not be read from or written to its medium.
    #[error("storage failure at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The state record exists but does not describe a valid round.
    #[error("malformed state record at {}: {reason}", path.display())]
    MalformedRecord { path: PathBuf, reason: String },
    /// A draw was attempted without a candidate to draw from.
    #[error("range invariant violated: {0}")]
    RangeInvariantViolation(String),
}

impl Error {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Storage {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::MalformedRecord {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
