//! Storage engine error types

use thiserror::Error;

/// Errors raised by particle buffers and pools.
///
/// All of these are synchronous, caller-side programming errors rather
/// than transient conditions: the failing operation validates its
/// arguments before touching any state, so pool and buffer contents are
/// unchanged after an `Err`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A malformed argument (zero stride, over-capacity wake, bad range)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An attribute buffer with this name already exists in the pool
    #[error("a buffer named {0:?} already exists")]
    DuplicateBuffer(String),

    /// No attribute buffer with this name exists in the pool
    #[error("no buffer named {0:?} exists")]
    UnknownBuffer(String),

    /// A checked element or slot access fell outside valid bounds
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The bound it was checked against
        len: usize,
    },
}

/// Result type for storage engine operations
pub type Result<T> = std::result::Result<T, PoolError>;
