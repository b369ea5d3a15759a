//! Effect layer error types

use hanabi_core::PoolError;
use thiserror::Error;

/// Errors raised by strategies, systems, and render contracts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// A storage engine failure (missing attribute, bad range, ...)
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A malformed strategy or render parameter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for effect layer operations
pub type Result<T> = std::result::Result<T, FxError>;
