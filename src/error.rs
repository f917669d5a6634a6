//! Errors surfaced to the caller.

use thiserror::Error;

/// Error type used by operations in this crate.
#[derive(Debug, Error)]
pub enum KMeansError {
    /// The configuration cannot produce a valid clustering.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The point data is malformed.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Convenient alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, KMeansError>;
