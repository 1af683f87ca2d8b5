//! Error types for tabsheet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabsheet-core
#[derive(Debug, Error)]
pub enum Error {
    /// Cell index text does not match the `[A-Z]+[0-9]+` grammar
    #[error("Invalid cell index '{0}'")]
    InvalidAddress(String),

    /// Operation name outside the closed set
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),
}
