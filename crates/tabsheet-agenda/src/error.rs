//! Error types for tabsheet-agenda

use thiserror::Error;

/// Result type alias using [`AgendaError`]
pub type AgendaResult<T> = std::result::Result<T, AgendaError>;

/// Errors that can occur in the agenda layer
#[derive(Debug, Error)]
pub enum AgendaError {
    /// Date text does not match `YYYY-MM-DD`
    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    /// Offset text does not match `+<N>d`, `+<N>w` or `+<N>m`
    #[error("Invalid date offset '{0}'")]
    InvalidOffset(String),
}
