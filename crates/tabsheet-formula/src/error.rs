//! Evaluation error types

use thiserror::Error;

/// Result type for formula resolution
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while resolving a cell's displayed value
///
/// An error raised anywhere in a reference chain propagates unchanged to the
/// top-level caller; a single unresolved reference fails the whole call.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Requested or referenced cell index does not match `[A-Z]+[0-9]+`
    #[error("Invalid cell index '{0}'")]
    InvalidAddress(String),

    /// Syntactically valid address with no cell behind it
    #[error("Cell '{0}' does not exist")]
    MissingCell(String),

    /// Operation name outside the closed set
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    /// DIVIDE or MOD with a divisor that resolved to zero
    #[error("Division by zero in {0}")]
    DivisionByZero(&'static str),

    /// Wrong number of arguments for a two-argument operation
    #[error("Wrong number of arguments for {operation}: expected {expected}, got {actual}")]
    ArgumentCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl From<tabsheet_core::Error> for EvalError {
    fn from(err: tabsheet_core::Error) -> Self {
        match err {
            tabsheet_core::Error::InvalidAddress(text) => EvalError::InvalidAddress(text),
            tabsheet_core::Error::UnknownOperation(name) => EvalError::UnknownOperation(name),
        }
    }
}
