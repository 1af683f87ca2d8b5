//! The closed arithmetic operation table

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A named binary arithmetic operation
///
/// The set is closed: a formula may only name one of these five. DIVIDE and
/// MOD take exactly two arguments and are undefined for a zero divisor; the
/// others reduce left-to-right over two or more operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `ADD(a,b,...)` - sum
    Add,
    /// `SUBTRACT(a,b,...)` - left-to-right difference
    Subtract,
    /// `MULTIPLY(a,b,...)` - product
    Multiply,
    /// `DIVIDE(a,b)` - quotient
    Divide,
    /// `MOD(a,b)` - remainder
    Mod,
}

impl Operation {
    /// Look up an operation by its formula name
    ///
    /// Fails with [`Error::UnknownOperation`] for any name outside the closed
    /// set, e.g. `POW`.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "ADD" => Ok(Operation::Add),
            "SUBTRACT" => Ok(Operation::Subtract),
            "MULTIPLY" => Ok(Operation::Multiply),
            "DIVIDE" => Ok(Operation::Divide),
            "MOD" => Ok(Operation::Mod),
            _ => Err(Error::UnknownOperation(name.to_string())),
        }
    }

    /// The formula-visible name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Subtract => "SUBTRACT",
            Operation::Multiply => "MULTIPLY",
            Operation::Divide => "DIVIDE",
            Operation::Mod => "MOD",
        }
    }

    /// Whether this operation takes exactly two arguments
    pub fn is_binary_only(&self) -> bool {
        matches!(self, Operation::Divide | Operation::Mod)
    }

    /// Apply to two operands
    ///
    /// Returns `None` for DIVIDE or MOD with a zero divisor; the caller turns
    /// that into its division-by-zero error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operation::Add => Some(lhs + rhs),
            Operation::Subtract => Some(lhs - rhs),
            Operation::Multiply => Some(lhs * rhs),
            Operation::Divide => (rhs != 0.0).then(|| lhs / rhs),
            Operation::Mod => (rhs != 0.0).then(|| lhs % rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
