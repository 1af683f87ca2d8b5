//! # tabsheet-formula
//!
//! Formula resolution for the tabsheet engine.
//!
//! This crate provides:
//! - Recursive cell resolution ([`resolve`]) - literals pass through, formula
//!   chains follow references to their terminal value, operations reduce over
//!   their resolved operands
//! - Numeric result formatting ([`format_number`])
//!
//! ## Example
//!
//! ```rust
//! use tabsheet_core::Grid;
//! use tabsheet_formula::resolve;
//!
//! let grid = Grid::parse("3\t=ADD(A1,B1)\n4");
//! assert_eq!(resolve(&grid, "A2").unwrap(), "7");
//! ```

pub mod error;
pub mod evaluator;
pub mod format;

pub use error::{EvalError, EvalResult};
pub use evaluator::resolve;
pub use format::format_number;
