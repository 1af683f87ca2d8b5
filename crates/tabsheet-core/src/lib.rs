//! # tabsheet-core
//!
//! Core data structures for the tabsheet spreadsheet engine.
//!
//! This crate provides the fundamental types:
//! - [`CellAddress`] - Cell addressing (column letters + row number, e.g. `B3`)
//! - [`Cell`] and [`CellKind`] - A raw cell value and its classified shape
//! - [`Operation`] - The closed arithmetic operation table
//! - [`Grid`] - An immutable cell grid parsed from tab/newline-delimited text
//!
//! ## Example
//!
//! ```rust
//! use tabsheet_core::{CellKind, Grid};
//!
//! // Each input line is one column; tokens within a line are its rows.
//! let grid = Grid::parse("3\t=ADD(A1,B1)\n4");
//!
//! let cell = grid.get("A2".parse().unwrap()).unwrap();
//! assert!(matches!(cell.kind(), CellKind::Operation { .. }));
//! assert_eq!(cell.raw(), "=ADD(A1,B1)");
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod grid;
pub mod operation;

pub use address::CellAddress;
pub use cell::{Cell, CellKind};
pub use error::{Error, Result};
pub use grid::Grid;
pub use operation::Operation;
