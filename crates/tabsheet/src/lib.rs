//! # tabsheet
//!
//! A plain-text spreadsheet engine: grids parse from tab/newline-delimited
//! text, cells resolve recursively through reference chains and closed-set
//! arithmetic operations, and whole sheets render back to text with every
//! formula replaced by its value.
//!
//! ## Example
//!
//! ```rust
//! use tabsheet::prelude::*;
//!
//! // One line per column; tokens within a line are its rows.
//! let grid = Grid::parse("3\t=ADD(A1,B1)\n4");
//!
//! assert_eq!(grid.display_value("A2").unwrap(), "7");
//! assert_eq!(grid.render().unwrap(), "3\t7\n4");
//! ```
//!
//! The agenda companion layer (scheduled notes, tags, day-ranged queries)
//! re-exports from [`tabsheet_agenda`]; it shares nothing with the grid
//! beyond this facade.

pub mod prelude;
pub mod render;

pub use render::GridRenderExt;

// Re-export core types
pub use tabsheet_core::{Cell, CellAddress, CellKind, Error, Grid, Operation, Result};

// Re-export formula types
pub use tabsheet_formula::{format_number, resolve, EvalError, EvalResult};

// Re-export agenda types
pub use tabsheet_agenda::{Agenda, AgendaError, AgendaQuery, AgendaResult, Date, Note, NoteFile};
