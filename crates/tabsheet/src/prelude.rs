//! Prelude module - common imports for tabsheet users
//!
//! ```rust
//! use tabsheet::prelude::*;
//! ```

pub use crate::{
    // Agenda types
    Agenda,
    AgendaError,
    AgendaQuery,
    // Cell types
    Cell,
    CellAddress,
    CellKind,
    Date,
    // Error types
    Error,
    EvalError,
    EvalResult,
    // Main types
    Grid,
    // Extension traits
    GridRenderExt,
    Note,
    NoteFile,
    Operation,
    Result,
};
