//! # tabsheet-agenda
//!
//! The note/agenda companion layer: scheduled notes with tags, statuses and
//! nested sub-notes, queried over day ranges.
//!
//! Dates use the layer's deliberately simplified calendar - every month has
//! 30 days and every year 12 months - so date arithmetic is plain counting.
//! The whole layer is regex-driven text plumbing with no evaluation
//! recursion, and it does not depend on the grid crates.
//!
//! ## Example
//!
//! ```rust
//! use tabsheet_agenda::{Date, Note, NoteFile};
//!
//! let mut file = NoteFile::new("work");
//! let mut note = Note::new("standup", &["daily"]);
//! note.schedule("2012-08-07 +1d").unwrap();
//! file.add_note(note);
//!
//! let agenda = file.daily_agenda(Date::parse("2012-08-07").unwrap());
//! assert_eq!(agenda.notes().len(), 1);
//! assert_eq!(agenda.notes()[0].file_name(), "work");
//! ```

pub mod agenda;
pub mod date;
pub mod error;
pub mod note;

pub use agenda::{Agenda, AgendaQuery};
pub use date::Date;
pub use error::{AgendaError, AgendaResult};
pub use note::{Note, NoteFile};
