//! Notes and note files
//!
//! A note file owns a tree of notes; agenda views flatten one level of
//! sub-notes, the way the layer has always behaved.

use crate::agenda::Agenda;
use crate::date::Date;
use crate::error::{AgendaError, AgendaResult};
use lazy_regex::regex;

/// Status a note starts in
pub const DEFAULT_STATUS: &str = "topostpone";

/// A single note: header, tags, body, status, optional schedule, sub-notes
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    header: String,
    tags: Vec<String>,
    body: String,
    status: String,
    file_name: String,
    scheduled: Option<Date>,
    recurrence: Option<String>,
    sub_notes: Vec<Note>,
}

impl Note {
    /// Create a note with a header and tags
    ///
    /// Body starts empty, status starts as [`DEFAULT_STATUS`]; the file name
    /// is stamped when the note joins a [`NoteFile`].
    pub fn new(header: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            header: header.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            body: String::new(),
            status: DEFAULT_STATUS.to_string(),
            file_name: String::new(),
            scheduled: None,
            recurrence: None,
            sub_notes: Vec::new(),
        }
    }

    /// The note's header
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The note's tags, in the order given
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The note's body text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the body text
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// The note's status
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replace the status
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Name of the file the note belongs to (empty until added to one)
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The scheduled date, if any
    pub fn scheduled(&self) -> Option<Date> {
        self.scheduled
    }

    /// The verbatim recurrence suffix of the scheduling string, if any
    pub fn recurrence(&self) -> Option<&str> {
        self.recurrence.as_deref()
    }

    /// Schedule the note
    ///
    /// Accepts `"YYYY-MM-DD"`, optionally followed by a recurrence suffix
    /// which is kept verbatim: `"2012-08-07 +1w"`.
    pub fn schedule(&mut self, text: &str) -> AgendaResult<()> {
        let caps = regex!(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})(?:\s+(\+[0-9]+[dwm]))?$")
            .captures(text.trim())
            .ok_or_else(|| AgendaError::InvalidDate(text.to_string()))?;

        self.scheduled = Some(Date::parse(&caps[1])?);
        self.recurrence = caps.get(2).map(|m| m.as_str().to_string());
        Ok(())
    }

    /// Nested sub-notes, in insertion order
    pub fn sub_notes(&self) -> &[Note] {
        &self.sub_notes
    }

    /// Attach a sub-note
    pub fn add_sub_note(&mut self, note: Note) {
        self.sub_notes.push(note);
    }

    fn stamp_file_name(&mut self, name: &str) {
        self.file_name = name.to_string();
        for sub in &mut self.sub_notes {
            sub.stamp_file_name(name);
        }
    }
}

/// A named collection of notes
#[derive(Debug, Clone, PartialEq)]
pub struct NoteFile {
    name: String,
    notes: Vec<Note>,
}

impl NoteFile {
    /// Create an empty note file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: Vec::new(),
        }
    }

    /// The file's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level notes, in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Add a top-level note, stamping the file name through its sub-note tree
    pub fn add_note(&mut self, mut note: Note) {
        note.stamp_file_name(&self.name);
        self.notes.push(note);
    }

    /// Notes scheduled on exactly `day`
    pub fn daily_agenda(&self, day: Date) -> Agenda {
        self.agenda_between(day, day)
    }

    /// Notes scheduled within the seven days starting at `start`
    pub fn weekly_agenda(&self, start: Date) -> Agenda {
        self.agenda_between(start, start.add_days(6))
    }

    /// Notes (one level of sub-notes included) scheduled in `[start, end]`
    ///
    /// Unscheduled notes never appear in an agenda.
    fn agenda_between(&self, start: Date, end: Date) -> Agenda {
        let mut notes = Vec::new();
        for note in &self.notes {
            for candidate in std::iter::once(note).chain(note.sub_notes()) {
                match candidate.scheduled() {
                    Some(date) if date >= start && date <= end => {
                        notes.push(candidate.clone());
                    }
                    _ => {}
                }
            }
        }
        Agenda::new(notes)
    }
}
