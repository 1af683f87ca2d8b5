//! Agenda views and query filtering

use crate::note::Note;
use regex::Regex;

/// A day-ranged view over scheduled notes
///
/// Produced by [`NoteFile::daily_agenda`](crate::NoteFile::daily_agenda) and
/// [`NoteFile::weekly_agenda`](crate::NoteFile::weekly_agenda); narrowed
/// further with [`Agenda::filter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Agenda {
    notes: Vec<Note>,
}

impl Agenda {
    /// Create an agenda over the given notes
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// The notes in this view, in file order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Whether the view holds no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Keep the notes matching every constraint of `query`
    pub fn filter(&self, query: &AgendaQuery) -> Agenda {
        Agenda {
            notes: self
                .notes
                .iter()
                .filter(|note| query.matches(note))
                .cloned()
                .collect(),
        }
    }
}

/// Query constraints for [`Agenda::filter`]
///
/// Unset constraints always match, so the empty query keeps everything.
///
/// # Examples
/// ```
/// use tabsheet_agenda::AgendaQuery;
/// use regex::Regex;
///
/// let query = AgendaQuery::new()
///     .tag("important")
///     .text(Regex::new("milk").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AgendaQuery {
    tag: Option<String>,
    text: Option<Regex>,
    status: Option<String>,
}

impl AgendaQuery {
    /// An empty query matching every note
    pub fn new() -> Self {
        Self::default()
    }

    /// Require exact tag membership
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Require a free-text match against the header or the body
    pub fn text(mut self, pattern: Regex) -> Self {
        self.text = Some(pattern);
        self
    }

    /// Require an exact status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn matches(&self, note: &Note) -> bool {
        if let Some(tag) = &self.tag {
            if !note.tags().iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(pattern) = &self.text {
            if !pattern.is_match(note.header()) && !pattern.is_match(note.body()) {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if note.status() != status {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_agenda() -> Agenda {
        let mut a = Note::new("buy milk", &["shopping", "urgent"]);
        a.set_body("two bottles");
        a.set_status("done");

        let mut b = Note::new("standup", &["work"]);
        b.set_body("mention the milk run");

        let c = Note::new("read book", &["leisure"]);

        Agenda::new(vec![a, b, c])
    }

    fn headers(agenda: &Agenda) -> Vec<&str> {
        agenda.notes().iter().map(|n| n.header()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let agenda = sample_agenda();
        assert_eq!(agenda.filter(&AgendaQuery::new()), agenda);
    }

    #[test]
    fn test_filter_by_tag_membership() {
        let agenda = sample_agenda();
        let filtered = agenda.filter(&AgendaQuery::new().tag("urgent"));
        assert_eq!(headers(&filtered), vec!["buy milk"]);

        assert!(agenda.filter(&AgendaQuery::new().tag("missing")).is_empty());
    }

    #[test]
    fn test_filter_by_text_matches_header_or_body() {
        let agenda = sample_agenda();
        let filtered = agenda.filter(&AgendaQuery::new().text(Regex::new("milk").unwrap()));
        // "buy milk" matches in the header, "standup" in the body.
        assert_eq!(headers(&filtered), vec!["buy milk", "standup"]);
    }

    #[test]
    fn test_filter_by_status() {
        let agenda = sample_agenda();
        let filtered = agenda.filter(&AgendaQuery::new().status("done"));
        assert_eq!(headers(&filtered), vec!["buy milk"]);

        let filtered = agenda.filter(&AgendaQuery::new().status("topostpone"));
        assert_eq!(headers(&filtered), vec!["standup", "read book"]);
    }

    #[test]
    fn test_filters_compose() {
        let agenda = sample_agenda();
        let query = AgendaQuery::new()
            .tag("shopping")
            .text(Regex::new("bottles").unwrap())
            .status("done");
        assert_eq!(headers(&agenda.filter(&query)), vec!["buy milk"]);

        // Same query with a non-matching status keeps nothing.
        let query = AgendaQuery::new().tag("shopping").status("topostpone");
        assert!(agenda.filter(&query).is_empty());
    }
}
