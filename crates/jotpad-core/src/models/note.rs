//! Note model

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned note identifier.
///
/// Opaque to the client: it is only compared, displayed, and sent back in
/// request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A note as returned by `GET /notes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned by the server at creation
    #[serde(rename = "_id", alias = "id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Creation timestamp, never changes after creation
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creation date rendered in the local time zone, e.g. `3/14/2025`
    #[must_use]
    pub fn created_label(&self) -> String {
        format_note_date(&self.created_at.with_timezone(&Local))
    }

    /// First `max_len` characters of the content's first line
    #[must_use]
    pub fn content_preview(&self, max_len: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("");
        let mut preview: String = first_line.chars().take(max_len).collect();
        if first_line.chars().count() > max_len {
            preview.push_str("...");
        }
        preview
    }
}

/// Short month/day/year date used on note cards and in CLI listings.
pub fn format_note_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    timestamp.format("%-m/%-d/%Y").to_string()
}
