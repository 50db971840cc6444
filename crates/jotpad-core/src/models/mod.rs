//! Data models for Jotpad

mod draft;
mod note;

pub use draft::{NoteDraft, NotePayload};
pub use note::{format_note_date, Note, NoteId};
