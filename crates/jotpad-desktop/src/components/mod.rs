//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod header;
mod note_card;
mod note_modal;
mod notice;

pub use button::{Button, ButtonVariant};
pub use header::NotesHeader;
pub use note_card::NoteCard;
pub use note_modal::NoteModal;
pub use notice::NoticeBanner;
