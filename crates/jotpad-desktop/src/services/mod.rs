//! Application services
//!
//! The notes service client and its persisted session.

mod notes_service;

pub use notes_service::{NotesService, ServiceError};
