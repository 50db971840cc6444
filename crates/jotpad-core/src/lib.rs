//! jotpad-core - Core library for Jotpad
//!
//! This crate contains the note models, the REST client for the notes
//! service, session persistence, configuration, and the notes screen state
//! shared by the Jotpad interfaces (desktop, CLI).

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod view;

pub use error::{Error, Result};
pub use models::{Note, NoteId};
