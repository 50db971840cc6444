use std::io;

use jotpad_core::api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] jotpad_core::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Session expired. Run `jotpad login` to sign in again.")]
    SessionExpired,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Note not found for id/prefix: {0}")]
    NoteNotFound(String),
    #[error("{0}")]
    AmbiguousNoteId(String),
    #[error("Nothing to change: pass --title and/or --content")]
    NothingToEdit,
    #[error("{0}")]
    Operation(String),
}
