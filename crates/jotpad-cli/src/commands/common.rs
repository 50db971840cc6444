use jotpad_core::api::{HttpNotesApi, NotesApi};
use jotpad_core::config::ClientConfig;
use jotpad_core::session::{KeyringSessionStore, SessionPersistence};
use jotpad_core::view::{NotesController, Route};
use jotpad_core::Note;
use serde::Serialize;

use crate::error::CliError;

const SHORT_ID_LEN: usize = 8;
const PREVIEW_LEN: usize = 80;

/// Client plus the session slot it was restored from.
pub struct Connection {
    pub api: HttpNotesApi,
    pub store: KeyringSessionStore,
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub created_at: String,
    pub created: String,
}

/// Build the HTTP client from config and restore any persisted session.
pub fn connect(api_url: Option<String>) -> Result<Connection, CliError> {
    let config = ClientConfig::load()?.with_overrides(api_url, None);
    let api =
        HttpNotesApi::new(config.api_base_url()?)?.with_access_token(config.access_token());
    let store = KeyringSessionStore::for_api(api.base_url());

    let api = match store.load_session() {
        Ok(Some(session)) => api.with_session(&session),
        Ok(None) => api,
        Err(error) => {
            tracing::warn!("Failed to restore stored session: {}", error);
            api
        }
    };

    Ok(Connection { api, store })
}

/// Mount the notes screen: one `GET /notes`, failing on 401 or a notice.
pub async fn open_notes<A: NotesApi>(api: A) -> Result<NotesController<A>, CliError> {
    let mut controller = NotesController::new(api);
    controller.load().await;
    ensure_succeeded(&mut controller)?;
    Ok(controller)
}

/// Turn the controller's outcome into a CLI result.
pub fn ensure_succeeded<A: NotesApi>(controller: &mut NotesController<A>) -> Result<(), CliError> {
    if controller.route() == Route::Login {
        return Err(CliError::SessionExpired);
    }
    match controller.view_mut().take_notice() {
        Some(notice) => Err(CliError::Operation(notice)),
        None => Ok(()),
    }
}

/// Outcome of a write the controller just sent.
///
/// Only the write's own failure is an error. Once it succeeded, a failed
/// refetch is reported as a warning so the command is not retried.
pub fn ensure_mutation_succeeded<A: NotesApi>(
    controller: &mut NotesController<A>,
    succeeded: bool,
) -> Result<(), CliError> {
    if !succeeded {
        ensure_succeeded(controller)?;
        return Err(CliError::Operation("Request failed".to_string()));
    }

    if controller.route() == Route::Login {
        eprintln!("Warning: session expired while refreshing notes");
    } else if let Some(notice) = controller.view_mut().take_notice() {
        eprintln!("Warning: {notice}");
    }
    Ok(())
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Exact id match first, then a unique id prefix.
pub fn resolve_note<'a>(notes: &'a [Note], note_query: &str) -> Result<&'a Note, CliError> {
    let note_query = normalize_note_identifier(note_query)?;

    if let Some(note) = notes.iter().find(|note| note.id.as_str() == note_query) {
        return Ok(note);
    }

    let matching = notes
        .iter()
        .filter(|note| note.id.as_str().starts_with(&note_query))
        .collect::<Vec<_>>();

    match matching.as_slice() {
        [] => Err(CliError::NoteNotFound(note_query)),
        [note] => Ok(*note),
        _ => {
            let options = matching
                .iter()
                .take(3)
                .map(|note| short_id(note))
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousNoteId(format!(
                "ID prefix '{note_query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn short_id(note: &Note) -> String {
    note.id.as_str().chars().take(SHORT_ID_LEN).collect()
}

pub fn display_title(note: &Note) -> &str {
    let title = note.title.trim();
    if title.is_empty() {
        "(untitled)"
    } else {
        title
    }
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            format!(
                "{:<width$}  {:>10}  {}",
                short_id(note),
                note.created_label(),
                display_title(note),
                width = SHORT_ID_LEN
            )
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        content: note.content.clone(),
        preview: note.content_preview(PREVIEW_LEN),
        created_at: note.created_at.to_rfc3339(),
        created: note.created_label(),
    }
}
