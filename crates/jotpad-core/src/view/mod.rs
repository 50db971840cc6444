//! State behind the notes screen.
//!
//! [`NotesView`] holds the list snapshot, the optional create/edit dialog and
//! the last failure notice. It never talks to the network itself: user
//! actions return a [`Mutation`] to send, and results are fed back through
//! [`NotesView::apply_list`] / [`NotesView::resolve`], which answer with the
//! [`Effect`] the caller must carry out next. [`NotesController`] wires this
//! to a [`NotesApi`] for callers that can hold the state across awaits.

mod controller;
mod dialog;

use crate::api::{ApiResult, NotesApi};
use crate::models::{Note, NoteId, NotePayload};

pub use controller::{NotesController, Route};
pub use dialog::{DialogId, DialogMode, NoteDialog};

/// A write request produced by a user action.
///
/// Saves remember which dialog submitted them, so a late result only touches
/// that dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create {
        dialog: DialogId,
        payload: NotePayload,
    },
    Update {
        dialog: DialogId,
        id: NoteId,
        payload: NotePayload,
    },
    Delete(NoteId),
    Logout,
}

impl Mutation {
    /// Issue this mutation against the service.
    pub async fn send<A: NotesApi>(&self, api: &A) -> ApiResult<()> {
        match self {
            Self::Create { payload, .. } => api.create_note(payload).await,
            Self::Update { id, payload, .. } => api.update_note(id, payload).await,
            Self::Delete(id) => api.delete_note(id).await,
            Self::Logout => api.logout().await,
        }
    }

    /// Verb phrase used in logs and notices
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Create { .. } => "creating note",
            Self::Update { .. } => "editing note",
            Self::Delete(_) => "deleting note",
            Self::Logout => "logging out",
        }
    }

    /// The dialog a save came from
    pub const fn dialog(&self) -> Option<DialogId> {
        match self {
            Self::Create { dialog, .. } | Self::Update { dialog, .. } => Some(*dialog),
            Self::Delete(_) | Self::Logout => None,
        }
    }
}

/// Follow-up the caller owes after feeding a result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch `GET /notes` once and pass it to [`NotesView::apply_list`]
    Refresh,
    /// Leave the notes screen for the login screen
    NavigateToLogin,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesView {
    notes: Vec<Note>,
    dialog: Option<NoteDialog>,
    notice: Option<String>,
    last_dialog: DialogId,
}

impl NotesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last fetched snapshot, in server order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn dialog(&self) -> Option<&NoteDialog> {
        self.dialog.as_ref()
    }

    pub const fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Last failure worth showing to the user
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn find_note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// "New": empty draft in create mode, discarding any open dialog.
    pub fn open_new(&mut self) {
        let id = self.next_dialog_id();
        self.dialog = Some(NoteDialog::create(id));
    }

    /// "Edit": draft seeded from `note`, saving targets `note.id`.
    pub fn open_edit(&mut self, note: &Note) {
        let id = self.next_dialog_id();
        self.dialog = Some(NoteDialog::edit(id, note));
    }

    /// Cancel, backdrop click and Escape all land here.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.draft_mut().title = title.into();
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.draft_mut().content = content.into();
        }
    }

    /// Confirm the dialog.
    ///
    /// Returns `None` when no dialog is open or a save from it is still in
    /// flight, so repeated clicks issue one request.
    pub fn submit(&mut self) -> Option<Mutation> {
        let dialog = self.dialog.as_mut()?;
        if dialog.is_saving() {
            tracing::debug!("Ignoring save while a previous save is in flight");
            return None;
        }
        dialog.set_saving(true);

        let payload = dialog.payload();
        Some(match dialog.mode() {
            DialogMode::Create => Mutation::Create {
                dialog: dialog.id(),
                payload,
            },
            DialogMode::Edit(id) => Mutation::Update {
                dialog: dialog.id(),
                id: id.clone(),
                payload,
            },
        })
    }

    pub fn delete(&self, id: &NoteId) -> Mutation {
        Mutation::Delete(id.clone())
    }

    pub const fn logout(&self) -> Mutation {
        Mutation::Logout
    }

    /// Feed back the result of `GET /notes`.
    pub fn apply_list(&mut self, result: ApiResult<Vec<Note>>) -> Effect {
        match result {
            Ok(notes) => {
                tracing::debug!("Loaded {} notes", notes.len());
                self.notes = notes;
                Effect::None
            }
            Err(error) if error.is_auth_expired() => {
                tracing::info!("Session expired while fetching notes, redirecting to login");
                Effect::NavigateToLogin
            }
            Err(error) => {
                tracing::error!("Error fetching notes: {}", error);
                self.notice = Some(format!("Could not load notes: {error}"));
                Effect::None
            }
        }
    }

    /// Feed back the result of a mutation returned by this view.
    pub fn resolve(&mut self, mutation: &Mutation, result: ApiResult<()>) -> Effect {
        match result {
            Ok(()) => match mutation {
                Mutation::Create { .. } | Mutation::Update { .. } => {
                    if self.submitting_dialog(mutation).is_some() {
                        self.dialog = None;
                    }
                    self.notice = None;
                    Effect::Refresh
                }
                Mutation::Delete(_) => {
                    self.notice = None;
                    Effect::Refresh
                }
                Mutation::Logout => {
                    tracing::info!("Logged out");
                    Effect::NavigateToLogin
                }
            },
            Err(error) => {
                self.finish_saving(mutation);
                if error.is_auth_expired() {
                    tracing::info!(
                        "Session expired while {}, redirecting to login",
                        mutation.action()
                    );
                    return Effect::NavigateToLogin;
                }
                tracing::error!("Error {}: {}", mutation.action(), error);
                self.notice = Some(format!("Error {}: {error}", mutation.action()));
                Effect::None
            }
        }
    }

    fn next_dialog_id(&mut self) -> DialogId {
        self.last_dialog = self.last_dialog.next();
        self.last_dialog
    }

    /// The open dialog, if it is the one `mutation` was submitted from.
    fn submitting_dialog(&mut self, mutation: &Mutation) -> Option<&mut NoteDialog> {
        let id = mutation.dialog()?;
        self.dialog.as_mut().filter(|dialog| dialog.id() == id)
    }

    fn finish_saving(&mut self, mutation: &Mutation) {
        if let Some(dialog) = self.submitting_dialog(mutation) {
            dialog.set_saving(false);
        }
    }
}
