//! The create/edit modal's state.

use crate::models::{Note, NoteDraft, NoteId, NotePayload};

/// What confirming the dialog does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(NoteId),
}

/// Identifies one opened dialog; every `open_new`/`open_edit` gets a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

impl DialogId {
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// An open dialog: its mode, the draft being typed, and whether a save is
/// already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDialog {
    id: DialogId,
    mode: DialogMode,
    draft: NoteDraft,
    saving: bool,
}

impl NoteDialog {
    pub(crate) fn create(id: DialogId) -> Self {
        Self {
            id,
            mode: DialogMode::Create,
            draft: NoteDraft::default(),
            saving: false,
        }
    }

    pub(crate) fn edit(id: DialogId, note: &Note) -> Self {
        Self {
            id,
            mode: DialogMode::Edit(note.id.clone()),
            draft: NoteDraft::from_note(note),
            saving: false,
        }
    }

    pub const fn id(&self) -> DialogId {
        self.id
    }

    pub const fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub const fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn content(&self) -> &str {
        &self.draft.content
    }

    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    pub const fn is_edit(&self) -> bool {
        matches!(self.mode, DialogMode::Edit(_))
    }

    pub const fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Note"
        } else {
            "Create New Note"
        }
    }

    pub const fn confirm_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Save"
        }
    }

    pub(crate) fn draft_mut(&mut self) -> &mut NoteDraft {
        &mut self.draft
    }

    pub(crate) fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    pub(crate) fn payload(&self) -> NotePayload {
        self.draft.to_payload()
    }
}
