//! Note card component

use dioxus::prelude::*;
use jotpad_core::{Note, NoteId};

use super::button::{Button, ButtonVariant};
use crate::state::AppState;

/// One note in the list: title, creation date and its actions.
#[component]
pub fn NoteCard(note: Note, on_edit: EventHandler<Note>, on_delete: EventHandler<NoteId>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let created = note.created_label();
    let edit_target = note.clone();
    let delete_target = note.id.clone();

    rsx! {
        div {
            class: "note-card",
            style: "
                position: relative;
                padding: 16px 24px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_card};
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
            ",

            div {
                class: "note-title",
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    margin-bottom: 8px;
                    padding-right: 160px;
                    color: {colors.text_primary};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{note.title}"
            }

            div {
                class: "note-date",
                style: "font-size: 14px; color: {colors.text_secondary};",
                "{created}"
            }

            div {
                class: "note-actions",
                style: "
                    position: absolute;
                    top: 12px;
                    right: 12px;
                    display: flex;
                    gap: 8px;
                ",
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    }
}
