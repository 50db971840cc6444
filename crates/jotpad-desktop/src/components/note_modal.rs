//! Create/edit dialog

use dioxus::prelude::*;
use jotpad_core::view::NoteDialog;

use super::button::{Button, ButtonVariant};
use crate::state::AppState;

/// Modal over the notes list. Backdrop click and Escape close it;
/// Ctrl/Cmd+Enter saves.
#[component]
pub fn NoteModal(
    dialog: NoteDialog,
    on_title: EventHandler<String>,
    on_content: EventHandler<String>,
    on_close: EventHandler<()>,
    on_save: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let saving = dialog.is_saving();
    let heading = dialog.heading();
    let title = dialog.title().to_string();
    let content = dialog.content().to_string();
    let confirm_label = if saving { "Saving..." } else { dialog.confirm_label() };

    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Escape {
            on_close.call(());
        }
        if evt.key() == Key::Enter && (evt.modifiers().meta() || evt.modifiers().ctrl()) {
            evt.prevent_default();
            on_save.call(());
        }
    };

    let input_style = format!(
        "width: 100%; box-sizing: border-box; padding: 12px; border: 1px solid {}; \
         border-radius: 8px; font-family: inherit; background: {}; color: {}; outline: none;",
        colors.border, colors.bg_card, colors.text_primary
    );

    rsx! {
        div {
            class: "note-modal-backdrop",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
                z-index: 10;
            ",
            onclick: move |_| on_close.call(()),
            onkeydown: handle_keydown,

            div {
                class: "note-modal",
                role: "dialog",
                style: "
                    width: 900px;
                    max-width: 95vw;
                    box-sizing: border-box;
                    padding: 24px;
                    border-radius: 12px;
                    background: {colors.bg_secondary};
                    box-shadow: 0 8px 32px rgba(33, 150, 243, 0.15);
                ",
                onclick: move |evt| evt.stop_propagation(),

                h2 {
                    style: "
                        margin: 0 0 16px 0;
                        font-size: 32px;
                        font-weight: 700;
                        letter-spacing: 1px;
                        color: {colors.accent};
                    ",
                    "{heading}"
                }

                label {
                    style: "display: block; margin-bottom: 6px; color: {colors.text_secondary};",
                    "Title"
                }
                input {
                    style: "{input_style} font-size: 20px; font-weight: 500;",
                    value: "{title}",
                    autofocus: true,
                    oninput: move |evt| on_title.call(evt.value()),
                }

                div { style: "margin: 16px 0; border-bottom: 1px solid {colors.border};" }

                label {
                    style: "display: block; margin-bottom: 6px; color: {colors.text_secondary};",
                    "Content"
                }
                textarea {
                    style: "{input_style} font-size: 17px; resize: vertical;",
                    rows: "8",
                    value: "{content}",
                    oninput: move |evt| on_content.call(evt.value()),
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 12px; margin-top: 24px;",

                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving,
                        onclick: move |_| on_save.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
