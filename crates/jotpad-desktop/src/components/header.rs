//! Notes screen header with the page actions

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::state::AppState;

#[component]
pub fn NotesHeader(on_logout: EventHandler<MouseEvent>, on_new: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "notes-header",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 32px;
            ",

            h1 {
                style: "
                    margin: 0;
                    font-size: 34px;
                    font-weight: bold;
                    background: {colors.accent_gradient};
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                ",
                "My Notes"
            }

            div {
                style: "display: flex; gap: 16px; align-items: center;",

                Button {
                    variant: ButtonVariant::Destructive,
                    title: "Logout",
                    onclick: move |evt| on_logout.call(evt),
                    "Logout"
                }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |evt| on_new.call(evt),
                    "+ New Note"
                }
            }
        }
    }
}
