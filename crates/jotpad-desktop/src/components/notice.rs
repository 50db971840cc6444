//! Dismissible banner for the last failure

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::state::AppState;

#[component]
pub fn NoticeBanner(message: String, on_dismiss: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "notice",
            role: "alert",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                margin-bottom: 16px;
                padding: 10px 16px;
                border-radius: 8px;
                background: {colors.error_bg};
                color: {colors.error};
            ",
            span { "{message}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |evt| on_dismiss.call(evt),
                "Dismiss"
            }
        }
    }
}
