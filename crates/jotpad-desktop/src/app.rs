//! Main application component

use dioxus::prelude::*;
use jotpad_core::view::Route;

use crate::services::NotesService;
use crate::state::AppState;
use crate::theme::{resolve_theme, ThemeMode};
use crate::views::{LoginPage, NotesPage};

/// Root application component
#[component]
pub fn App() -> Element {
    let connection = use_hook(|| {
        NotesService::connect().map_err(|error| {
            tracing::error!("Failed to configure notes client: {}", error);
            error.to_string()
        })
    });
    let startup_error = connection.clone().err();

    let route = use_signal(Route::default);
    let theme = use_signal(|| resolve_theme(ThemeMode::from_env()));
    let service = use_signal(|| connection.ok());

    use_context_provider(|| AppState {
        route,
        theme,
        service,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = current_theme.as_attr();

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            if let Some(message) = startup_error {
                div {
                    class: "startup-error",
                    style: "max-width: 640px; margin: 96px auto; padding: 24px; color: {colors.error};",
                    h2 { "Jotpad could not start" }
                    p { "{message}" }
                    p {
                        style: "color: {colors.text_secondary};",
                        "Check JOTPAD_API_URL or run `jotpad config init --api-url <URL>`."
                    }
                }
            } else {
                {
                    match route() {
                        Route::Notes => rsx! { NotesPage {} },
                        Route::Login => rsx! { LoginPage {} },
                    }
                }
            }
        }
    }
}
