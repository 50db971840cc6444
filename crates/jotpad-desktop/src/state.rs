//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;
use jotpad_core::view::Route;

use crate::services::NotesService;
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Which screen is showing
    pub route: Signal<Route>,
    /// Resolved theme (light/dark based on `JOTPAD_THEME` and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Notes service client, absent when the configuration is unusable
    pub service: Signal<Option<NotesService>>,
}

impl AppState {
    pub fn service(&self) -> Option<NotesService> {
        self.service.read().clone()
    }

    /// Leave for the login screen, forgetting the persisted session.
    pub fn navigate_to_login(&mut self) {
        let current = self.service();
        if let Some(service) = current {
            match service.signed_out() {
                Ok(fresh) => self.service.set(Some(fresh)),
                Err(error) => tracing::error!("Failed to reset notes client: {}", error),
            }
        }
        self.route.set(Route::Login);
    }

    pub fn navigate_to_notes(&mut self) {
        self.route.set(Route::Notes);
    }
}
