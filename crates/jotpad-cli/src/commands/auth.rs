use jotpad_core::api::{ApiError, Credentials, HttpNotesApi, NotesApi};
use jotpad_core::session::SessionPersistence;
use jotpad_core::view::{NotesController, Route};

use crate::error::CliError;

pub async fn run_login<S: SessionPersistence>(
    api: &HttpNotesApi,
    store: &S,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    let credentials = Credentials::new(email, password);
    let session = api
        .login(&credentials)
        .await
        .map_err(|error| match error {
            ApiError::Unauthorized => CliError::InvalidCredentials,
            other => CliError::Api(other),
        })?;

    store.save_session(&session)?;
    tracing::info!("Stored session for {}", api.base_url());
    println!("Signed in as {}", credentials.email);
    Ok(())
}

/// `POST /auth/logout`; the stored session is dropped whenever the
/// controller leaves for the login screen (success or 401).
pub async fn run_logout<A: NotesApi, S: SessionPersistence>(
    api: A,
    store: &S,
) -> Result<(), CliError> {
    let mut controller = NotesController::new(api);
    controller.logout().await;

    if controller.route() == Route::Login {
        store.clear_session()?;
        println!("Signed out");
        return Ok(());
    }

    let notice = controller
        .view_mut()
        .take_notice()
        .unwrap_or_else(|| "Error logging out".to_string());
    Err(CliError::Operation(notice))
}
