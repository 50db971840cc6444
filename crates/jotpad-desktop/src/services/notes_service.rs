//! Notes service client wired to config and the stored session.

use jotpad_core::api::{ApiError, Credentials, HttpNotesApi};
use jotpad_core::config::ClientConfig;
use jotpad_core::session::{KeyringSessionStore, SessionPersistence};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] jotpad_core::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// HTTP client plus the slot its session is persisted in.
///
/// Clones share one cookie jar, so signing in through any clone
/// authenticates the rest.
#[derive(Debug, Clone)]
pub struct NotesService<S = KeyringSessionStore> {
    config: ClientConfig,
    api: HttpNotesApi,
    store: S,
}

impl NotesService {
    /// Load config (file + env) and restore the keyring session for its URL.
    pub fn connect() -> Result<Self, ServiceError> {
        let config = ClientConfig::load()?;
        let store = KeyringSessionStore::for_api(&config.api_base_url()?);
        Self::with_store(config, store)
    }
}

impl<S: SessionPersistence> NotesService<S> {
    pub fn with_store(config: ClientConfig, store: S) -> Result<Self, ServiceError> {
        let mut api = Self::fresh_api(&config)?;
        match store.load_session() {
            Ok(Some(session)) => {
                tracing::debug!("Restored stored session");
                api = api.with_session(&session);
            }
            Ok(None) => {}
            Err(error) => tracing::warn!("Failed to load stored session: {}", error),
        }
        Ok(Self { config, api, store })
    }

    pub const fn api(&self) -> &HttpNotesApi {
        &self.api
    }

    /// `POST /auth/login`, then persist what the service handed out.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ServiceError> {
        let session = self
            .api
            .login(&Credentials::new(email, password))
            .await
            .map_err(|error| match error {
                ApiError::Unauthorized => ServiceError::InvalidCredentials,
                other => ServiceError::Api(other),
            })?;

        if let Err(error) = self.store.save_session(&session) {
            tracing::warn!("Signed in but failed to persist session: {}", error);
        }
        tracing::info!("Signed in");
        Ok(())
    }

    /// Drop the persisted session and return a client without cookies.
    pub fn signed_out(&self) -> Result<Self, ServiceError> {
        if let Err(error) = self.store.clear_session() {
            tracing::warn!("Failed to clear stored session: {}", error);
        }
        Ok(Self {
            config: self.config.clone(),
            api: Self::fresh_api(&self.config)?,
            store: self.store.clone(),
        })
    }

    fn fresh_api(config: &ClientConfig) -> Result<HttpNotesApi, ServiceError> {
        Ok(HttpNotesApi::new(config.api_base_url()?)?.with_access_token(config.access_token()))
    }
}
