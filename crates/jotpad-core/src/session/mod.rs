//! Persisted login session and where it is stored.

use std::fmt;
use std::sync::{Arc, Mutex};

use keyring::Entry;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const KEYRING_SERVICE_NAME: &str = "jotpad";

/// Session material handed out by `POST /auth/login`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// `name=value` pairs captured from `Set-Cookie`
    #[serde(default)]
    pub cookies: Vec<String>,
    /// Bearer token, for services that return one in the login body
    #[serde(default)]
    pub token: Option<String>,
}

impl StoredSession {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty() && self.token.is_none()
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StoredSession")
            .field("cookies", &format_args!("[{} REDACTED]", self.cookies.len()))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_session(&self) -> Result<Option<StoredSession>>;
    fn save_session(&self, session: &StoredSession) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
}

/// Session store backed by the OS keyring, one entry per API base URL.
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    service_name: String,
    username: String,
}

impl KeyringSessionStore {
    pub fn for_api(base_url: &str) -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: format!("session:{}", base_url.trim_end_matches('/')),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for KeyringSessionStore {
    fn load_session(&self) -> Result<Option<StoredSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &StoredSession) -> Result<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| Error::SecureStorage(error.to_string()))
    }

    fn clear_session(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(Error::SecureStorage(error.to_string())),
        }
    }
}

/// Process-local session store. Used by tests and when no keyring is available.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<StoredSession>>>,
}

impl SessionPersistence for MemorySessionStore {
    fn load_session(&self) -> Result<Option<StoredSession>> {
        let guard = self
            .slot
            .lock()
            .map_err(|error| Error::SecureStorage(error.to_string()))?;
        Ok(guard.clone())
    }

    fn save_session(&self, session: &StoredSession) -> Result<()> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|error| Error::SecureStorage(error.to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|error| Error::SecureStorage(error.to_string()))?;
        *guard = None;
        Ok(())
    }
}
