//! Client configuration shared by the desktop app and the CLI.
//!
//! Values come from `<config_dir>/jotpad/config.json`, then environment
//! overrides (`JOTPAD_API_URL`, `JOTPAD_ACCESS_TOKEN`), then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "config.json";

/// Base URL used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

pub const API_URL_ENV: &str = "JOTPAD_API_URL";
pub const ACCESS_TOKEN_ENV: &str = "JOTPAD_ACCESS_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// `<config_dir>/jotpad/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jotpad").join(CONFIG_FILE_NAME))
}

/// Normalize optional text by trimming whitespace and removing empties.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("https://") || value.starts_with("http://")
}

impl ClientConfig {
    /// Loads the config file (if any) and applies environment overrides.
    pub fn load() -> Result<Self> {
        let config = match default_config_path() {
            Some(path) => Self::load_from_path(&path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(ACCESS_TOKEN_ENV).ok(),
        ))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                error
            ))
        })?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = default_config_path()
            .ok_or_else(|| Error::Config("Failed to resolve config directory".to_string()))?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Non-empty override values win over values from the file.
    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, access_token: Option<String>) -> Self {
        if let Some(url) = normalize_text_option(api_url) {
            self.api_base_url = Some(url);
        }
        if let Some(token) = normalize_text_option(access_token) {
            self.access_token = Some(token);
        }
        self
    }

    /// Configured base URL or [`DEFAULT_API_BASE_URL`], validated.
    pub fn api_base_url(&self) -> Result<String> {
        let url = normalize_text_option(self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if !is_http_url(&url) {
            return Err(Error::Config(format!(
                "API base URL must include http:// or https:// (got '{url}')"
            )));
        }
        Ok(url.trim_end_matches('/').to_string())
    }

    pub fn access_token(&self) -> Option<String> {
        normalize_text_option(self.access_token.clone())
    }

    fn normalize(&mut self) {
        self.api_base_url = normalize_text_option(self.api_base_url.take())
            .map(|url| url.trim_end_matches('/').to_string());
        self.access_token = normalize_text_option(self.access_token.take());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn api_base_url_defaults_when_unset() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url().unwrap(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn api_base_url_rejects_missing_scheme() {
        let config = ClientConfig {
            api_base_url: Some("notes.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.api_base_url(), Err(Error::Config(_))));
    }

    #[test]
    fn overrides_replace_file_values_but_ignore_blanks() {
        let config = ClientConfig {
            api_base_url: Some("https://file.example.com".to_string()),
            access_token: Some("file-token".to_string()),
        }
        .with_overrides(Some(" https://env.example.com/ ".to_string()), Some("  ".to_string()));

        assert_eq!(config.api_base_url().unwrap(), "https://env.example.com");
        assert_eq!(config.access_token().as_deref(), Some("file-token"));
    }

    #[test]
    fn save_and_load_round_trip_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = ClientConfig {
            api_base_url: Some(" https://notes.example.com/api/ ".to_string()),
            access_token: Some(String::new()),
        };

        config.save_to_path(&path).unwrap();
        let loaded = ClientConfig::load_from_path(&path).unwrap();

        assert_eq!(
            loaded,
            ClientConfig {
                api_base_url: Some("https://notes.example.com/api".to_string()),
                access_token: None,
            }
        );
    }

    #[test]
    fn load_from_missing_path_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ClientConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, ClientConfig::default());
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"api_base_url":"https://a.example.com","extra":1}"#).unwrap();

        let error = ClientConfig::load_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }
}
