use std::path::{Path, PathBuf};

use jotpad_core::config::{default_config_path, ClientConfig};

use crate::cli::ConfigCommands;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, api_url_override: Option<String>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            api_url,
            access_token,
        } => {
            let path = config_path()?;
            let config = init_config_at(&path, api_url, access_token)?;
            println!("Wrote {}", path.display());
            println!("API base URL: {}", config.api_base_url()?);
            Ok(())
        }
        ConfigCommands::Show => {
            let config = ClientConfig::load()?.with_overrides(api_url_override, None);
            for line in describe_config(&config, default_config_path().as_deref())? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

/// Merge the given values into the config file at `path` and save it.
///
/// An omitted access token keeps the one already on disk.
pub fn init_config_at(
    path: &Path,
    api_url: String,
    access_token: Option<String>,
) -> Result<ClientConfig, CliError> {
    let existing = ClientConfig::load_from_path(path)?;
    let config = existing.with_overrides(Some(api_url), access_token);
    config.api_base_url()?;
    config.save_to_path(path)?;
    Ok(config)
}

pub fn describe_config(
    config: &ClientConfig,
    path: Option<&Path>,
) -> Result<Vec<String>, CliError> {
    let path_label = path.map_or_else(|| "(unavailable)".to_string(), |path| path.display().to_string());
    let token_label = if config.access_token().is_some() {
        "(set)"
    } else {
        "(not set)"
    };

    Ok(vec![
        format!("Config file: {path_label}"),
        format!("API base URL: {}", config.api_base_url()?),
        format!("Access token: {token_label}"),
    ])
}

fn config_path() -> Result<PathBuf, CliError> {
    default_config_path().ok_or_else(|| {
        CliError::Core(jotpad_core::Error::Config(
            "Failed to resolve config directory".to_string(),
        ))
    })
}
