//! Configuration loading for the Polished client.
//!
//! Resolution order, lowest to highest precedence:
//! defaults -> `~/.polished/config.toml` -> `POLISHED_BASE_URL` env ->
//! `--base-url` flag (applied by the CLI after loading).

use std::path::{Path, PathBuf};

use tracing::debug;

use polished_types::config::ClientConfig;
use polished_types::error::ConfigError;

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "POLISHED_BASE_URL";

/// Resolve the client's data directory (`~/.polished`).
///
/// Falls back to `.polished` in the working directory when the home
/// directory cannot be determined.
pub fn resolve_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".polished"))
        .unwrap_or_else(|| PathBuf::from(".polished"))
}

/// Load configuration from the given data directory plus the environment.
///
/// A missing config file is not an error; an unreadable or invalid one is.
pub fn load_config(data_dir: &Path) -> Result<ClientConfig, ConfigError> {
    let path = data_dir.join("config.toml");
    let mut config = if path.exists() {
        let raw =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::Read(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?
    } else {
        debug!(path = %path.display(), "no config file, using defaults");
        ClientConfig::default()
    };

    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        if !base_url.is_empty() {
            config.base_url = base_url;
        }
    }

    Ok(config)
}
