mod config;

pub use config::{Config, LoaderConfig, LoggingConfig, SeedConfig, StreakConfig, WalletConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/tiltreset[-dev]/` based on TILTRESET_ENV.
///
/// Set TILTRESET_ENV=dev to use the development directory, or
/// TILTRESET_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("TILTRESET_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("TILTRESET_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("tiltreset-dev")
            } else {
                base_dir.join("tiltreset")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
