//! TOML-based application configuration.
//!
//! Stores tunables that the reference app hardcoded:
//! - Seal milestone target
//! - Simulated load delay and seed record
//! - Mock wallet key
//! - Log filter
//!
//! Configuration is stored at `~/.config/tiltreset/config.toml`.
//! User state is never written here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::data_dir;
use crate::error::ConfigError;
use crate::streak::SeedValues;
use crate::wallet::MOCK_PUBLIC_KEY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Consecutive days needed for the seal milestone.
    #[serde(default = "default_seal_target_days")]
    pub seal_target_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_seed_delay_ms")]
    pub seed_delay_ms: u64,
}

/// Values handed out by the simulated fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_current")]
    pub current_streak: u32,
    #[serde(default = "default_seed_longest")]
    pub longest_streak: u32,
    #[serde(default = "default_seed_total")]
    pub total_days: u32,
    #[serde(default = "default_seed_nfts")]
    pub nfts_minted: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_mock_public_key")]
    pub mock_public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by RUST_LOG.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tiltreset/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub streak: StreakConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// Default functions
fn default_seal_target_days() -> u32 {
    30
}
fn default_seed_delay_ms() -> u64 {
    1000
}
fn default_seed_current() -> u32 {
    SeedValues::default().current_streak
}
fn default_seed_longest() -> u32 {
    SeedValues::default().longest_streak
}
fn default_seed_total() -> u32 {
    SeedValues::default().total_days
}
fn default_seed_nfts() -> u32 {
    SeedValues::default().nfts_minted
}
fn default_mock_public_key() -> String {
    MOCK_PUBLIC_KEY.into()
}
fn default_log_filter() -> String {
    "warn".into()
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            seal_target_days: default_seal_target_days(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            seed_delay_ms: default_seed_delay_ms(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            current_streak: default_seed_current(),
            longest_streak: default_seed_longest(),
            total_days: default_seed_total(),
            nfts_minted: default_seed_nfts(),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            mock_public_key: default_mock_public_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Update a value in memory by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse
    /// as the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    pub fn seed_values(&self) -> SeedValues {
        SeedValues {
            current_streak: self.seed.current_streak,
            longest_streak: self.seed.longest_streak,
            total_days: self.seed.total_days,
            nfts_minted: self.seed.nfts_minted,
        }
    }

    pub fn seed_delay(&self) -> Duration {
        Duration::from_millis(self.loader.seed_delay_ms)
    }
}
