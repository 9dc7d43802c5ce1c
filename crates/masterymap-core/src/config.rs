//! TOML-based engine configuration.
//!
//! Stores:
//! - Decay mode and the default decay rate for new records
//! - Where the curriculum catalog comes from
//! - Default log level for front-ends
//!
//! Configuration lives at `~/.config/masterymap/config.toml` unless a path
//! is given explicitly. A missing file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::KnowledgeCatalog;
use crate::decay::DecayConfig;
use crate::error::{CatalogError, ConfigError};

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Start from the bundled Grade 1-12 curriculum.
    #[serde(default = "default_true")]
    pub use_builtin: bool,
    /// Additional catalog document (`[[entries]]` tables) loaded after the builtin one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub decay: DecayConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Returns `~/.config/masterymap[-dev]/` based on MASTERYMAP_ENV.
///
/// Set MASTERYMAP_ENV=dev to use the development directory. The directory
/// is not created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .ok_or_else(|| ConfigError::DataDir("home directory not found".into()))?
        .join(".config");

    let env = std::env::var("MASTERYMAP_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("masterymap-dev")
    } else {
        base_dir.join("masterymap")
    })
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
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

            if parts.peek().is_some() {
                current = obj
                    .get_mut(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                continue;
            }

            let existing = obj
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => value
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("only leaf values can be set".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    /// Default config file location.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or return defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, or return defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if it holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };

        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.decay.default_rate_per_day;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "decay.default_rate_per_day".into(),
                message: format!("{rate} must be a finite value >= 0"),
            });
        }
        Ok(())
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

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse
    /// or fails validation; `self` is left unchanged in that case.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Build the catalog described by `[catalog]`.
    pub fn build_catalog(&self) -> Result<KnowledgeCatalog, CatalogError> {
        let mut catalog = if self.catalog.use_builtin {
            KnowledgeCatalog::builtin()
        } else {
            KnowledgeCatalog::new()
        };

        if let Some(path) = &self.catalog.path {
            let extra = KnowledgeCatalog::from_path(path)?;
            let added = catalog.load(extra.entries().iter().cloned())?;
            tracing::info!(path = %path.display(), added, "loaded catalog file");
        }
        Ok(catalog)
    }
}
