//! Core error types for masterymap-core.
//!
//! Merge outcomes are plain values (see [`crate::merge::MergeOutcome`]);
//! the types here cover the infrastructure paths: loading configuration,
//! parsing catalog documents and validating identifiers at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for masterymap-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Catalog-specific errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog document
    #[error("Failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog document is not valid TOML or has the wrong shape
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Entry is structurally invalid
    #[error("Invalid catalog entry '{entry}': {message}")]
    InvalidEntry { entry: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home/config directory could not be determined
    #[error("Failed to access config directory: {0}")]
    DataDir(String),
}

/// Validation errors for identifiers coming from outside the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Grade string could not be parsed or is outside 1..=12
    #[error("Unknown grade: '{0}'")]
    UnknownGrade(String),

    /// Subject string does not name a curriculum subject
    #[error("Unknown subject: '{0}'")]
    UnknownSubject(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
