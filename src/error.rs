//! Error types for configuration and option parsing
//!
//! Scanning itself never fails on document content; only loading settings can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or interpreting configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown category '{0}'. Valid categories: city, town, country, speaker-mentioned, article, percent, date, stat")]
    UnknownCategory(String),

    #[error("Category '{0}' is configured more than once")]
    DuplicateCategory(String),

    #[error("Unknown severity '{0}'. Valid severities: info, warning, error")]
    InvalidSeverity(String),

    #[error("Unknown format '{0}'. Valid formats: text, json, html")]
    InvalidFormat(String),
}
