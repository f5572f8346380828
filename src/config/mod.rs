//! Configuration module for mention-scan
//!
//! This module handles:
//! - Per-directory configuration (mention-scan.toml)
//! - Vocabulary and warning-exception overrides per category
//! - CLI defaults

mod scan_config;

pub use scan_config::{
    load_config_file, load_scan_config, CategoryOverride, CliDefaults, ScanConfig,
    CONFIG_FILE_NAME, EXAMPLE_CONFIG,
};
