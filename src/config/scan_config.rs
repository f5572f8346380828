//! Scan configuration support
//!
//! Loads per-directory configuration from `mention-scan.toml`.
//!
//! # Configuration Format
//!
//! ```toml
//! # mention-scan.toml
//!
//! [categories.city]
//! enabled = true
//! terms = ["armagh", "belfast", "derry"]
//! warning_exceptions = ["belfast"]
//!
//! [categories.percent]
//! warning_exceptions = ["50"]
//!
//! [defaults]
//! format = "text"
//! workers = 4
//! min_severity = "info"
//! ```

use crate::category::{Category, CategoryVocabulary};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up by `load_scan_config`
pub const CONFIG_FILE_NAME: &str = "mention-scan.toml";

/// Scan configuration loaded from mention-scan.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScanConfig {
    /// Per-category overrides, keyed by category tag
    #[serde(default)]
    pub categories: HashMap<String, CategoryOverride>,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Categories selected on the command line (not serialized)
    #[serde(skip)]
    only: Option<Vec<Category>>,
}

/// Configuration override for one category
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CategoryOverride {
    /// Whether the category is scanned (default: true)
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Replacement term list (vocabulary categories only)
    #[serde(default)]
    pub terms: Option<Vec<String>>,

    /// Terms or values whose occurrences are reported as warnings
    #[serde(default)]
    pub warning_exceptions: Option<Vec<String>>,
}

/// Default CLI flags that can be set in the config file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, html)
    #[serde(default)]
    pub format: Option<String>,

    /// Default number of workers
    #[serde(default)]
    pub workers: Option<usize>,

    /// Default minimum severity filter
    #[serde(default)]
    pub min_severity: Option<String>,
}

impl ScanConfig {
    /// Parse configuration from TOML text and validate category keys
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: ScanConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (key, category_override) in &self.categories {
            let category: Category = key.parse()?;
            if !seen.insert(category) {
                return Err(ConfigError::DuplicateCategory(category.to_string()));
            }
            if category.is_statistic() && category_override.terms.is_some() {
                warn!(
                    "Ignoring `terms` for statistic category '{}': values come from the classifier",
                    category
                );
            }
        }
        if let Some(severity) = &self.defaults.min_severity {
            severity.parse::<crate::models::Severity>()?;
        }
        if let Some(format) = &self.defaults.format {
            format.parse::<crate::reporters::OutputFormat>()?;
        }
        Ok(())
    }

    fn override_for(&self, category: Category) -> Option<&CategoryOverride> {
        self.categories
            .iter()
            .find(|(key, _)| key.parse::<Category>().ok() == Some(category))
            .map(|(_, o)| o)
    }

    /// Whether the category should be scanned
    pub fn is_enabled(&self, category: Category) -> bool {
        if let Some(only) = &self.only {
            if !only.contains(&category) {
                return false;
            }
        }
        self.override_for(category)
            .and_then(|o| o.enabled)
            .unwrap_or(true)
    }

    /// Limit scanning to the given categories (command-line `--only`)
    pub fn restrict_to(&mut self, categories: &[Category]) {
        self.only = Some(categories.to_vec());
    }

    /// Effective vocabulary: the override where present, built-ins otherwise
    pub fn vocabulary(&self, category: Category) -> CategoryVocabulary {
        let over = self.override_for(category);

        let exceptions: Vec<String> = over
            .and_then(|o| o.warning_exceptions.clone())
            .unwrap_or_else(|| {
                category
                    .builtin_warning_exceptions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        if category.is_statistic() {
            return CategoryVocabulary::new(category, Vec::<String>::new(), exceptions);
        }

        match over.and_then(|o| o.terms.clone()) {
            Some(terms) => CategoryVocabulary::new(category, terms, exceptions),
            None => CategoryVocabulary::new(category, category.builtin_terms(), exceptions),
        }
    }

    /// Categories that will be scanned, in report order
    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

/// Load scan configuration from `dir/mention-scan.toml`.
///
/// Returns default configuration if the file is missing or invalid.
pub fn load_scan_config(dir: &Path) -> ScanConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No config found in {}, using defaults", dir.display());
        return ScanConfig::default();
    }
    match load_config_file(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("{}", e);
            ScanConfig::default()
        }
    }
}

/// Load configuration from an explicit path; any problem is an error
pub fn load_config_file(path: &Path) -> Result<ScanConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: PathBuf::from(path),
        source,
    })?;
    ScanConfig::from_toml_str(&content, path)
}

/// Example configuration written by `mention-scan init`
pub const EXAMPLE_CONFIG: &str = r#"# mention-scan configuration
#
# Every category is scanned by default. Category keys:
#   city, town, country, speaker-mentioned   (term lists)
#   article, percent, date, stat             (numbers classified by context)

[categories.city]
# Occurrences of these terms are reported as warnings instead of info
warning_exceptions = ["belfast"]
# Replace the built-in list:
# terms = ["armagh", "belfast", "derry", "lisburn", "newry"]

[categories.town]
# enabled = false

[categories.speaker-mentioned]
# terms = ["mr speaker", "madam speaker", "deputy speaker"]

[categories.percent]
# warning_exceptions = ["50"]

[defaults]
# Output format (text, json, html)
format = "text"
# Minimum severity to report (info, warning, error)
min_severity = "info"
# Worker threads (0 = one per core)
workers = 0
"#;
