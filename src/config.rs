//! Configuration file support for package-finder.
//!
//! Provides YAML-based configuration through `package-finder.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line overrides.

use anyhow::Context;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{NuGetRegistryClient, OssIndexClient, DEFAULT_TIMEOUT_SECS};
use crate::package_lookup::services::ReportLayout;
use crate::shared::error::PackageFinderError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "package-finder.config.yml";

/// Config files are small; anything larger is rejected before parsing.
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Top-level configuration file schema.
///
/// Every field is optional; values given on the command line take
/// precedence over the file, and the file over built-in defaults.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub advisory_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub extended: Option<bool>,
    pub fail_on_vulnerabilities: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Warning messages for fields that will be ignored, sorted by key.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document parses as null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(url) = &config.registry_url {
        validate_base_url("registry_url", url)?;
    }
    if let Some(url) = &config.advisory_url {
        validate_base_url("advisory_url", url)?;
    }
    if config.timeout_secs == Some(0) {
        return Err(PackageFinderError::InvalidConfig {
            message: "timeout_secs must be greater than 0".to_string(),
            hint: "Set timeout_secs to the number of seconds to wait for each request (e.g., 30)"
                .to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
        .unwrap_or(false);

    if !valid {
        return Err(PackageFinderError::InvalidConfig {
            message: format!("{} '{}' is not a valid http(s) URL", field, value),
            hint: format!(
                "Set {} to an absolute URL such as \"https://example.org/api\"",
                field
            ),
        }
        .into());
    }
    Ok(())
}

/// Effective settings of one run after merging all sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub registry_url: String,
    pub advisory_url: String,
    pub timeout: Duration,
    pub layout: ReportLayout,
    pub fail_on_vulnerabilities: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_url: NuGetRegistryClient::DEFAULT_REGISTRY_URL.to_string(),
            advisory_url: OssIndexClient::DEFAULT_ADVISORY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            layout: ReportLayout::Standard,
            fail_on_vulnerabilities: false,
        }
    }
}

impl Settings {
    /// Merges command-line overrides and the config file over the defaults.
    ///
    /// `overrides` uses the config file schema; `None` means "not given".
    pub fn merge(overrides: ConfigFile, file: Option<ConfigFile>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let extended = overrides.extended.or(file.extended).unwrap_or(false);

        Self {
            registry_url: overrides
                .registry_url
                .or(file.registry_url)
                .unwrap_or(defaults.registry_url),
            advisory_url: overrides
                .advisory_url
                .or(file.advisory_url)
                .unwrap_or(defaults.advisory_url),
            timeout: overrides
                .timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            layout: if extended {
                ReportLayout::Extended
            } else {
                ReportLayout::Standard
            },
            fail_on_vulnerabilities: overrides
                .fail_on_vulnerabilities
                .or(file.fail_on_vulnerabilities)
                .unwrap_or(defaults.fail_on_vulnerabilities),
        }
    }
}
