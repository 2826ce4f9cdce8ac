//! Configuration file support for license-fulfill.
//!
//! Provides YAML-based configuration through `license-fulfill.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::fulfillment::domain::{PackageIdentity, PackageOverride};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-fulfill.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub start_path: Option<StartPaths>,
    pub production: Option<bool>,
    pub unknown: Option<String>,
    pub custom_format: Option<IndexMap<String, serde_json::Value>>,
    /// Keyed by `"<name>@<version>"`; entry fields use camelCase.
    pub overrides: Option<IndexMap<String, PackageOverride>>,
    pub agreed_licenses: Option<Vec<String>>,
    pub acceptable_license_files: Option<Vec<String>>,
    pub ignore_packages: Option<Vec<String>>,
    /// License texts that replace or extend the bundled SPDX texts.
    pub license_texts: Option<IndexMap<String, String>>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `start_path` accepts a single path or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StartPaths {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl StartPaths {
    pub fn into_vec(self) -> Vec<PathBuf> {
        match self {
            StartPaths::One(path) => vec![path],
            StartPaths::Many(paths) => paths,
        }
    }
}

impl ConfigFile {
    /// The configured output format, if any.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| OutputFormat::from_str(format).map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

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
    if let Some(ref format) = config.format {
        if OutputFormat::from_str(format).is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use \"json\" or \"markdown\".",
                format
            );
        }
    }

    if let Some(ref agreed_licenses) = config.agreed_licenses {
        for (i, license) in agreed_licenses.iter().enumerate() {
            if license.trim().is_empty() {
                bail!(
                    "Invalid config: agreed_licenses[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be an SPDX expression (e.g., \"MIT\" or \"Apache-2.0\").",
                    i
                );
            }
        }
    }

    if let Some(ref overrides) = config.overrides {
        for identity in overrides.keys() {
            PackageIdentity::parse(identity)
                .with_context(|| format!("Invalid config: overrides key '{}'", identity))?;
        }
    }

    if let Some(ref license_texts) = config.license_texts {
        if license_texts.keys().any(|id| id.trim().is_empty()) {
            bail!(
                "Invalid config: license_texts keys must not be empty.\n\n\
                 💡 Hint: Key each text by its SPDX identifier (e.g., \"MIT\")."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
