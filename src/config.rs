//! Configuration file support for compose-port-finder.
//!
//! Provides YAML-based configuration through `compose-port-finder.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "compose-port-finder.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub services: Option<Vec<String>>,
    pub depth: Option<String>,
    pub start: Option<StartValue>,
    /// Directory names excluded in addition to the built-in list
    pub exclude_dirs: Option<Vec<String>>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `start` may be written as a number or a string; both are validated later
/// exactly like the `--start` option.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum StartValue {
    Number(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for StartValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartValue::Number(n) => write!(f, "{}", n),
            StartValue::Float(n) => write!(f, "{}", n),
            StartValue::Text(s) => write!(f, "{}", s),
        }
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

    // An empty file deserializes to nothing at all
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

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref services) = config.services {
        for (i, service) in services.iter().enumerate() {
            if service.trim().is_empty() {
                bail!(
                    "Invalid config: services[{}] must not be empty.\n\n\
                     💡 Hint: List compose service names, e.g. \"db\" or \"mysql\".",
                    i
                );
            }
        }
    }

    if let Some(ref dirs) = config.exclude_dirs {
        for (i, dir) in dirs.iter().enumerate() {
            if dir.trim().trim_matches('/').is_empty() {
                bail!(
                    "Invalid config: exclude_dirs[{}] must not be empty.\n\n\
                     💡 Hint: Each exclude_dirs entry is a directory name such as \"legacy\".",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Names of fields the config file does not understand, sorted for stable output.
pub fn unknown_field_names(config: &ConfigFile) -> Vec<&str> {
    let mut names: Vec<&str> = config.unknown_fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
