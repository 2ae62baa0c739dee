use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Float(f64),
    Int(i64),
    String(String),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(v) => Some(v),
            _ => None,
        }
    }
}

/// Per-section settings, keyed by analyzer or output id.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analyzers: HashMap<String, HashMap<String, ConfigValue>>,
    #[serde(default)]
    pub outputs: HashMap<String, HashMap<String, ConfigValue>>,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pdf_color_pages").join("config.toml"))
    }

    /// Loads the default config file, falling back to defaults when it is
    /// absent or broken.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Loads an explicitly requested config file. Unlike [`Config::load`],
    /// failures are reported.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("Could not read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn get_analyzer_value(&self, analyzer_id: &str, key: &str) -> Option<&ConfigValue> {
        self.analyzers.get(analyzer_id)?.get(key)
    }

    pub fn get_output_value(&self, output_id: &str, key: &str) -> Option<&ConfigValue> {
        self.outputs.get(output_id)?.get(key)
    }
}
