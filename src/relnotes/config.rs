use crate::error::{RelnotesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".relnotes";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";
const DEFAULT_FALLBACK: &str = "No notable changes.";

/// Project defaults, stored in .relnotes/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelnotesConfig {
    /// Changelog used when `--changelog` is not given
    #[serde(default = "default_changelog")]
    pub changelog: String,

    /// Text used by `merge` when both note sources are empty
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_changelog() -> String {
    DEFAULT_CHANGELOG.to_string()
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

impl Default for RelnotesConfig {
    fn default() -> Self {
        Self {
            changelog: default_changelog(),
            fallback: default_fallback(),
        }
    }
}

impl RelnotesConfig {
    pub const KEYS: &'static [&'static str] = &["changelog", "fallback"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RelnotesConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "changelog" => Some(self.changelog.clone()),
            "fallback" => Some(self.fallback.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RelnotesError::InvalidInput(format!(
                "{} cannot be empty",
                key
            )));
        }
        match key {
            "changelog" => self.changelog = value.to_string(),
            "fallback" => self.fallback = value.to_string(),
            _ => {
                return Err(RelnotesError::InvalidInput(format!(
                    "Unknown config key: {} (expected one of: {})",
                    key,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
