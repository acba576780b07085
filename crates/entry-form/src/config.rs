// File: src/config.rs
// Purpose: Configuration parsing from entry-form.toml

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use entry_form_core::{CharsetError, LegacyCharset};
use serde::{Deserialize, Serialize};

use crate::variant::{BirthDateRule, ValidatorConfig, Variant};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validator: ValidatorSection,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub charset: CharsetConfig,
}

/// Variant preset plus optional per-rule overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidatorSection {
    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub birth_date: Option<BirthDateRule>,

    #[serde(default)]
    pub address_consistency: Option<bool>,

    #[serde(default)]
    pub email_duplicate: Option<bool>,
}

/// Reference store connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CharsetConfig {
    /// Legacy ideograph list; the bundled list is used when unset
    #[serde(default)]
    pub legacy_path: Option<PathBuf>,
}

fn default_database_url() -> String {
    "sqlite:entry-form.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl ValidatorSection {
    pub fn validator_config(&self) -> ValidatorConfig {
        let preset = ValidatorConfig::for_variant(self.variant);
        ValidatorConfig {
            birth_date: self.birth_date.unwrap_or(preset.birth_date),
            address_consistency: self.address_consistency.unwrap_or(preset.address_consistency),
            email_duplicate: self.email_duplicate.unwrap_or(preset.email_duplicate),
            // follows the page, not an override
            exclude_own_record: preset.exclude_own_record,
        }
    }
}

impl CharsetConfig {
    /// Load the configured list, or share the bundled one
    pub fn load(&self) -> std::result::Result<Arc<LegacyCharset>, CharsetError> {
        match &self.legacy_path {
            Some(path) => Ok(Arc::new(LegacyCharset::load(path)?)),
            None => Ok(Arc::new(LegacyCharset::bundled().clone())),
        }
    }
}

impl Config {
    /// Load configuration from entry-form.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file: presets for the registration form
        if !path.exists() {
            tracing::debug!(?path, "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(?path, variant = ?config.validator.variant, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from default path (./entry-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("entry-form.toml")
    }

    pub fn validator_config(&self) -> ValidatorConfig {
        self.validator.validator_config()
    }
}
