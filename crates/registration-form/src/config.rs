// File: src/config.rs
// Purpose: Configuration parsing from config/registration.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::{default_entries, CatalogError, CountryCityCatalog, CountryEntry};

/// Shipped configuration, relative to the workspace root
pub const DEFAULT_CONFIG_PATH: &str = "config/registration.toml";

/// Form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSettings,

    /// Country select options and their cities
    #[serde(default = "default_entries")]
    pub countries: Vec<CountryEntry>,
}

/// Presentation settings for the entry view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Internship Form".to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: FormSettings::default(),
            countries: default_entries(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .catalog()
            .with_context(|| format!("Invalid country catalog in {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./config/registration.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Checked catalog built from the `[[countries]]` tables
    pub fn catalog(&self) -> Result<CountryCityCatalog, CatalogError> {
        CountryCityCatalog::new(self.countries.clone())
    }
}
