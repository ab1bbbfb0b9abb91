// File: src/config.rs
// Purpose: Breadcrumb configuration parsing from breadcrumb.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Breadcrumb configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BreadcrumbConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub labels: LabelConfig,
}

/// Which host routes become breadcrumb candidates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// HTTP method a route must allow (default: "GET")
    #[serde(default = "default_method")]
    pub method: String,

    /// Route ids starting with any of these are skipped (default: ["static"])
    #[serde(default = "default_excluded_prefixes")]
    pub excluded_prefixes: Vec<String>,
}

/// Label generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelConfig {
    /// Label of "/" when no route registers it (default: "Home")
    #[serde(default = "default_root_label")]
    pub root_label: String,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_excluded_prefixes() -> Vec<String> {
    vec!["static".to_string()]
}

fn default_root_label() -> String {
    "Home".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            excluded_prefixes: default_excluded_prefixes(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
        }
    }
}

impl BreadcrumbConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: BreadcrumbConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./breadcrumb.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("breadcrumb.toml")
    }
}
