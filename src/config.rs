// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings are read from an optional YAML file. The file location comes
//! from `CAMVAL_CONFIG`, falling back to `camval.yaml` in the working
//! directory. `CAMVAL_API_URL` overrides the configured API base URL.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CAMVAL_CONFIG";
pub const API_URL_ENV: &str = "CAMVAL_API_URL";
const DEFAULT_CONFIG_FILE: &str = "camval.yaml";

/// Runtime settings for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Base URL of the validation API, without trailing slash.
    pub api_base_url: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    /// Optional YAML/JSON file used to seed the project list.
    pub projects_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            connect_timeout_secs: 5,
            read_timeout_secs: 15,
            projects_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment-selected file.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = Self::from_file(&path)?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_base_url = url;
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
