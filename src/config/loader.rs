//! Configuration Loader
//!
//! Collects credentials and client options from a JSON file and environment
//! variables. Later sources override earlier ones.

use crate::client::Query;
use crate::config::options::{ClientOptions, Credentials};
use crate::error::{Result, XecdError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ACCOUNT_ID_ENV: &str = "XECD_ACCOUNT_ID";
pub const API_KEY_ENV: &str = "XECD_API_KEY";
pub const BASE_URL_ENV: &str = "XECD_BASE_URL";
pub const CONFIG_PATH_ENV: &str = "XECD_CONFIG_PATH";

/// On-disk configuration, every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Query sent by endpoints without their own parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_query: Option<Query>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Configuration loader with support for multiple sources
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config: ConfigFile,
}

impl ConfigLoader {
    /// Load from the first config file found in the default locations, then
    /// apply environment overrides
    pub fn new() -> Result<Self> {
        let mut loader = Self::default();

        if let Some(path) = Self::get_config_paths().into_iter().find(|p| p.exists()) {
            loader.load_from_file(&path)?;
        }
        loader.apply_env();

        Ok(loader)
    }

    /// Load a specific config file, then apply environment overrides
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut loader = Self::default();
        loader.load_from_file(path)?;
        loader.apply_env();
        Ok(loader)
    }

    /// Get list of config paths to check, in priority order
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(custom_path) = std::env::var(CONFIG_PATH_ENV) {
            paths.push(PathBuf::from(custom_path));
        }

        paths.push(PathBuf::from("xecd.json"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("xecd").join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".xecd").join("config.json"));
        }

        paths
    }

    fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            XecdError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: ConfigFile = serde_json::from_str(&content).map_err(|e| {
            XecdError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        self.merge_config(config);
        Ok(())
    }

    fn apply_env(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production). Empty values are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        self.merge_config(ConfigFile {
            account_id: get(ACCOUNT_ID_ENV),
            api_key: get(API_KEY_ENV),
            base_url: get(BASE_URL_ENV),
            ..Default::default()
        });
    }

    /// Merge another config into this one, field by field
    pub fn merge_config(&mut self, other: ConfigFile) {
        let config = &mut self.config;
        if other.account_id.is_some() {
            config.account_id = other.account_id;
        }
        if other.api_key.is_some() {
            config.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            config.base_url = other.base_url;
        }
        if other.default_query.is_some() {
            config.default_query = other.default_query;
        }
        if other.timeout_secs.is_some() {
            config.timeout_secs = other.timeout_secs;
        }
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Split into the credentials and options a client is built from
    pub fn into_parts(self) -> Result<(Credentials, ClientOptions)> {
        let ConfigFile {
            account_id,
            api_key,
            base_url,
            default_query,
            timeout_secs,
        } = self.config;

        let account_id = account_id.ok_or_else(|| {
            XecdError::Config(format!(
                "No account id configured. Set {} or add account_id to xecd.json",
                ACCOUNT_ID_ENV
            ))
        })?;
        let api_key = api_key.ok_or_else(|| {
            XecdError::Config(format!(
                "No api key configured. Set {} or add api_key to xecd.json",
                API_KEY_ENV
            ))
        })?;

        let options = ClientOptions {
            credentials: None,
            base_url,
            default_query,
            timeout: timeout_secs.map(Duration::from_secs),
        };

        Ok((Credentials::new(account_id, api_key), options))
    }
}
