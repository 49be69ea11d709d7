//! Configuration management

use crate::error::{FntagError, Result};
use crate::infrastructure::provider::ProviderConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_RESOURCE_TYPE: &str = "lambda";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub resource_type: String,
    pub region: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config for the given resource type and region
    pub fn new(resource_type: impl Into<String>, region: impl Into<String>) -> Self {
        Config {
            resource_type: resource_type.into(),
            region: region.into(),
            created: Utc::now(),
        }
    }

    /// Load config from .fntag/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".fntag").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FntagError::NotFntagWorkspace(path.to_path_buf())
            } else {
                FntagError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| FntagError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .fntag/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let fntag_dir = path.join(".fntag");
        let config_path = fntag_dir.join("config.toml");

        if !fntag_dir.exists() {
            fs::create_dir(&fntag_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| FntagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the region, checking FNTAG_REGION first
    pub fn get_region(&self) -> String {
        non_empty_env("FNTAG_REGION").unwrap_or_else(|| self.region.clone())
    }

    /// Get the resource type, checking FNTAG_RESOURCE_TYPE first
    pub fn get_resource_type(&self) -> String {
        non_empty_env("FNTAG_RESOURCE_TYPE").unwrap_or_else(|| self.resource_type.clone())
    }

    /// Provider scope for this config, with one-call overrides applied on top
    /// of the environment.
    pub fn provider_config(
        &self,
        resource_type: Option<&str>,
        region: Option<&str>,
    ) -> ProviderConfig {
        ProviderConfig::new(
            resource_type
                .map(str::to_string)
                .unwrap_or_else(|| self.get_resource_type()),
            region
                .map(str::to_string)
                .unwrap_or_else(|| self.get_region()),
        )
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
