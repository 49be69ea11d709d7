//! Config management use case

use crate::error::{FntagError, Result};
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "resource_type" => Ok(config.resource_type.clone()),
            "region" => Ok(config.region.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(FntagError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: resource_type, region, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;
        let value = value.trim();

        match key {
            "resource_type" | "region" if value.is_empty() => {
                return Err(FntagError::Config(format!("'{}' cannot be empty", key)));
            }
            "resource_type" => config.resource_type = value.to_string(),
            "region" => config.region = value.to_string(),
            "created" => {
                return Err(FntagError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(FntagError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: resource_type, region",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
