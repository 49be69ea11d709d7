//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Initialize a new workspace at the specified path.
pub fn init(path: &Path, resource_type: &str, region: &str) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());

    // Creates .fntag/ and an empty resource store
    workspace.initialize()?;

    let config = Config::new(resource_type, region);
    workspace.save_config(&config)?;

    Ok(config)
}
