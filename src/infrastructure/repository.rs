//! Workspace discovery and layout

use crate::error::{FntagError, Result};
use crate::infrastructure::local::{LocalProvider, STORE_FILE};
use crate::infrastructure::provider::ProviderConfig;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for workspace operations
pub trait WorkspaceRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .fntag/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .fntag/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .fntag directory exists
    fn is_initialized(&self) -> bool;

    /// Create .fntag directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a new workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks FNTAG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FNTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_fntag_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(FntagError::Config(format!(
                    "FNTAG_ROOT is set to '{}' but no .fntag directory found. \
                    Run 'fntag init' in that directory or unset FNTAG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_fntag_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FntagError::NotFntagWorkspace(start.to_path_buf())),
            }
        }
    }

    fn has_fntag_dir(path: &Path) -> bool {
        path.join(".fntag").is_dir()
    }

    /// Path of the resource store file
    pub fn store_path(&self) -> PathBuf {
        self.root.join(".fntag").join(STORE_FILE)
    }

    /// Provider over this workspace's resource store, scoped to `config`
    pub fn provider(&self, config: ProviderConfig) -> LocalProvider {
        LocalProvider::new(self.store_path(), config)
    }
}

impl WorkspaceRepository for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_fntag_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let fntag_dir = self.root.join(".fntag");

        if fntag_dir.exists() {
            return Err(FntagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&fntag_dir)?;
        LocalProvider::create_empty(&self.store_path())?;
        Ok(())
    }
}
