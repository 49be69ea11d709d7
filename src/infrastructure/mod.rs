//! Infrastructure layer - Provider access and workspace persistence

pub mod config;
pub mod local;
pub mod provider;
pub mod repository;

pub use config::Config;
pub use local::LocalProvider;
pub use provider::{ProviderConfig, ProviderError, ResourceLister, TagReader, TagWriter};
pub use repository::{FileSystemWorkspace, WorkspaceRepository};
