//! Application layer - Use cases and orchestration

pub mod apply_tags;
pub mod catalog;
pub mod init;
pub mod inventory;
pub mod manage_config;

#[cfg(test)]
mod testing;

pub use apply_tags::TagMutator;
pub use catalog::{CatalogEntry, ResourceCatalog};
pub use inventory::TagAggregator;
pub use manage_config::ConfigService;
