//! Resource provider collaborators
//!
//! The catalog and the mutator only talk to the provider through these three
//! traits, so the backing client can be swapped without touching them.

use crate::domain::{ResourceSummary, TagSet};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by a resource provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store format error: {0}")]
    Store(String),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Resource type and region a provider instance is scoped to.
///
/// Both are opaque to fntag and fixed for the lifetime of the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub resource_type: String,
    pub region: String,
}

impl ProviderConfig {
    pub fn new(resource_type: impl Into<String>, region: impl Into<String>) -> Self {
        ProviderConfig {
            resource_type: resource_type.into(),
            region: region.into(),
        }
    }
}

impl std::fmt::Display for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.region)
    }
}

/// Lists every resource of the configured type and region
pub trait ResourceLister {
    fn list(&self) -> ProviderResult<Vec<ResourceSummary>>;
}

/// Reads the full tag set of one resource
pub trait TagReader {
    fn read_tags(&self, arn: &str) -> ProviderResult<TagSet>;
}

/// Sets tags on one resource, leaving its other tags untouched
pub trait TagWriter {
    fn write_tags(&self, arn: &str, tags: &BTreeMap<String, String>) -> ProviderResult<()>;
}

impl<T: ResourceLister + ?Sized> ResourceLister for &T {
    fn list(&self) -> ProviderResult<Vec<ResourceSummary>> {
        (**self).list()
    }
}

impl<T: TagReader + ?Sized> TagReader for &T {
    fn read_tags(&self, arn: &str) -> ProviderResult<TagSet> {
        (**self).read_tags(arn)
    }
}

impl<T: TagWriter + ?Sized> TagWriter for &T {
    fn write_tags(&self, arn: &str, tags: &BTreeMap<String, String>) -> ProviderResult<()> {
        (**self).write_tags(arn, tags)
    }
}
