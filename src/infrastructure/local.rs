//! File-backed resource provider
//!
//! Resources live in `.fntag/resources.toml` as `[[resource]]` tables. Every
//! call re-reads the file, and writes replace it through a temp file.

use crate::domain::{ResourceSummary, TagSet};
use crate::infrastructure::provider::{
    ProviderConfig, ProviderError, ProviderResult, ResourceLister, TagReader, TagWriter,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// File name of the resource store inside `.fntag/`
pub const STORE_FILE: &str = "resources.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceStore {
    #[serde(default, rename = "resource")]
    pub resources: Vec<StoredResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResource {
    pub id: String,
    pub arn: String,
    pub name: String,
    pub resource_type: String,
    pub region: String,
    /// Makes tag reads of this resource fail with the given reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_error: Option<String>,
    #[serde(default)]
    pub tags: TagSet,
}

/// Provider reading and writing a workspace resource store
#[derive(Debug, Clone)]
pub struct LocalProvider {
    path: PathBuf,
    config: ProviderConfig,
}

impl LocalProvider {
    pub fn new(path: PathBuf, config: ProviderConfig) -> Self {
        LocalProvider { path, config }
    }

    /// Write an empty store at `path`.
    pub fn create_empty(path: &Path) -> ProviderResult<()> {
        write_store(path, &ResourceStore::default())
    }

    fn load_store(&self) -> ProviderResult<ResourceStore> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProviderError::Unavailable(format!(
                    "resource store not found: {}",
                    self.path.display()
                ))
            } else {
                ProviderError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            ProviderError::Store(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn in_scope(&self, resource: &StoredResource) -> bool {
        resource.resource_type == self.config.resource_type && resource.region == self.config.region
    }
}

impl ResourceLister for LocalProvider {
    fn list(&self) -> ProviderResult<Vec<ResourceSummary>> {
        let store = self.load_store()?;
        Ok(store
            .resources
            .iter()
            .filter(|r| self.in_scope(r))
            .map(|r| ResourceSummary::new(r.id.clone(), r.arn.clone(), r.name.clone()))
            .collect())
    }
}

impl TagReader for LocalProvider {
    fn read_tags(&self, arn: &str) -> ProviderResult<TagSet> {
        let store = self.load_store()?;
        let resource = store
            .resources
            .into_iter()
            .find(|r| r.arn == arn && self.in_scope(r))
            .ok_or_else(|| ProviderError::ResourceNotFound(arn.to_string()))?;

        match resource.tag_error {
            Some(reason) => Err(ProviderError::Request(reason)),
            None => Ok(resource.tags),
        }
    }
}

impl TagWriter for LocalProvider {
    fn write_tags(&self, arn: &str, tags: &BTreeMap<String, String>) -> ProviderResult<()> {
        let mut store = self.load_store()?;
        let resource = store
            .resources
            .iter_mut()
            .find(|r| r.arn == arn && self.in_scope(r))
            .ok_or_else(|| ProviderError::ResourceNotFound(arn.to_string()))?;

        resource.tags.merge(tags);
        debug!(arn, count = tags.len(), "writing tags to resource store");
        write_store(&self.path, &store)
    }
}

/// Replace the store through a temp file in the same directory.
///
/// Readers see either the old store or the new one, never a missing file.
fn write_store(path: &Path, store: &ResourceStore) -> ProviderResult<()> {
    static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

    let contents = toml::to_string_pretty(store)
        .map_err(|e| ProviderError::Store(format!("Failed to serialize store: {}", e)))?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.fntag-tmp-{}-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(STORE_FILE),
        std::process::id(),
        TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}
