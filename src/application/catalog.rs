//! Resource catalog and filtered listing

use crate::domain::{evaluate, FilterOutcome, FilterSpec, MatchResult, ResourceSummary, TagSet};
use crate::infrastructure::provider::{ProviderResult, ResourceLister, TagReader};
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

/// One listed resource with its raw tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub resource: ResourceSummary,
    /// Full provider tag set; empty when the read failed
    pub tags: TagSet,
    pub read_failure: Option<String>,
}

/// Enumerates the resources of one provider scope together with their tags
pub struct ResourceCatalog<P> {
    provider: P,
}

impl<P: ResourceLister + TagReader> ResourceCatalog<P> {
    pub fn new(provider: P) -> Self {
        ResourceCatalog { provider }
    }

    /// List resources, reading each one's tags as the iterator advances.
    ///
    /// Every call lists again, so the sequence reflects the provider state at
    /// call time. A failed tag read keeps the resource with an empty tag set.
    pub fn resources(&self) -> ProviderResult<impl Iterator<Item = CatalogEntry> + '_> {
        let listed = self.provider.list().map_err(|e| {
            error!(error = %e, "failed to list resources");
            e
        })?;
        debug!(count = listed.len(), "listed resources");

        Ok(listed.into_iter().map(move |resource| self.fetch(resource)))
    }

    fn fetch(&self, resource: ResourceSummary) -> CatalogEntry {
        match self.provider.read_tags(&resource.arn) {
            Ok(tags) => CatalogEntry {
                resource,
                tags,
                read_failure: None,
            },
            Err(e) => {
                warn!(arn = %resource.arn, error = %e, "failed to read resource tags");
                CatalogEntry {
                    resource,
                    tags: TagSet::new(),
                    read_failure: Some(e.to_string()),
                }
            }
        }
    }

    /// Resources whose tags satisfy `filter`, as `arn -> name`.
    ///
    /// A malformed filter is reported before the provider is contacted.
    pub fn filtered_resources(&self, filter: &FilterSpec) -> FilterOutcome {
        if let Some(reason) = filter.invalid_reason() {
            debug!(%filter, %reason, "rejecting malformed filter");
            return FilterOutcome::InvalidSpec(reason);
        }

        let entries = match self.resources() {
            Ok(entries) => entries,
            Err(_) => return FilterOutcome::NoResourceFound,
        };

        let mut matches = BTreeMap::new();
        for entry in entries {
            match evaluate(&entry.tags, filter) {
                MatchResult::Match => {
                    matches.insert(entry.resource.arn, entry.resource.name);
                }
                MatchResult::NoMatch => {}
                MatchResult::InvalidSpec => {
                    return FilterOutcome::InvalidSpec(filter.invalid_reason().unwrap_or_default());
                }
            }
        }

        debug!(%filter, matched = matches.len(), "filtered resources");
        FilterOutcome::Matches(matches)
    }
}
