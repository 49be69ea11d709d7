//! Tag inventory views over the resource catalog

use crate::application::catalog::{CatalogEntry, ResourceCatalog};
use crate::domain::{FlatTag, Listing, TagView};
use crate::infrastructure::provider::{ResourceLister, TagReader};
use std::collections::{BTreeMap, BTreeSet};

/// Builds read-side views of every resource's visible tags.
///
/// Reserved-prefix tags never appear in these views.
pub struct TagAggregator<P> {
    catalog: ResourceCatalog<P>,
}

impl<P: ResourceLister + TagReader> TagAggregator<P> {
    pub fn new(catalog: ResourceCatalog<P>) -> Self {
        TagAggregator { catalog }
    }

    /// Every resource id with its visible tags sorted by key.
    pub fn inventory(&self) -> Listing<BTreeMap<String, TagView>> {
        let entries = match self.catalog.resources() {
            Ok(entries) => entries,
            Err(_) => return Listing::NoResourceFound,
        };

        Listing::Found(
            entries
                .map(|entry| {
                    let view = tag_view(&entry);
                    (entry.resource.id, view)
                })
                .collect(),
        )
    }

    /// Visible tag keys of all resources, in enumeration order.
    pub fn all_tag_keys(&self) -> Listing<Vec<FlatTag>> {
        self.flatten(|key, _| key)
    }

    /// Visible tag values of all resources, in enumeration order.
    pub fn all_tag_values(&self) -> Listing<Vec<FlatTag>> {
        self.flatten(|_, value| value)
    }

    /// Sorted distinct visible tag keys.
    pub fn distinct_tag_keys(&self) -> Listing<Vec<String>> {
        self.all_tag_keys().map(distinct)
    }

    /// Sorted distinct visible tag values.
    pub fn distinct_tag_values(&self) -> Listing<Vec<String>> {
        self.all_tag_values().map(distinct)
    }

    fn flatten(&self, pick: for<'a> fn(&'a str, &'a str) -> &'a str) -> Listing<Vec<FlatTag>> {
        let entries = match self.catalog.resources() {
            Ok(entries) => entries,
            Err(_) => return Listing::NoResourceFound,
        };

        let mut flat = Vec::new();
        for entry in entries {
            let before = flat.len();
            if entry.read_failure.is_none() {
                flat.extend(
                    entry
                        .tags
                        .visible()
                        .map(|(key, value)| FlatTag::Entry(pick(key, value).to_string())),
                );
            }
            if flat.len() == before {
                flat.push(FlatTag::NotFound);
            }
        }

        Listing::Found(flat)
    }
}

fn tag_view(entry: &CatalogEntry) -> TagView {
    if let Some(reason) = &entry.read_failure {
        return TagView::ReadFailed(reason.clone());
    }

    let visible: BTreeMap<String, String> = entry
        .tags
        .visible()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    if visible.is_empty() {
        TagView::NoTags
    } else {
        TagView::Tags(visible)
    }
}

fn distinct(flat: Vec<FlatTag>) -> Vec<String> {
    flat.into_iter()
        .filter_map(|tag| match tag {
            FlatTag::Entry(s) => Some(s),
            FlatTag::NotFound => None,
        })
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
