//! Resource identities and the typed outcomes of catalog-wide reads

use std::collections::BTreeMap;

/// A function resource as reported by the resource lister
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSummary {
    pub id: String,
    pub arn: String,
    pub name: String,
}

impl ResourceSummary {
    pub fn new(id: impl Into<String>, arn: impl Into<String>, name: impl Into<String>) -> Self {
        ResourceSummary {
            id: id.into(),
            arn: arn.into(),
            name: name.into(),
        }
    }
}

/// Result of a read that spans the whole catalog.
///
/// `NoResourceFound` means the resource list itself could not be obtained,
/// which is different from an empty `Found` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Found(T),
    NoResourceFound,
}

impl<T> Listing<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Listing<U> {
        match self {
            Listing::Found(value) => Listing::Found(f(value)),
            Listing::NoResourceFound => Listing::NoResourceFound,
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            Listing::Found(value) => Some(value),
            Listing::NoResourceFound => None,
        }
    }
}

/// Read-side tag view of one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagView {
    /// Visible tags, sorted by key
    Tags(BTreeMap<String, String>),
    /// The resource carries no visible tags
    NoTags,
    /// Reading the resource's tags failed
    ReadFailed(String),
}

/// One entry of a flattened keys or values listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatTag {
    Entry(String),
    /// Placeholder for a resource with no visible tags or a failed read
    NotFound,
}

/// Result of a filtered listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Matching resources, `arn -> name`
    Matches(BTreeMap<String, String>),
    /// The filter was malformed; no resource was examined
    InvalidSpec(String),
    NoResourceFound,
}

/// Outcome of writing tags to one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagWriteOutcome {
    Applied,
    Failed(String),
}

impl TagWriteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TagWriteOutcome::Applied)
    }
}
