//! Domain layer - Tag data and filter evaluation

pub mod resource;
pub mod tags;

pub use resource::{FilterOutcome, FlatTag, Listing, ResourceSummary, TagView, TagWriteOutcome};
pub use tags::{evaluate, Conjunction, FilterSpec, MatchResult, TagSet};
