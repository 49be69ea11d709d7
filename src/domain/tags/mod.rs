//! Tag system

pub mod filter;
pub mod tag_set;

// Re-export main types
pub use filter::{evaluate, Conjunction, FilterSpec, MatchResult, Slot};
pub use tag_set::{is_reserved_key, parse_tag_assignment, TagSet, RESERVED_PREFIX};
