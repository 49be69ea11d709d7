//! fntag - Tag inventory and filtering for cloud function resources
//!
//! Lists the tags of every function resource in a region, filters resources
//! with a two-slot tag condition, and applies tags to resources in bulk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FntagError;
