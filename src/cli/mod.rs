//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_apply_report, format_distinct, format_flat_tags, format_inventory, format_matches,
    TagField, NO_RESOURCE_FOUND,
};
