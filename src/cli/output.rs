//! Output formatting utilities

use crate::domain::{FlatTag, Listing, TagView, TagWriteOutcome};
use std::collections::BTreeMap;

pub const NO_RESOURCE_FOUND: &str = "No Resource Found";
pub const NO_TAGS_FOUND: &str = "No Tags Found";
pub const NO_MATCHING_RESOURCE: &str = "No matching resource";

/// Which half of a tag a flattened listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Key,
    Value,
}

impl TagField {
    fn not_found(self) -> &'static str {
        match self {
            TagField::Key => "No tag keys found",
            TagField::Value => "No tag values found",
        }
    }
}

/// Format the per-resource tag inventory for display
pub fn format_inventory(inventory: &Listing<BTreeMap<String, TagView>>) -> String {
    let resources = match inventory {
        Listing::Found(resources) => resources,
        Listing::NoResourceFound => return NO_RESOURCE_FOUND.to_string(),
    };
    if resources.is_empty() {
        return "No resources listed".to_string();
    }

    let mut lines = Vec::new();
    for (id, view) in resources {
        lines.push(id.clone());
        match view {
            TagView::Tags(tags) => {
                for (key, value) in tags {
                    lines.push(format!("  {} = {}", key, value));
                }
            }
            TagView::NoTags => lines.push(format!("  {}", NO_TAGS_FOUND)),
            TagView::ReadFailed(reason) => {
                lines.push(format!("  {} ({})", NO_TAGS_FOUND, reason))
            }
        }
    }
    lines.join("\n")
}

/// Format a flattened keys or values listing, one entry per line
pub fn format_flat_tags(listing: &Listing<Vec<FlatTag>>, field: TagField) -> String {
    let tags = match listing {
        Listing::Found(tags) => tags,
        Listing::NoResourceFound => return NO_RESOURCE_FOUND.to_string(),
    };
    if tags.is_empty() {
        return field.not_found().to_string();
    }

    tags.iter()
        .map(|tag| match tag {
            FlatTag::Entry(s) => s.as_str(),
            FlatTag::NotFound => field.not_found(),
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Format a distinct keys or values listing
pub fn format_distinct(listing: &Listing<Vec<String>>, field: TagField) -> String {
    match listing {
        Listing::NoResourceFound => NO_RESOURCE_FOUND.to_string(),
        Listing::Found(tags) if tags.is_empty() => field.not_found().to_string(),
        Listing::Found(tags) => tags.join("\n"),
    }
}

/// Format matching resources as `arn  name` lines
pub fn format_matches(matches: &BTreeMap<String, String>) -> String {
    if matches.is_empty() {
        return NO_MATCHING_RESOURCE.to_string();
    }

    matches
        .iter()
        .map(|(arn, name)| format!("{}  {}", arn, name))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Format per-ARN write outcomes followed by a summary line
pub fn format_apply_report(outcomes: &BTreeMap<String, TagWriteOutcome>) -> String {
    let mut lines = Vec::new();
    for (arn, outcome) in outcomes {
        match outcome {
            TagWriteOutcome::Applied => lines.push(format!("applied  {}", arn)),
            TagWriteOutcome::Failed(reason) => lines.push(format!("failed   {}: {}", arn, reason)),
        }
    }

    let applied = outcomes.values().filter(|o| o.is_applied()).count();
    lines.push(format!(
        "Applied tags to {} of {} resource(s).",
        applied,
        outcomes.len()
    ));
    lines.join("\n")
}
