//! Resource tag sets and tag input validation

use crate::error::{FntagError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Key prefix the provider applies to its own tags.
pub const RESERVED_PREFIX: &str = "aws:";

const MAX_KEY_LEN: usize = 128;
const MAX_VALUE_LEN: usize = 256;

fn tag_charset_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[\p{L}\p{Z}\p{N}_.:/=+\-@]*$").unwrap())
}

/// Returns true for keys the provider reserves for itself.
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

/// Full key/value tag mapping of one resource, as held by the provider.
///
/// Reserved-prefix tags are kept here. Read-side views drop them through
/// [`TagSet::visible`], while filtering sees every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: BTreeMap<String, String>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All entries in key order, reserved ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries in key order with reserved-prefix keys removed.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(key, _)| !is_reserved_key(key))
    }

    /// Merge `updates` into this set, overwriting existing keys.
    pub fn merge(&mut self, updates: &BTreeMap<String, String>) {
        for (key, value) in updates {
            self.tags.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for TagSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TagSet {
            tags: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a `KEY=VALUE` argument into a validated tag pair.
///
/// `KEY` alone sets an empty value. Only the first `=` splits, so values may
/// contain `=`.
pub fn parse_tag_assignment(input: &str) -> Result<(String, String)> {
    let (key, value) = match input.split_once('=') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (input.trim(), ""),
    };

    validate_tag_key(key)?;
    validate_tag_value(key, value)?;

    Ok((key.to_string(), value.to_string()))
}

fn validate_tag_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(FntagError::InvalidTag("empty tag key".to_string()));
    }
    if key.chars().count() > MAX_KEY_LEN {
        return Err(FntagError::InvalidTag(format!(
            "key '{}' is longer than {} characters",
            key, MAX_KEY_LEN
        )));
    }
    if is_reserved_key(key) {
        return Err(FntagError::InvalidTag(format!(
            "key '{}' uses the reserved '{}' prefix",
            key, RESERVED_PREFIX
        )));
    }
    if !tag_charset_regex().is_match(key) {
        return Err(FntagError::InvalidTag(format!(
            "key '{}' contains unsupported characters",
            key
        )));
    }
    Ok(())
}

fn validate_tag_value(key: &str, value: &str) -> Result<()> {
    if value.chars().count() > MAX_VALUE_LEN {
        return Err(FntagError::InvalidTag(format!(
            "value for '{}' is longer than {} characters",
            key, MAX_VALUE_LEN
        )));
    }
    if !tag_charset_regex().is_match(value) {
        return Err(FntagError::InvalidTag(format!(
            "value for '{}' contains unsupported characters",
            key
        )));
    }
    Ok(())
}
