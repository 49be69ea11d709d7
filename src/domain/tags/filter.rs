//! Two-slot tag filter and its evaluation
//!
//! A filter holds two optional `key`/`value` conditions joined by AND or OR.
//! Each slot reduces to a boolean on a resource's [`TagSet`]; an unconstrained
//! slot contributes the identity value of the conjunction so it never changes
//! the other slot's verdict.
//!
//! # Examples
//!
//! ```
//! use fntag::domain::tags::{evaluate, Conjunction, FilterSpec, MatchResult, TagSet};
//!
//! let tags: TagSet = [("env", "prod"), ("team", "x")].into_iter().collect();
//! let filter = FilterSpec::new(Some("env"), Some("prod"), Some("team"), Some("y"), Conjunction::Or);
//! assert_eq!(evaluate(&tags, &filter), MatchResult::Match);
//! ```

use super::TagSet;
use std::str::FromStr;

/// How the two slots of a filter are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    /// Truth value an empty slot contributes under this conjunction.
    fn identity(self) -> bool {
        match self {
            Conjunction::And => true,
            Conjunction::Or => false,
        }
    }

    fn combine(self, left: bool, right: bool) -> bool {
        match self {
            Conjunction::And => left && right,
            Conjunction::Or => left || right,
        }
    }
}

impl FromStr for Conjunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AND" => Ok(Conjunction::And),
            "OR" => Ok(Conjunction::Or),
            _ => Err(format!("Invalid conjunction: '{}'. Use 'and' or 'or'", s)),
        }
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conjunction::And => write!(f, "AND"),
            Conjunction::Or => write!(f, "OR"),
        }
    }
}

/// One key/value condition of a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// No key given
    Empty,
    /// Key must exist, any value
    KeyOnly(String),
    /// Key must exist with exactly this value
    KeyValue(String, String),
    /// A value was given without a key
    Invalid,
}

impl Slot {
    /// Build a slot from optional parts. Blank strings count as not given.
    pub fn from_parts(key: Option<&str>, value: Option<&str>) -> Self {
        let key = key.filter(|k| !k.is_empty());
        let value = value.filter(|v| !v.is_empty());

        match (key, value) {
            (None, None) => Slot::Empty,
            (None, Some(_)) => Slot::Invalid,
            (Some(key), None) => Slot::KeyOnly(key.to_string()),
            (Some(key), Some(value)) => Slot::KeyValue(key.to_string(), value.to_string()),
        }
    }

    fn holds(&self, tags: &TagSet, conjunction: Conjunction) -> bool {
        match self {
            Slot::Empty => conjunction.identity(),
            Slot::KeyOnly(key) => tags.contains_key(key),
            Slot::KeyValue(key, value) => tags.get(key) == Some(value.as_str()),
            // Rejected before slots are evaluated.
            Slot::Invalid => false,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Empty => write!(f, "*"),
            Slot::KeyOnly(key) => write!(f, "{}", key),
            Slot::KeyValue(key, value) => write!(f, "{}={}", key, value),
            Slot::Invalid => write!(f, "<value without key>"),
        }
    }
}

/// Two slots plus the conjunction joining them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub first: Slot,
    pub second: Slot,
    pub conjunction: Conjunction,
}

impl FilterSpec {
    pub fn new(
        key1: Option<&str>,
        value1: Option<&str>,
        key2: Option<&str>,
        value2: Option<&str>,
        conjunction: Conjunction,
    ) -> Self {
        FilterSpec {
            first: Slot::from_parts(key1, value1),
            second: Slot::from_parts(key2, value2),
            conjunction,
        }
    }

    /// A filter with no constraints; matches every resource.
    pub fn unconstrained() -> Self {
        FilterSpec {
            first: Slot::Empty,
            second: Slot::Empty,
            conjunction: Conjunction::default(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.first != Slot::Invalid && self.second != Slot::Invalid
    }

    /// Describe what makes this filter malformed, if anything.
    pub fn invalid_reason(&self) -> Option<String> {
        match (&self.first, &self.second) {
            (Slot::Invalid, Slot::Invalid) => {
                Some("value1 and value2 given without key1 and key2".to_string())
            }
            (Slot::Invalid, _) => Some("value1 given without key1".to_string()),
            (_, Slot::Invalid) => Some("value2 given without key2".to_string()),
            _ => None,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.first == Slot::Empty && self.second == Slot::Empty
    }
}

impl std::fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.first, self.conjunction, self.second)
    }
}

/// Verdict of evaluating one filter against one tag set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Match,
    NoMatch,
    /// The filter itself is malformed, independent of the resource
    InvalidSpec,
}

impl From<bool> for MatchResult {
    fn from(matched: bool) -> Self {
        if matched {
            MatchResult::Match
        } else {
            MatchResult::NoMatch
        }
    }
}

/// Decide whether `tags` satisfies `filter`.
///
/// An invalid slot dominates everything, then a fully empty filter matches
/// under either conjunction, then the two slot verdicts are combined.
pub fn evaluate(tags: &TagSet, filter: &FilterSpec) -> MatchResult {
    if !filter.is_well_formed() {
        return MatchResult::InvalidSpec;
    }
    if filter.is_unconstrained() {
        return MatchResult::Match;
    }

    let op = filter.conjunction;
    let first = filter.first.holds(tags, op);
    let second = filter.second.holds(tags, op);
    op.combine(first, second).into()
}
