//! Bulk tag update use case

use crate::domain::TagWriteOutcome;
use crate::infrastructure::provider::TagWriter;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Applies one tag set to a batch of resources
pub struct TagMutator<W> {
    writer: W,
}

impl<W: TagWriter> TagMutator<W> {
    pub fn new(writer: W) -> Self {
        TagMutator { writer }
    }

    /// Write `tags` to every resource in `arns`, one call per resource.
    ///
    /// Duplicate keys in `tags` keep the last value. A failed write is
    /// recorded against its ARN and the remaining ARNs are still attempted.
    pub fn apply_tags(
        &self,
        arns: &[String],
        tags: &[(String, String)],
    ) -> BTreeMap<String, TagWriteOutcome> {
        let tag_map = collapse_tags(tags);
        let mut outcomes = BTreeMap::new();

        for arn in arns {
            let outcome = match self.writer.write_tags(arn, &tag_map) {
                Ok(()) => {
                    debug!(%arn, count = tag_map.len(), "applied tags");
                    TagWriteOutcome::Applied
                }
                Err(e) => {
                    warn!(%arn, error = %e, "failed to apply tags");
                    TagWriteOutcome::Failed(e.to_string())
                }
            };
            outcomes.insert(arn.clone(), outcome);
        }

        outcomes
    }
}

fn collapse_tags(tags: &[(String, String)]) -> BTreeMap<String, String> {
    tags.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{arn, FakeProvider};

    fn pairs(tags: &[(&str, &str)]) -> Vec<(String, String)> {
        tags.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collapse_tags_last_write_wins() {
        let collapsed = collapse_tags(&pairs(&[("k", "a"), ("other", "1"), ("k", "b")]));
        assert_eq!(collapsed.get("k").map(String::as_str), Some("b"));
        assert_eq!(collapsed.len(), 2);
    }

    #[test]
    fn test_apply_tags_last_write_wins_on_resource() {
        let provider = FakeProvider::new().with_resource("orders", &[]);
        let mutator = TagMutator::new(&provider);

        let outcomes = mutator.apply_tags(&[arn("orders")], &pairs(&[("k", "a"), ("k", "b")]));

        assert_eq!(outcomes.get(&arn("orders")), Some(&TagWriteOutcome::Applied));
        assert_eq!(provider.tags_of("orders").get("k"), Some("b"));
    }

    #[test]
    fn test_apply_tags_continues_after_failure() {
        let provider = FakeProvider::new()
            .with_resource("a", &[])
            .with_resource("b", &[])
            .with_write_error("a", "ThrottlingException");
        let mutator = TagMutator::new(&provider);
        let ghost = arn("ghost");

        let outcomes =
            mutator.apply_tags(&[arn("a"), ghost.clone(), arn("b")], &pairs(&[("env", "prod")]));

        assert_eq!(provider.writes.get(), 3);
        assert!(matches!(
            outcomes.get(&arn("a")),
            Some(TagWriteOutcome::Failed(reason)) if reason.contains("ThrottlingException")
        ));
        assert!(matches!(outcomes.get(&ghost), Some(TagWriteOutcome::Failed(_))));
        assert_eq!(outcomes.get(&arn("b")), Some(&TagWriteOutcome::Applied));
        assert_eq!(provider.tags_of("b").get("env"), Some("prod"));
    }

    #[test]
    fn test_apply_tags_is_idempotent() {
        let provider = FakeProvider::new()
            .with_resource("a", &[("owner", "ops")])
            .with_resource("b", &[]);
        let mutator = TagMutator::new(&provider);
        let arns = [arn("a"), arn("b")];
        let tags = pairs(&[("env", "prod"), ("team", "x")]);

        let first = mutator.apply_tags(&arns, &tags);
        let after_first = provider.tags_of("a");
        let second = mutator.apply_tags(&arns, &tags);

        assert_eq!(first, second);
        assert!(second.values().all(TagWriteOutcome::is_applied));
        assert_eq!(provider.tags_of("a"), after_first);
        assert_eq!(provider.tags_of("a").get("owner"), Some("ops"));
    }

    #[test]
    fn test_apply_tags_empty_batch() {
        let provider = FakeProvider::new();
        let mutator = TagMutator::new(&provider);

        assert!(mutator.apply_tags(&[], &pairs(&[("env", "prod")])).is_empty());
        assert_eq!(provider.writes.get(), 0);
    }
}
