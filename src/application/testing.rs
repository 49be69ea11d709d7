//! In-memory provider for application tests

use crate::domain::{ResourceSummary, TagSet};
use crate::infrastructure::provider::{
    ProviderError, ProviderResult, ResourceLister, TagReader, TagWriter,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

pub fn arn(id: &str) -> String {
    format!("arn:aws:lambda:us-east-1:123456789012:function:{}", id)
}

#[derive(Debug, Default)]
pub struct FakeProvider {
    resources: Vec<ResourceSummary>,
    tags: RefCell<BTreeMap<String, TagSet>>,
    read_errors: BTreeMap<String, String>,
    write_errors: BTreeMap<String, String>,
    unavailable: Option<String>,
    pub reads: Cell<usize>,
    pub writes: Cell<usize>,
}

impl FakeProvider {
    pub fn new() -> Self {
        FakeProvider::default()
    }

    pub fn with_resource(mut self, id: &str, tags: &[(&str, &str)]) -> Self {
        self.resources.push(ResourceSummary::new(id, arn(id), id));
        self.tags
            .get_mut()
            .insert(arn(id), tags.iter().copied().collect());
        self
    }

    pub fn with_read_error(mut self, id: &str, reason: &str) -> Self {
        self = self.with_resource(id, &[]);
        self.read_errors.insert(arn(id), reason.to_string());
        self
    }

    pub fn with_write_error(mut self, id: &str, reason: &str) -> Self {
        self.write_errors.insert(arn(id), reason.to_string());
        self
    }

    pub fn unavailable(mut self, reason: &str) -> Self {
        self.unavailable = Some(reason.to_string());
        self
    }

    pub fn tags_of(&self, id: &str) -> TagSet {
        self.tags.borrow().get(&arn(id)).cloned().unwrap_or_default()
    }
}

impl ResourceLister for FakeProvider {
    fn list(&self) -> ProviderResult<Vec<ResourceSummary>> {
        match &self.unavailable {
            Some(reason) => Err(ProviderError::Unavailable(reason.clone())),
            None => Ok(self.resources.clone()),
        }
    }
}

impl TagReader for FakeProvider {
    fn read_tags(&self, arn: &str) -> ProviderResult<TagSet> {
        self.reads.set(self.reads.get() + 1);
        if let Some(reason) = self.read_errors.get(arn) {
            return Err(ProviderError::Request(reason.clone()));
        }
        self.tags
            .borrow()
            .get(arn)
            .cloned()
            .ok_or_else(|| ProviderError::ResourceNotFound(arn.to_string()))
    }
}

impl TagWriter for FakeProvider {
    fn write_tags(&self, arn: &str, tags: &BTreeMap<String, String>) -> ProviderResult<()> {
        self.writes.set(self.writes.get() + 1);
        if let Some(reason) = self.write_errors.get(arn) {
            return Err(ProviderError::Request(reason.clone()));
        }
        let mut store = self.tags.borrow_mut();
        let current = store
            .get_mut(arn)
            .ok_or_else(|| ProviderError::ResourceNotFound(arn.to_string()))?;
        current.merge(tags);
        Ok(())
    }
}
