//! Tag mapping document
//!
//! A single global document mapping abstract tags (for example
//! `reasoning_optimized`) to concrete provider/model pairs. Insertion
//! order is irrelevant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Concrete target of a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTarget {
    pub provider: String,
    pub model: String,
}

/// The global tag mapping document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMapping {
    #[serde(flatten)]
    entries: BTreeMap<String, TagTarget>,
}

impl TagMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a tag
    pub fn get(&self, tag: &str) -> Option<&TagTarget> {
        self.entries.get(tag)
    }

    /// Register a tag target (admin/seeding surface; tests)
    pub fn insert(
        &mut self,
        tag: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) {
        self.entries.insert(
            tag.into(),
            TagTarget {
                provider: provider.into(),
                model: model.into(),
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all tag entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagTarget)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
