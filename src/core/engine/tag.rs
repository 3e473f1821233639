//! Tag resolver
//!
//! Resolves an abstract indirection tag to a concrete provider/model pair
//! against the snapshot's tag mapping. Deterministic: the same tag and
//! the same snapshot always yield the same pair.

use crate::config::models::TagTarget;
use crate::core::snapshot::ConfigSnapshot;
use crate::utils::error::{Result, RouteError};
use tracing::debug;

/// Resolve a tag against the current tag mapping
pub fn resolve_tag<'a>(snapshot: &'a ConfigSnapshot, tag: &str) -> Result<&'a TagTarget> {
    match snapshot.tags.get(tag) {
        Some(target) => Ok(target),
        None => {
            debug!(tag, "tag has no mapping entry");
            Err(RouteError::TagUnresolved(tag.to_string()))
        }
    }
}
