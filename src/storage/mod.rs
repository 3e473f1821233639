//! Configuration store backends
//!
//! The engine reads its four document families through the [`ConfigStore`]
//! trait. `MemoryStore` backs tests and embedders that manage documents
//! themselves; `FileStore` reads YAML documents from a directory.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::models::{ProfileRule, ProviderCredential, TagMapping, TierDefaults};
use crate::utils::error::Result;
use std::collections::HashMap;

/// Read access to the four configuration document families
///
/// Implementations are read-only from the engine's point of view; a
/// missing document family is returned empty, not as an error, since
/// upstream tooling does not guarantee every family is seeded.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ConfigStore: Send + Sync {
    /// Profile rules keyed by profile id
    async fn load_profiles(&self) -> Result<HashMap<String, ProfileRule>>;

    /// The global tag mapping
    async fn load_tags(&self) -> Result<TagMapping>;

    /// Tier defaults
    async fn load_tiers(&self) -> Result<TierDefaults>;

    /// Provider credentials keyed by provider name
    async fn load_credentials(&self) -> Result<HashMap<String, ProviderCredential>>;
}
