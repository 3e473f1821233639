//! In-memory configuration store
//!
//! Thread-safe store for tests and for embedders that receive documents
//! from their own persistence layer. Mutations here model the external
//! admin surface; the engine itself only reads.

use super::ConfigStore;
use crate::config::models::{
    CredentialStatus, ProfileRule, ProviderCredential, TagMapping, TierDefaults,
};
use crate::utils::error::Result;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory [`ConfigStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: DashMap<String, ProfileRule>,
    tags: RwLock<TagMapping>,
    tiers: RwLock<TierDefaults>,
    credentials: DashMap<String, ProviderCredential>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a profile rule, keyed by its id
    pub fn put_profile(&self, rule: ProfileRule) {
        self.profiles.insert(rule.id.clone(), rule);
    }

    /// Replace the tag mapping document
    pub fn set_tags(&self, tags: TagMapping) {
        *self.tags.write() = tags;
    }

    /// Add a single tag entry
    pub fn put_tag(
        &self,
        tag: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) {
        self.tags.write().insert(tag, provider, model);
    }

    /// Replace the tier defaults document
    pub fn set_tiers(&self, tiers: TierDefaults) {
        *self.tiers.write() = tiers;
    }

    /// Upsert a provider credential
    pub fn put_credential(&self, credential: ProviderCredential) {
        self.credentials
            .insert(credential.provider.clone(), credential);
    }

    /// Convenience: upsert a credential with just a status
    pub fn put_credential_status(&self, provider: impl Into<String>, status: CredentialStatus) {
        self.put_credential(ProviderCredential::new(provider, status));
    }

    /// Remove a profile rule
    pub fn remove_profile(&self, id: &str) -> Option<ProfileRule> {
        self.profiles.remove(id).map(|(_, v)| v)
    }
}

#[async_trait::async_trait]
impl ConfigStore for MemoryStore {
    async fn load_profiles(&self) -> Result<HashMap<String, ProfileRule>> {
        Ok(self
            .profiles
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect())
    }

    async fn load_tags(&self) -> Result<TagMapping> {
        Ok(self.tags.read().clone())
    }

    async fn load_tiers(&self) -> Result<TierDefaults> {
        Ok(self.tiers.read().clone())
    }

    async fn load_credentials(&self) -> Result<HashMap<String, ProviderCredential>> {
        Ok(self
            .credentials
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect())
    }
}
