//! Shared snapshot fixtures for engine tests

use crate::config::models::{
    Capabilities, CredentialStatus, ProfileRule, ProfileStatus, ProviderCredential, TierTarget,
};
use crate::core::snapshot::ConfigSnapshot;

pub fn snapshot() -> ConfigSnapshot {
    ConfigSnapshot::empty()
}

pub fn profile(id: &str, provider: &str, model_id: &str) -> ProfileRule {
    ProfileRule {
        id: id.to_string(),
        provider: provider.to_string(),
        model_id: model_id.to_string(),
        temperature: None,
        credit_multiplier: None,
        capabilities: Capabilities::default(),
        status: ProfileStatus::Active,
    }
}

pub fn image_profile(id: &str, provider: &str, model_id: &str) -> ProfileRule {
    ProfileRule {
        capabilities: Capabilities {
            chat: false,
            image_generation: true,
        },
        ..profile(id, provider, model_id)
    }
}

pub fn add_profile(snapshot: &mut ConfigSnapshot, rule: ProfileRule) {
    snapshot.profiles.insert(rule.id.clone(), rule);
}

pub fn add_credential(snapshot: &mut ConfigSnapshot, provider: &str, status: CredentialStatus) {
    snapshot
        .credentials
        .insert(provider.to_string(), ProviderCredential::new(provider, status));
}

pub fn add_tier(
    snapshot: &mut ConfigSnapshot,
    class: &str,
    tier: &str,
    provider: &str,
    model: &str,
    multiplier: f64,
) {
    snapshot
        .tiers
        .insert(class, tier, TierTarget::new(provider, model, multiplier));
}
