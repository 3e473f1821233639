//! Tier resolver
//!
//! Resolves (capability class, tier name) to a provider/model/multiplier
//! triple. This is the resolver of last resort: unknown tiers fall back
//! to the class default, unknown classes fall back to the legacy flat
//! pair, and an empty document falls back to a compiled-in safe target,
//! so it never fails.

use crate::config::models::TierTarget;
use crate::core::snapshot::ConfigSnapshot;
use once_cell::sync::Lazy;
use tracing::warn;

use super::policy::DEFAULT_TIER;

/// Compiled-in ultimate fallback, used when even the legacy flat pair is
/// absent from the store
pub static ULTIMATE_FALLBACK: Lazy<TierTarget> =
    Lazy::new(|| TierTarget::new("openai", "gpt-4o-mini", 1.0));

/// Resolve tier defaults for a capability class and tier name
///
/// The returned target is cloned out of the snapshot so the decision can
/// outlive it.
pub fn resolve_tier(snapshot: &ConfigSnapshot, class: &str, tier: &str) -> TierTarget {
    if let Some(tiers) = snapshot.tiers.class(class) {
        if let Some(target) = tiers.get(tier) {
            return target.clone();
        }
        if let Some(target) = tiers.get(DEFAULT_TIER) {
            warn!(
                class,
                tier, "unknown tier; used fallback of kind class-default"
            );
            return target.clone();
        }
    }

    if let Some(target) = snapshot.tiers.legacy(tier) {
        warn!(
            class,
            tier, "unknown capability class; used fallback of kind legacy-flat"
        );
        return target.clone();
    }

    warn!(
        class,
        tier, "tier defaults absent; used fallback of kind compiled-in"
    );
    ULTIMATE_FALLBACK.clone()
}
