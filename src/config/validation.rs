//! Configuration snapshot validation
//!
//! Cross-document integrity checks over a loaded snapshot. Findings are
//! warnings: the engine tolerates all of them at resolution time through
//! its fallback chain, but operators usually want them surfaced before a
//! deploy rather than discovered as degraded routing.

use crate::config::models::{CredentialStatus, ProviderRef};
use crate::core::snapshot::ConfigSnapshot;
use tracing::warn;

/// Category of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// Active profile declares a tag with no mapping entry
    UnresolvableTag,
    /// Profile or tag points at a provider with no active credential
    NoActiveCredential,
    /// Credit multiplier is zero or negative
    InvalidMultiplier,
    /// Legacy flat default pair is missing entirely
    MissingLegacyDefaults,
}

/// One integrity finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFinding {
    pub kind: FindingKind,
    pub message: String,
}

impl ValidationFinding {
    fn new(kind: FindingKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Validate a snapshot, logging each finding at warn level
pub fn validate_snapshot(snapshot: &ConfigSnapshot) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    let has_active_credential = |provider: &str| {
        snapshot
            .credentials
            .get(provider)
            .is_some_and(|c| c.status == CredentialStatus::Active)
    };

    for rule in snapshot.profiles.values().filter(|r| r.is_active()) {
        match rule.provider_ref() {
            ProviderRef::Indirect { tag } => {
                if snapshot.tags.get(tag).is_none() {
                    findings.push(ValidationFinding::new(
                        FindingKind::UnresolvableTag,
                        format!("profile '{}' declares unresolvable tag '{}'", rule.id, tag),
                    ));
                }
            }
            ProviderRef::Direct { provider, .. } => {
                if !has_active_credential(provider) {
                    findings.push(ValidationFinding::new(
                        FindingKind::NoActiveCredential,
                        format!(
                            "profile '{}' routes to '{}' which has no active credential",
                            rule.id, provider
                        ),
                    ));
                }
            }
        }

        if let Some(m) = rule.credit_multiplier {
            if m <= 0.0 {
                findings.push(ValidationFinding::new(
                    FindingKind::InvalidMultiplier,
                    format!("profile '{}' has non-positive credit multiplier {}", rule.id, m),
                ));
            }
        }
    }

    for (tag, target) in snapshot.tags.iter() {
        if !has_active_credential(&target.provider) {
            findings.push(ValidationFinding::new(
                FindingKind::NoActiveCredential,
                format!(
                    "tag '{}' maps to '{}' which has no active credential",
                    tag, target.provider
                ),
            ));
        }
    }

    for (class, tier, target) in snapshot.tiers.iter() {
        if target.credit_multiplier <= 0.0 {
            findings.push(ValidationFinding::new(
                FindingKind::InvalidMultiplier,
                format!(
                    "tier '{}/{}' has non-positive credit multiplier {}",
                    class, tier, target.credit_multiplier
                ),
            ));
        }
    }

    if snapshot.tiers.default.is_none() && snapshot.tiers.boost.is_none() {
        findings.push(ValidationFinding::new(
            FindingKind::MissingLegacyDefaults,
            "tier defaults carry no legacy default/boost pair; unknown capability classes \
             will resolve to the compiled-in fallback"
                .to_string(),
        ));
    }

    for finding in &findings {
        warn!(kind = ?finding.kind, "{}", finding.message);
    }

    findings
}
