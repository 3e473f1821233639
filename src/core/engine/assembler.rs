//! Route assembler
//!
//! The orchestrating state machine:
//! `ProfileLookup -> {TagResolve | Direct} -> TierMerge -> CredentialCheck -> Decided`.
//!
//! Precedence is strict: profile-direct values outrank tag-resolved
//! values, which outrank tier defaults; a later stage only fills gaps.
//! Temperature merges as request > profile > tier > compiled default.
//! A non-active credential re-enters `TierMerge` exactly once when the
//! substitution policy is enabled; there are no retry loops.

use crate::config::models::ProviderRef;
use crate::core::snapshot::ConfigSnapshot;
use crate::utils::error::{Result, RouteError};
use tracing::warn;

use super::credential::check_credential;
use super::decision::{CapabilityRequest, RouteDecision, RouteSource};
use super::policy::{DEFAULT_TEMPERATURE, DEFAULT_TIER, RoutePolicy};
use super::profile::resolve_profile;
use super::tag::resolve_tag;
use super::tier::resolve_tier;

/// Provider/model pair chosen before the tier merge, if any layer above
/// tier defaults produced one
struct Picked {
    provider: String,
    model: String,
    source: RouteSource,
}

/// Assemble a routing decision from a snapshot, a policy and a request
pub fn assemble(
    snapshot: &ConfigSnapshot,
    policy: &RoutePolicy,
    request: &CapabilityRequest,
) -> Result<RouteDecision> {
    let tier_name = request.quality_tier.as_deref().unwrap_or(DEFAULT_TIER);

    // ProfileLookup: a miss drops straight to the tier merge with the
    // request-supplied capability class.
    let (class, picked, profile_temperature, profile_multiplier) =
        match resolve_profile(snapshot, &request.profile_id) {
            Err(_) => {
                warn!(
                    profile = %request.profile_id,
                    "used fallback of kind tier-defaults because profile was missing or inactive"
                );
                let class = request
                    .capability_class
                    .clone()
                    .unwrap_or_else(|| policy.default_capability_class.clone());
                (class, None, None, None)
            }
            Ok(rule) => {
                let class = rule.capabilities.capability_class().to_string();
                let picked = match rule.provider_ref() {
                    ProviderRef::Direct { provider, model } => Some(Picked {
                        provider: provider.to_string(),
                        model: model.to_string(),
                        source: RouteSource::ProfileDirect,
                    }),
                    ProviderRef::Indirect { tag } => match resolve_tag(snapshot, tag) {
                        Ok(target) => Some(Picked {
                            provider: target.provider.clone(),
                            model: target.model.clone(),
                            source: RouteSource::TagResolved,
                        }),
                        Err(_) => {
                            warn!(
                                profile = %rule.id,
                                tag,
                                "used fallback of kind tier-defaults because tag was unresolved"
                            );
                            None
                        }
                    },
                };
                (class, picked, rule.temperature, rule.credit_multiplier)
            }
        };

    // TierMerge: always consulted, either for the pair itself or to fill
    // temperature/multiplier gaps.
    let tier_target = resolve_tier(snapshot, &class, tier_name);

    let (provider, model, source) = match picked {
        Some(p) => (p.provider, p.model, p.source),
        None => (
            tier_target.provider.clone(),
            tier_target.model.clone(),
            RouteSource::TierFallback,
        ),
    };

    let temperature = request
        .temperature
        .or(profile_temperature)
        .or(tier_target.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);

    let credit_multiplier = profile_multiplier.unwrap_or(tier_target.credit_multiplier);

    // CredentialCheck, with at most one re-entry into the tier merge.
    let status = check_credential(snapshot, &provider);
    if status.is_usable() {
        return Ok(RouteDecision {
            provider,
            model,
            temperature,
            credit_multiplier,
            source,
        });
    }

    if !policy.credential_substitution {
        return Err(RouteError::CredentialInactive { provider, status });
    }

    // The tier merge above already resolved this class/tier pair; the
    // re-entry reuses that target rather than walking the ladder again.
    let substitute = tier_target;
    if substitute.provider == provider {
        // Substitution would land on the same provider; failing is the
        // only loop-free option left.
        return Err(RouteError::CredentialInactive { provider, status });
    }

    let substitute_status = check_credential(snapshot, &substitute.provider);
    if !substitute_status.is_usable() {
        return Err(RouteError::CredentialInactive {
            provider: substitute.provider,
            status: substitute_status,
        });
    }

    warn!(
        original = %provider,
        substitute = %substitute.provider,
        %status,
        "used fallback of kind credential-substitution because credential was not active"
    );

    let temperature = request
        .temperature
        .or(profile_temperature)
        .or(substitute.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);

    Ok(RouteDecision {
        provider: substitute.provider,
        model: substitute.model,
        temperature,
        credit_multiplier: profile_multiplier.unwrap_or(substitute.credit_multiplier),
        source: RouteSource::TierFallback,
    })
}
