//! Engine input and output contracts
//!
//! A [`CapabilityRequest`] goes in; an immutable [`RouteDecision`] comes
//! out, optionally wrapped with an invocation result in
//! [`RoutedResponse`].

use serde::{Deserialize, Serialize};

/// A caller's logical request for a capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityRequest {
    /// Runtime profile identifier
    pub profile_id: String,

    /// Quality tier; `"default"` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_tier: Option<String>,

    /// Explicit temperature; outranks every configured value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Capability class hint, used when no profile rule applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_class: Option<String>,
}

impl CapabilityRequest {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            quality_tier: None,
            temperature: None,
            capability_class: None,
        }
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.quality_tier = Some(tier.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_capability_class(mut self, class: impl Into<String>) -> Self {
        self.capability_class = Some(class.into());
        self
    }
}

/// Which configuration layer supplied the provider/model pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteSource {
    /// Profile rule named a concrete provider/model directly
    ProfileDirect,
    /// Profile declared a tag resolved through the tag mapping
    TagResolved,
    /// Tier defaults supplied the pair (profile/tag miss or credential
    /// substitution)
    TierFallback,
}

impl std::fmt::Display for RouteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ProfileDirect => "profile-direct",
            Self::TagResolved => "tag-resolved",
            Self::TierFallback => "tier-fallback",
        };
        f.write_str(s)
    }
}

/// The fully resolved routing decision
///
/// Immutable once produced; for a fixed snapshot the same request always
/// yields an identical decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDecision {
    pub provider: String,
    pub model: String,
    pub temperature: f64,

    #[serde(rename = "creditMultiplier")]
    pub credit_multiplier: f64,

    pub source: RouteSource,
}

/// Invocation result annotated with the routing that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedResponse<T> {
    pub routing: RouteDecision,
    pub result: T,
}
