//! Engine policy knobs

use std::time::Duration;

/// Temperature applied when no layer supplies one
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Capability class assumed when neither request nor profile names one
pub const DEFAULT_CAPABILITY_CLASS: &str = "text";

/// Tier applied when the caller omits one
pub const DEFAULT_TIER: &str = "default";

/// Resolution policy
///
/// `credential_substitution` is the documented escape hatch for staging a
/// provider with a placeholder credential: when enabled (the default), a
/// non-active credential re-routes through tier defaults instead of
/// failing the request.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Substitute via tier defaults on a non-active credential instead of
    /// hard-failing
    pub credential_substitution: bool,

    /// Deadline for each configuration-store read
    pub store_timeout: Duration,

    /// Deadline for the caller-supplied invocation; `None` means no limit
    pub invoke_timeout: Option<Duration>,

    /// Capability class used when the request leaves it unset
    pub default_capability_class: String,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            credential_substitution: true,
            store_timeout: Duration::from_secs(10),
            invoke_timeout: None,
            default_capability_class: DEFAULT_CAPABILITY_CLASS.to_string(),
        }
    }
}
