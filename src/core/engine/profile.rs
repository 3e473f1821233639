//! Profile resolver
//!
//! Loads a profile rule by identifier. A missing or inactive rule signals
//! `ProfileNotFound`; the route assembler recovers by falling back to
//! tier defaults with the request-supplied capability class and tier.

use crate::config::models::ProfileRule;
use crate::core::snapshot::ConfigSnapshot;
use crate::utils::error::{Result, RouteError};
use tracing::debug;

/// Resolve a profile rule, requiring active status
pub fn resolve_profile<'a>(
    snapshot: &'a ConfigSnapshot,
    profile_id: &str,
) -> Result<&'a ProfileRule> {
    match snapshot.profiles.get(profile_id) {
        Some(rule) if rule.is_active() => Ok(rule),
        Some(_) => {
            debug!(profile = profile_id, "profile rule is inactive");
            Err(RouteError::ProfileNotFound(profile_id.to_string()))
        }
        None => {
            debug!(profile = profile_id, "no profile rule found");
            Err(RouteError::ProfileNotFound(profile_id.to_string()))
        }
    }
}
