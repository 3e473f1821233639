//! Credential gate
//!
//! Checks that an active, non-placeholder credential exists for a
//! provider. A missing credential document counts as inactive: a
//! provider without any credential cannot serve traffic either way.

use crate::config::models::CredentialStatus;
use crate::core::snapshot::ConfigSnapshot;
use tracing::debug;

/// Check the credential status for a provider
pub fn check_credential(snapshot: &ConfigSnapshot, provider: &str) -> CredentialStatus {
    match snapshot.credentials.get(provider) {
        Some(credential) => credential.status,
        None => {
            debug!(provider, "no credential document; treating as inactive");
            CredentialStatus::Inactive
        }
    }
}
