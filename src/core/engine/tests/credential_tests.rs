//! Credential gate tests

use super::fixtures::{add_credential, snapshot};
use crate::config::models::CredentialStatus;
use crate::core::engine::credential::check_credential;

#[test]
fn test_statuses_pass_through() {
    let mut s = snapshot();
    add_credential(&mut s, "openai", CredentialStatus::Active);
    add_credential(&mut s, "anthropic", CredentialStatus::Inactive);
    add_credential(&mut s, "deepseek", CredentialStatus::Placeholder);

    assert_eq!(check_credential(&s, "openai"), CredentialStatus::Active);
    assert_eq!(check_credential(&s, "anthropic"), CredentialStatus::Inactive);
    assert_eq!(check_credential(&s, "deepseek"), CredentialStatus::Placeholder);
}

#[test]
fn test_missing_credential_is_inactive() {
    let s = snapshot();

    assert_eq!(check_credential(&s, "openai"), CredentialStatus::Inactive);
}

#[test]
fn test_only_active_is_usable() {
    assert!(CredentialStatus::Active.is_usable());
    assert!(!CredentialStatus::Inactive.is_usable());
    assert!(!CredentialStatus::Placeholder.is_usable());
}
