//! Provider credential documents
//!
//! One document per provider. The engine consults these read-only on
//! every resolution; it never creates or mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credential lifecycle status
///
/// `Placeholder` lets operators stage a new provider before its real key
/// exists without breaking resolution for existing traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialStatus {
    Active,
    Inactive,
    #[default]
    Placeholder,
}

impl std::fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Placeholder => "placeholder",
        };
        f.write_str(s)
    }
}

impl CredentialStatus {
    /// Whether a credential with this status can serve traffic
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A provider credential document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderCredential {
    pub provider: String,

    #[serde(default)]
    pub status: CredentialStatus,

    /// Opaque reference to the secret; the engine never dereferences it
    #[serde(default, rename = "apiKeyRef")]
    pub api_key_ref: String,

    /// Free-form operator metadata
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProviderCredential {
    pub fn new(provider: impl Into<String>, status: CredentialStatus) -> Self {
        Self {
            provider: provider.into(),
            status,
            api_key_ref: String::new(),
            metadata: serde_json::Value::Null,
            updated_at: None,
        }
    }
}
