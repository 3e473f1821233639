//! Error handling for the routing engine
//!
//! This module defines all error types used throughout the engine.

use crate::config::models::credentials::CredentialStatus;
use crate::core::engine::decision::RouteDecision;
use thiserror::Error;

/// Result type alias for the routing engine
pub type Result<T> = std::result::Result<T, RouteError>;

/// Main error type for the routing engine
///
/// `ProfileNotFound` and `TagUnresolved` are recovered internally by the
/// route assembler's fallback chain; they escape only through the layer
/// resolver functions themselves. `InvocationFailed` and `Timeout` carry
/// the routing decision that was attempted so callers can tell a routing
/// problem apart from a provider problem.
#[derive(Error, Debug)]
pub enum RouteError {
    /// Profile rule missing or inactive
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Indirection tag has no entry in the tag mapping
    #[error("Tag unresolved: {0}")]
    TagUnresolved(String),

    /// Resolved provider has no usable credential
    #[error("Provider unavailable: credential for '{provider}' is {status}")]
    CredentialInactive {
        provider: String,
        status: CredentialStatus,
    },

    /// Configuration store could not be read
    #[error("Configuration store unavailable: {0}")]
    StoreUnavailable(String),

    /// The caller-supplied invocation function returned an error
    #[error("Invocation failed via {}/{}: {message}", .decision.provider, .decision.model)]
    InvocationFailed {
        decision: RouteDecision,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A store read or invocation exceeded its deadline
    #[error("Timed out during {operation}")]
    Timeout {
        operation: &'static str,
        decision: Option<RouteDecision>,
    },
}

impl RouteError {
    /// The routing decision that was attempted, if the error carries one
    pub fn decision(&self) -> Option<&RouteDecision> {
        match self {
            Self::InvocationFailed { decision, .. } => Some(decision),
            Self::Timeout { decision, .. } => decision.as_ref(),
            _ => None,
        }
    }

    /// Whether this is a credential-related refusal
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, Self::CredentialInactive { .. })
    }
}
