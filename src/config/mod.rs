//! Configuration documents for the routing engine
//!
//! This module defines the four document families the engine reads
//! (profile rules, tag mappings, tier defaults and provider credentials)
//! plus a validation pass over a loaded snapshot. All documents are owned
//! by the external configuration store; the engine never mutates them.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::{FindingKind, ValidationFinding, validate_snapshot};
