//! # caproute
//!
//! Capability routing and configuration resolution engine for multi-agent
//! platforms. Agents request an abstract capability ("high reasoning",
//! "fast/cheap text", "image generation") and the engine resolves it into
//! a concrete, invocable configuration (provider, model, temperature,
//! cost multiplier and a valid credential) across four independently
//! editable configuration layers with deterministic precedence and safe
//! fallback.
//!
//! ## Resolution layers
//!
//! 1. **Profile rules**: per-agent, either a concrete provider/model or
//!    an abstract indirection tag
//! 2. **Tag mapping**: tag to provider/model, edited independently
//! 3. **Tier defaults**: per capability class and quality tier, with a
//!    compiled-in ultimate fallback so resolution never comes up empty
//! 4. **Provider credentials**: gate on an active credential, with an
//!    optional substitution escape hatch for staged providers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use caproute::{CapabilityRequest, CredentialStatus, MemoryStore, RouterEngine};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     store.put_tag("reasoning_optimized", "openai", "gpt-4o");
//!     store.put_credential_status("openai", CredentialStatus::Active);
//!
//!     let engine = RouterEngine::new(store);
//!     engine.init().await?;
//!
//!     let request = CapabilityRequest::new("summarizer").with_tier("boost");
//!     let decision = engine.resolve(&request)?;
//!     println!("route: {}/{} ({})", decision.provider, decision.model, decision.source);
//!
//!     let response = engine
//!         .invoke(&request, "payload", |provider, model, payload, _temp| async move {
//!             Ok(format!("{provider}/{model}: {payload}"))
//!         })
//!         .await?;
//!     println!("result: {}", response.result);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::models::{
    Capabilities, CredentialStatus, ProfileRule, ProfileStatus, ProviderCredential, ProviderRef,
    TAG_ROUTER_SENTINEL, TagMapping, TagTarget, TierDefaults, TierTarget,
};
pub use config::{FindingKind, ValidationFinding, validate_snapshot};
pub use core::engine::{
    CapabilityRequest, InvokeError, RouteDecision, RoutePolicy, RouteSource, RoutedResponse,
    RouterEngine, RouterEngineBuilder,
};
pub use core::snapshot::{ConfigSnapshot, SnapshotCache};
pub use storage::{ConfigStore, FileStore, MemoryStore};
pub use utils::error::{Result, RouteError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
