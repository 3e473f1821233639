//! Capability resolution engine
//!
//! Resolves a logical capability request (profile id plus optional
//! quality tier) into a concrete, invocable routing decision across four
//! configuration layers with deterministic precedence and safe fallback.
//!
//! ## Module Structure
//!
//! - `decision` - Request, decision and response contracts
//! - `policy` - Resolution policy knobs and compiled-in defaults
//! - `profile` - Profile resolver (layer 1)
//! - `tag` - Tag resolver (layer 2, indirection)
//! - `tier` - Tier resolver (layer 3, resolver of last resort)
//! - `credential` - Credential gate (layer 4)
//! - `assembler` - The orchestrating state machine
//! - `invoker` - `RouterEngine` entry point and execution invoker

pub mod assembler;
pub mod credential;
pub mod decision;
pub mod invoker;
pub mod policy;
pub mod profile;
pub mod tag;
pub mod tier;

#[cfg(test)]
mod tests;

pub use assembler::assemble;
pub use credential::check_credential;
pub use decision::{CapabilityRequest, RouteDecision, RouteSource, RoutedResponse};
pub use invoker::{InvokeError, RouterEngine, RouterEngineBuilder};
pub use policy::{DEFAULT_CAPABILITY_CLASS, DEFAULT_TEMPERATURE, DEFAULT_TIER, RoutePolicy};
pub use profile::resolve_profile;
pub use tag::resolve_tag;
pub use tier::{ULTIMATE_FALLBACK, resolve_tier};
