//! Configuration document models
//!
//! Document shapes are written by external admin and seeding tooling that
//! does not guarantee every field is present, so optional fields
//! deserialize as "unset, fall back" rather than "explicitly empty".

pub mod credentials;
pub mod profile;
pub mod tags;
pub mod tiers;

pub use credentials::{CredentialStatus, ProviderCredential};
pub use profile::{Capabilities, ProfileRule, ProfileStatus, ProviderRef, TAG_ROUTER_SENTINEL};
pub use tags::{TagMapping, TagTarget};
pub use tiers::{TierClass, TierDefaults, TierTarget};
