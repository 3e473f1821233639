//! Profile rule documents
//!
//! A profile rule maps an agent's runtime profile to either a concrete
//! provider/model pair or an abstract indirection tag resolved later
//! against the tag mapping.

use serde::{Deserialize, Serialize};

/// Sentinel value in `provider` meaning "resolve `model_id` as a tag"
pub const TAG_ROUTER_SENTINEL: &str = "llm_router";

/// Profile rule status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    #[default]
    Active,
    Inactive,
}

/// Capability flags declared by a profile
///
/// Flags a profile does not declare default to false; the capability class
/// projection is what tier-default lookups key on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Capabilities {
    pub chat: bool,
    pub image_generation: bool,
}

impl Capabilities {
    /// Coarse capability class used to select tier defaults
    pub fn capability_class(&self) -> &'static str {
        if self.image_generation { "image" } else { "text" }
    }
}

/// What a profile rule resolves to, with the sentinel made explicit
///
/// Matching on this enum forces the route assembler to handle both the
/// direct and the indirect case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderRef<'a> {
    /// Profile names a concrete provider and model
    Direct { provider: &'a str, model: &'a str },
    /// Profile defers to the tag mapping via an abstract tag
    Indirect { tag: &'a str },
}

/// A single profile rule document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRule {
    /// Profile identifier (document key)
    pub id: String,

    /// Concrete vendor name, or [`TAG_ROUTER_SENTINEL`]
    pub provider: String,

    /// Concrete model name, or an abstract tag when the sentinel is set
    pub model_id: String,

    /// Optional temperature override; outranks tier defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Optional cost multiplier override; outranks tier defaults
    #[serde(
        default,
        rename = "creditMultiplier",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_multiplier: Option<f64>,

    #[serde(default)]
    pub capabilities: Capabilities,

    #[serde(default)]
    pub status: ProfileStatus,
}

impl ProfileRule {
    /// Interpret the provider/model pair, resolving the sentinel
    pub fn provider_ref(&self) -> ProviderRef<'_> {
        if self.provider == TAG_ROUTER_SENTINEL {
            ProviderRef::Indirect {
                tag: &self.model_id,
            }
        } else {
            ProviderRef::Direct {
                provider: &self.provider,
                model: &self.model_id,
            }
        }
    }

    /// Whether the rule participates in resolution
    pub fn is_active(&self) -> bool {
        self.status == ProfileStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_indirect() {
        let rule: ProfileRule = serde_yaml::from_str(
            r#"
id: agent_researcher
provider: llm_router
model_id: reasoning_optimized
"#,
        )
        .unwrap();

        assert_eq!(
            rule.provider_ref(),
            ProviderRef::Indirect {
                tag: "reasoning_optimized"
            }
        );
    }

    #[test]
    fn test_concrete_provider_maps_to_direct() {
        let rule: ProfileRule = serde_yaml::from_str(
            r#"
id: summarizer
provider: anthropic
model_id: claude-sonnet-4
capabilities:
  chat: true
status: active
"#,
        )
        .unwrap();

        assert_eq!(
            rule.provider_ref(),
            ProviderRef::Direct {
                provider: "anthropic",
                model: "claude-sonnet-4"
            }
        );
        assert!(rule.is_active());
    }

    #[test]
    fn test_missing_fields_read_as_unset() {
        // Seeding tooling does not guarantee every field; absent optional
        // fields must deserialize as unset, not as empty values.
        let rule: ProfileRule = serde_yaml::from_str(
            r#"
id: bare
provider: openai
model_id: gpt-4o
"#,
        )
        .unwrap();

        assert_eq!(rule.temperature, None);
        assert_eq!(rule.credit_multiplier, None);
        assert_eq!(rule.status, ProfileStatus::Active);
        assert_eq!(rule.capabilities.capability_class(), "text");
    }

    #[test]
    fn test_image_capability_class() {
        let caps: Capabilities = serde_yaml::from_str("imageGeneration: true").unwrap();
        assert_eq!(caps.capability_class(), "image");
    }
}
