//! Tier defaults document
//!
//! Quality-tier defaults per capability class, used when a profile rule is
//! absent or as the final fallback. The document also carries a flat
//! `default`/`boost` pair kept for older configuration shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_multiplier() -> f64 {
    1.0
}

/// One tier entry: provider, model and the cost multiplier applied to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTarget {
    pub provider: String,
    pub model: String,

    #[serde(rename = "creditMultiplier", default = "default_multiplier")]
    pub credit_multiplier: f64,

    /// Optional tier-level temperature; lowest precedence in the merge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl TierTarget {
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        credit_multiplier: f64,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            credit_multiplier,
            temperature: None,
        }
    }
}

/// Tiers of a single capability class, keyed by tier name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierClass {
    #[serde(flatten)]
    tiers: BTreeMap<String, TierTarget>,
}

impl TierClass {
    pub fn get(&self, tier: &str) -> Option<&TierTarget> {
        self.tiers.get(tier)
    }

    pub fn insert(&mut self, tier: impl Into<String>, target: TierTarget) {
        self.tiers.insert(tier.into(), target);
    }
}

/// The tier defaults document
///
/// `default` and `boost` are the legacy flat pair; named capability
/// classes live in the flattened map alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<TierTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost: Option<TierTarget>,

    #[serde(flatten)]
    classes: BTreeMap<String, TierClass>,
}

impl TierDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a capability class
    pub fn class(&self, name: &str) -> Option<&TierClass> {
        self.classes.get(name)
    }

    /// Register a tier entry under a capability class (seeding surface; tests)
    pub fn insert(
        &mut self,
        class: impl Into<String>,
        tier: impl Into<String>,
        target: TierTarget,
    ) {
        self.classes.entry(class.into()).or_default().insert(tier, target);
    }

    /// Legacy flat entry for the given tier name (`boost` or anything else)
    pub fn legacy(&self, tier: &str) -> Option<&TierTarget> {
        if tier == "boost" {
            self.boost.as_ref().or(self.default.as_ref())
        } else {
            self.default.as_ref()
        }
    }

    /// Iterate over all (class, tier, target) triples
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &TierTarget)> {
        self.classes.iter().flat_map(|(class, tiers)| {
            tiers
                .tiers
                .iter()
                .map(move |(tier, target)| (class.as_str(), tier.as_str(), target))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shape_with_classes_and_legacy_pair() {
        let tiers: TierDefaults = serde_yaml::from_str(
            r#"
text:
  default:
    provider: deepseek
    model: deepseek-chat
  boost:
    provider: deepseek
    model: deepseek-reasoner
    creditMultiplier: 1.5
default:
  provider: openai
  model: gpt-4o-mini
boost:
  provider: openai
  model: gpt-4o
  creditMultiplier: 2.0
"#,
        )
        .unwrap();

        let boost = tiers.class("text").unwrap().get("boost").unwrap();
        assert_eq!(boost.model, "deepseek-reasoner");
        assert_eq!(boost.credit_multiplier, 1.5);

        // Multiplier defaults to 1.0 when the document omits it.
        let default = tiers.class("text").unwrap().get("default").unwrap();
        assert_eq!(default.credit_multiplier, 1.0);

        assert_eq!(tiers.legacy("boost").unwrap().model, "gpt-4o");
        assert_eq!(tiers.legacy("economy").unwrap().model, "gpt-4o-mini");
    }

    #[test]
    fn test_legacy_lookup_on_empty_document() {
        let tiers = TierDefaults::new();
        assert!(tiers.legacy("default").is_none());
        assert!(tiers.legacy("boost").is_none());
    }
}
