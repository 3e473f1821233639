//! Tier resolver tests
//!
//! The tier resolver must always return a target, so most of these tests
//! walk the fallback ladder: exact tier, class default, legacy flat pair,
//! compiled-in ultimate fallback.

use super::fixtures::{add_tier, snapshot};
use crate::config::models::TierTarget;
use crate::core::engine::tier::{ULTIMATE_FALLBACK, resolve_tier};

#[test]
fn test_exact_class_and_tier() {
    let mut s = snapshot();
    add_tier(&mut s, "text", "boost", "deepseek", "deepseek-reasoner", 1.5);
    add_tier(&mut s, "text", "default", "deepseek", "deepseek-chat", 1.0);

    let target = resolve_tier(&s, "text", "boost");
    assert_eq!(target.provider, "deepseek");
    assert_eq!(target.model, "deepseek-reasoner");
    assert_eq!(target.credit_multiplier, 1.5);
}

#[test]
fn test_unknown_tier_falls_back_to_class_default() {
    let mut s = snapshot();
    add_tier(&mut s, "text", "default", "deepseek", "deepseek-chat", 1.0);

    let target = resolve_tier(&s, "text", "creative");
    assert_eq!(target.model, "deepseek-chat");
}

#[test]
fn test_unknown_class_falls_back_to_legacy_pair() {
    let mut s = snapshot();
    s.tiers.default = Some(TierTarget::new("openai", "gpt-4o-mini", 1.0));
    s.tiers.boost = Some(TierTarget::new("openai", "gpt-4o", 2.0));

    let default = resolve_tier(&s, "audio", "default");
    assert_eq!(default.model, "gpt-4o-mini");

    let boost = resolve_tier(&s, "audio", "boost");
    assert_eq!(boost.model, "gpt-4o");
    assert_eq!(boost.credit_multiplier, 2.0);
}

#[test]
fn test_legacy_boost_missing_uses_legacy_default() {
    let mut s = snapshot();
    s.tiers.default = Some(TierTarget::new("openai", "gpt-4o-mini", 1.0));

    let boost = resolve_tier(&s, "audio", "boost");
    assert_eq!(boost.model, "gpt-4o-mini");
}

#[test]
fn test_empty_document_uses_compiled_in_fallback() {
    let s = snapshot();

    let target = resolve_tier(&s, "text", "default");
    assert_eq!(target, *ULTIMATE_FALLBACK);
    assert_eq!(target.credit_multiplier, 1.0);
}

#[test]
fn test_class_without_default_tier_falls_through_to_legacy() {
    let mut s = snapshot();
    add_tier(&mut s, "text", "economy", "groq", "llama-3.3-70b", 0.5);
    s.tiers.default = Some(TierTarget::new("openai", "gpt-4o-mini", 1.0));

    // Tier "boost" is unknown for "text" and the class has no "default"
    // entry, so the legacy flat pair applies.
    let target = resolve_tier(&s, "text", "boost");
    assert_eq!(target.model, "gpt-4o-mini");
}
