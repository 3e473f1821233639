//! FileStore integration tests

use caproute::{
    CapabilityRequest, ConfigStore, FileStore, RouteError, RouteSource, RouterEngine,
};
use std::sync::Arc;

fn write_reference_config(dir: &std::path::Path) {
    std::fs::write(
        dir.join("profiles.yaml"),
        r#"
- id: agent_researcher
  provider: llm_router
  model_id: reasoning_optimized
  capabilities:
    chat: true
  status: active
- id: agent_retired
  provider: openai
  model_id: gpt-3.5-turbo
  status: inactive
"#,
    )
    .unwrap();

    std::fs::write(
        dir.join("tags.yaml"),
        r#"
reasoning_optimized:
  provider: openai
  model: gpt-4o
"#,
    )
    .unwrap();

    std::fs::write(
        dir.join("tiers.yaml"),
        r#"
text:
  default:
    provider: openai
    model: gpt-4o-mini
  boost:
    provider: deepseek
    model: deepseek-reasoner
    creditMultiplier: 1.5
default:
  provider: openai
  model: gpt-4o-mini
"#,
    )
    .unwrap();

    std::fs::write(
        dir.join("credentials.yaml"),
        r#"
- provider: openai
  status: active
  apiKeyRef: secrets/openai
- provider: deepseek
  status: active
  apiKeyRef: secrets/deepseek
"#,
    )
    .unwrap();
}

#[tokio::test]
async fn resolves_from_yaml_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_reference_config(dir.path());

    let store = Arc::new(FileStore::new(dir.path())) as Arc<dyn ConfigStore>;
    let engine = RouterEngine::new(store);
    engine.init().await.unwrap();

    let decision = engine
        .resolve(&CapabilityRequest::new("agent_researcher").with_tier("creative"))
        .unwrap();
    assert_eq!(decision.provider, "openai");
    assert_eq!(decision.model, "gpt-4o");
    assert_eq!(decision.source, RouteSource::TagResolved);

    // The inactive profile behaves like a missing one.
    let decision = engine
        .resolve(&CapabilityRequest::new("agent_retired").with_tier("boost"))
        .unwrap();
    assert_eq!(decision.model, "deepseek-reasoner");
    assert_eq!(decision.source, RouteSource::TierFallback);
}

#[tokio::test]
async fn missing_files_read_as_empty_families() {
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::new(dir.path());
    assert!(store.load_profiles().await.unwrap().is_empty());
    assert!(store.load_tags().await.unwrap().is_empty());
    assert!(store.load_credentials().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_document_surfaces_store_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tiers.yaml"), ":\n  - not valid yaml: [").unwrap();

    let store = Arc::new(FileStore::new(dir.path())) as Arc<dyn ConfigStore>;
    let engine = RouterEngine::new(store);
    let err = engine.init().await.unwrap_err();
    assert!(matches!(err, RouteError::StoreUnavailable(_)));
}
