//! File-backed configuration store
//!
//! Reads the four document families from YAML files in a directory:
//! `profiles.yaml` (a list of profile rules), `tags.yaml`, `tiers.yaml`
//! and `credentials.yaml` (a list of provider credentials). A missing
//! file yields an empty family; a file that fails to parse surfaces
//! `StoreUnavailable` rather than a guessed configuration.

use super::ConfigStore;
use crate::config::models::{ProfileRule, ProviderCredential, TagMapping, TierDefaults};
use crate::utils::error::{Result, RouteError};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// YAML-directory [`ConfigStore`] implementation
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    async fn load_file<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.dir.join(name);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(file = name, "configuration file absent; treating family as empty");
                return Ok(None);
            }
            Err(err) => {
                return Err(RouteError::StoreUnavailable(format!(
                    "failed to read {}: {}",
                    path.display(),
                    err
                )));
            }
        };

        serde_yaml::from_str(&content)
            .map(Some)
            .map_err(|err| {
                RouteError::StoreUnavailable(format!("failed to parse {}: {}", path.display(), err))
            })
    }
}

#[async_trait::async_trait]
impl ConfigStore for FileStore {
    async fn load_profiles(&self) -> Result<HashMap<String, ProfileRule>> {
        let rules: Vec<ProfileRule> = self.load_file("profiles.yaml").await?.unwrap_or_default();
        Ok(rules.into_iter().map(|r| (r.id.clone(), r)).collect())
    }

    async fn load_tags(&self) -> Result<TagMapping> {
        Ok(self.load_file("tags.yaml").await?.unwrap_or_default())
    }

    async fn load_tiers(&self) -> Result<TierDefaults> {
        Ok(self.load_file("tiers.yaml").await?.unwrap_or_default())
    }

    async fn load_credentials(&self) -> Result<HashMap<String, ProviderCredential>> {
        let creds: Vec<ProviderCredential> =
            self.load_file("credentials.yaml").await?.unwrap_or_default();
        Ok(creds.into_iter().map(|c| (c.provider.clone(), c)).collect())
    }
}
