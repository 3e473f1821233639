//! Immutable configuration snapshots and the atomic-swap cache
//!
//! Every resolution runs against a single `Arc<ConfigSnapshot>` taken at
//! its start, so concurrent resolutions never observe a half-updated
//! configuration. Refreshes build a whole new snapshot and swap it in
//! atomically; in-flight resolutions keep the snapshot they started with.


use crate::config::models::{ProfileRule, ProviderCredential, TagMapping, TierDefaults};
use crate::storage::ConfigStore;
use crate::utils::error::{Result, RouteError};
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// A read-only view of all four configuration document families
#[derive(Debug, Clone, Default)]
pub struct ConfigSnapshot {
    /// Profile rules keyed by profile id
    pub profiles: HashMap<String, ProfileRule>,

    /// The global tag mapping
    pub tags: TagMapping,

    /// Tier defaults per capability class plus the legacy flat pair
    pub tiers: TierDefaults,

    /// Provider credentials keyed by provider name
    pub credentials: HashMap<String, ProviderCredential>,

    /// When this snapshot was loaded from the store
    pub loaded_at: DateTime<Utc>,
}

impl ConfigSnapshot {
    /// An empty snapshot; resolutions against it reach the compiled-in
    /// tier fallback.
    pub fn empty() -> Self {
        Self {
            loaded_at: Utc::now(),
            ..Self::default()
        }
    }
}

/// Shared configuration cache with atomic snapshot swap
///
/// Lifecycle: construct, [`refresh`](Self::refresh) once at startup, then
/// either call `refresh` on demand or spawn
/// [`start_refresh_task`](Self::start_refresh_task). Teardown is aborting
/// the refresh task; the cache itself holds no background state.
pub struct SnapshotCache {
    store: Arc<dyn ConfigStore>,
    current: ArcSwap<ConfigSnapshot>,
    store_timeout: Duration,
}

impl SnapshotCache {
    /// Create a cache over the given store, starting from an empty snapshot
    pub fn new(store: Arc<dyn ConfigStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            current: ArcSwap::from_pointee(ConfigSnapshot::empty()),
            store_timeout,
        }
    }

    /// The snapshot current resolutions should use
    pub fn current(&self) -> Arc<ConfigSnapshot> {
        self.current.load_full()
    }

    /// Fetch all document families and swap the new snapshot in
    ///
    /// On any store error the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<Arc<ConfigSnapshot>> {
        let snapshot = Arc::new(self.fetch().await?);
        self.current.store(Arc::clone(&snapshot));
        debug!(
            profiles = snapshot.profiles.len(),
            credentials = snapshot.credentials.len(),
            "configuration snapshot refreshed"
        );
        Ok(snapshot)
    }

    async fn fetch(&self) -> Result<ConfigSnapshot> {
        let profiles = self.read("profiles", self.store.load_profiles()).await?;
        let tags = self.read("tags", self.store.load_tags()).await?;
        let tiers = self.read("tiers", self.store.load_tiers()).await?;
        let credentials = self
            .read("credentials", self.store.load_credentials())
            .await?;

        Ok(ConfigSnapshot {
            profiles,
            tags,
            tiers,
            credentials,
            loaded_at: Utc::now(),
        })
    }

    async fn read<T>(
        &self,
        family: &'static str,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::time::timeout(self.store_timeout, fut)
            .await
            .map_err(|_| RouteError::Timeout {
                operation: family,
                decision: None,
            })?
    }

    /// Spawn a periodic refresh task; abort the handle to tear down
    pub fn start_refresh_task(self: Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick fires immediately; skip it, the caller
            // already loaded an initial snapshot.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(err) = self.refresh().await {
                    warn!(error = %err, "periodic configuration refresh failed; keeping previous snapshot");
                }
            }
        })
    }
}

impl std::fmt::Debug for SnapshotCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache")
            .field("store_timeout", &self.store_timeout)
            .field("loaded_at", &self.current.load().loaded_at)
            .finish()
    }
}
