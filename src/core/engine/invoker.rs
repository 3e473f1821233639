//! Router engine and execution invoker
//!
//! [`RouterEngine`] is the public entry point: it owns the snapshot cache
//! and the resolution policy, resolves capability requests into routing
//! decisions, and passes resolved parameters through to a caller-supplied
//! invocation function.

use crate::core::snapshot::{ConfigSnapshot, SnapshotCache};
use crate::storage::ConfigStore;
use crate::utils::error::{Result, RouteError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::assembler::assemble;
use super::decision::{CapabilityRequest, RouteDecision, RoutedResponse};
use super::policy::RoutePolicy;

/// Error type the caller's invocation function may return
pub type InvokeError = Box<dyn std::error::Error + Send + Sync>;

/// The capability routing engine
///
/// Resolutions are stateless and run against the cached snapshot, so
/// they may execute fully in parallel; the cache swaps snapshots
/// atomically underneath them.
pub struct RouterEngine {
    cache: Arc<SnapshotCache>,
    policy: RoutePolicy,
}

impl RouterEngine {
    /// Create an engine with the default policy
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self::builder().build(store)
    }

    pub fn builder() -> RouterEngineBuilder {
        RouterEngineBuilder::default()
    }

    /// Load the initial configuration snapshot
    pub async fn init(&self) -> Result<()> {
        self.cache.refresh().await?;
        Ok(())
    }

    /// Re-fetch configuration and atomically swap the snapshot
    pub async fn refresh(&self) -> Result<()> {
        self.cache.refresh().await?;
        Ok(())
    }

    /// The snapshot current resolutions use
    pub fn snapshot(&self) -> Arc<ConfigSnapshot> {
        self.cache.current()
    }

    /// Spawn the periodic refresh task; abort the handle to tear down
    pub fn start_refresh_task(&self, interval: Duration) -> tokio::task::JoinHandle<()> {
        Arc::clone(&self.cache).start_refresh_task(interval)
    }

    /// The active resolution policy
    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// Resolve a capability request into a routing decision
    pub fn resolve(&self, request: &CapabilityRequest) -> Result<RouteDecision> {
        let snapshot = self.cache.current();
        let decision = assemble(&snapshot, &self.policy, request)?;
        debug!(
            profile = %request.profile_id,
            provider = %decision.provider,
            model = %decision.model,
            source = %decision.source,
            "route decided"
        );
        Ok(decision)
    }

    /// Resolve and invoke
    ///
    /// Calls `invoke_fn(provider, model, payload, temperature)` under the
    /// policy's invocation deadline. The result or error is propagated
    /// unchanged, annotated with the routing decision that was attempted.
    pub async fn invoke<T, P, F, Fut>(
        &self,
        request: &CapabilityRequest,
        payload: P,
        invoke_fn: F,
    ) -> Result<RoutedResponse<T>>
    where
        F: FnOnce(String, String, P, f64) -> Fut,
        Fut: Future<Output = std::result::Result<T, InvokeError>>,
    {
        let decision = self.resolve(request)?;

        let fut = invoke_fn(
            decision.provider.clone(),
            decision.model.clone(),
            payload,
            decision.temperature,
        );

        let outcome = match self.policy.invoke_timeout {
            Some(deadline) => {
                tokio::time::timeout(deadline, fut)
                    .await
                    .map_err(|_| RouteError::Timeout {
                        operation: "invocation",
                        decision: Some(decision.clone()),
                    })?
            }
            None => fut.await,
        };

        match outcome {
            Ok(result) => Ok(RoutedResponse {
                routing: decision,
                result,
            }),
            Err(err) => Err(RouteError::InvocationFailed {
                message: err.to_string(),
                source: Some(err),
                decision,
            }),
        }
    }
}

impl std::fmt::Debug for RouterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterEngine")
            .field("policy", &self.policy)
            .field("cache", &self.cache)
            .finish()
    }
}

/// Builder for [`RouterEngine`]
#[derive(Debug, Default)]
pub struct RouterEngineBuilder {
    policy: RoutePolicy,
}

impl RouterEngineBuilder {
    /// Enable or disable credential substitution (enabled by default)
    pub fn credential_substitution(mut self, enabled: bool) -> Self {
        self.policy.credential_substitution = enabled;
        self
    }

    /// Deadline for each configuration-store read
    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.policy.store_timeout = timeout;
        self
    }

    /// Deadline for the caller-supplied invocation
    pub fn invoke_timeout(mut self, timeout: Duration) -> Self {
        self.policy.invoke_timeout = Some(timeout);
        self
    }

    /// Capability class assumed when a request leaves it unset
    pub fn default_capability_class(mut self, class: impl Into<String>) -> Self {
        self.policy.default_capability_class = class.into();
        self
    }

    pub fn build(self, store: Arc<dyn ConfigStore>) -> RouterEngine {
        let cache = Arc::new(SnapshotCache::new(store, self.policy.store_timeout));
        RouterEngine {
            cache,
            policy: self.policy,
        }
    }
}
