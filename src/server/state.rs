//! Application state management.

use std::sync::Arc;

use crate::stats::FilterPolicy;
use crate::store::ResponseStore;

use super::config::Config;

/// Shared application state: the response store handle and the configured
/// statistics filter policy.
#[derive(Clone)]
pub struct AppState {
    store: Arc<ResponseStore>,
    policy: FilterPolicy,
}

impl AppState {
    /// Create state from configuration. The store's remote backend comes
    /// from the environment; the config only chooses the filter policy.
    pub fn from_config(config: &Config) -> Self {
        Self::with_store(ResponseStore::from_env(), config.stats.filter_policy.into())
    }

    /// Create state around an existing store (tests inject a memory-only
    /// store here).
    pub fn with_store(store: ResponseStore, policy: FilterPolicy) -> Self {
        Self {
            store: Arc::new(store),
            policy,
        }
    }

    pub fn store(&self) -> &Arc<ResponseStore> {
        &self.store
    }

    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }
}
