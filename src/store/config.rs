//! Response store configuration.

use std::time::Duration;

/// Environment variables naming the remote endpoint, in precedence order.
/// Both the platform-issued and the provider-native names are accepted.
const URL_VARS: [&str; 2] = ["KV_REST_API_URL", "UPSTASH_REDIS_REST_URL"];
const TOKEN_VARS: [&str; 2] = ["KV_REST_API_TOKEN", "UPSTASH_REDIS_REST_TOKEN"];

/// Configuration for the remote leg of the response store.
///
/// Endpoint and token are both required for the remote backend to be used;
/// a store built from a config missing either runs memory-only.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// REST endpoint of the remote list store.
    pub url: Option<String>,
    /// Bearer token for the endpoint.
    pub token: Option<String>,
    /// Total deadline per remote request.
    pub timeout: Duration,
    /// Connection-establishment deadline per remote request.
    pub connect_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl StoreConfig {
    /// Read endpoint and token from the environment; for each, the first
    /// non-empty variable wins.
    pub fn from_env() -> Self {
        Self {
            url: first_non_empty(&URL_VARS),
            token: first_non_empty(&TOKEN_VARS),
            ..Self::default()
        }
    }

    /// Configuration with an explicit endpoint.
    pub fn with_endpoint(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Whether both endpoint and token are present.
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.token.is_some()
    }

    /// Override the request deadlines.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

fn first_non_empty(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}
