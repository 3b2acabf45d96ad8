//! REST client for the remote list store.
//!
//! The backend speaks the Upstash-style REST protocol: each call POSTs a
//! single command as a JSON array (`["LPUSH", key, value]`) with a bearer
//! token, and the reply wraps the command's result in `{"result": ...}`.
//! Values travel as JSON-serialized strings inside the list.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::config::StoreConfig;
use super::error::StoreError;

/// Reply envelope for a single command.
#[derive(Debug, Deserialize)]
struct CommandReply<T> {
    result: T,
}

/// Minimal list-command client: push-to-head, trim, range-read, length.
pub(crate) struct RemoteListStore {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

impl RemoteListStore {
    /// Build a client from configuration. Returns `None` unless both
    /// endpoint and token are present.
    pub fn from_config(config: &StoreConfig) -> Option<Self> {
        let endpoint = config.url.clone()?;
        let token = config.token.clone()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Some(Self {
            endpoint,
            token,
            client,
        })
    }

    /// Insert a value at the head of the list.
    pub async fn push_head(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // LPUSH replies with the new list length.
        let _: i64 = self.command(&["LPUSH", key, value]).await?;
        Ok(())
    }

    /// Keep only the elements at indices `[start, stop]`.
    pub async fn trim(&self, key: &str, start: i64, stop: i64) -> Result<(), StoreError> {
        let _: String = self
            .command(&["LTRIM", key, &start.to_string(), &stop.to_string()])
            .await?;
        Ok(())
    }

    /// Read the elements at indices `[start, stop]`, head first.
    pub async fn range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        self.command(&["LRANGE", key, &start.to_string(), &stop.to_string()])
            .await
    }

    /// Current list length.
    pub async fn len(&self, key: &str) -> Result<i64, StoreError> {
        self.command(&["LLEN", key]).await
    }

    async fn command<T: DeserializeOwned>(&self, parts: &[&str]) -> Result<T, StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&parts)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedResponse(format!(
                "HTTP {status} from remote store"
            )));
        }

        let reply: CommandReply<T> = response.json().await?;
        Ok(reply.result)
    }
}
