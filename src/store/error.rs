//! Error types for the response store.

use thiserror::Error;

/// Failures on the remote leg of a store operation.
///
/// These never reach callers of [`super::ResponseStore`]: the store catches
/// them at its boundary, logs the degradation once per cause, and serves the
/// operation from memory instead. The type is public so consumers embedding
/// the remote client directly can still name it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Remote store is not configured")]
    NotConfigured,

    #[error("Remote request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected remote response: {0}")]
    UnexpectedResponse(String),
}
