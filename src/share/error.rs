//! Error types for the share-token codec.

use thiserror::Error;

/// Reasons a share token fails to encode or verify.
///
/// Decoding failures are ordinary outcomes (expired links get forwarded,
/// query strings get mangled by chat apps) and are surfaced to the UI as
/// user-facing messages; none of them should ever crash the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing share parameter")]
    MissingParameter,

    #[error("Share token has expired")]
    Expired,

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Signature verification failed")]
    SignatureMismatch,

    #[error("Malformed share payload")]
    MalformedPayload,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
