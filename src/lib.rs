//! Core library for the ToMo index diagnostic.
//!
//! Users answer six Likert-scale questions, the scoring engine computes a
//! weighted motivation score, results are appended to a capped shared
//! response log, and completed answer sets can travel inside signed,
//! expiring share URLs that reconstruct a result without any server-side
//! storage.
//!
//! # Quick Start
//!
//! ```ignore
//! use tomo_index::prelude::*;
//!
//! let answers = vec![Answer::new(1, 7), Answer::new(2, 5)];
//! let result = score(&answers)?;
//!
//! let codec = ShareCodec::from_env();
//! let url = codec.encode("https://example.com/results", &answers)?;
//! ```
//!
//! # Modules
//!
//! - [`scoring`] - Weighted scoring engine over the fixed question catalog
//! - [`share`] - Signed, expiring share-token codec (always available)
//! - [`stats`] - Summary statistics over response windows
//! - [`store`] - Capped response log with remote backend and memory fallback
//!   (requires `store` feature)
//! - [`server`] - HTTP API surface (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `store` - Enable the response store module (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

#[cfg(feature = "store")]
mod logging;
pub mod prelude;
pub mod scoring;
#[cfg(feature = "server")]
pub mod server;
pub mod share;
pub mod stats;
#[cfg(feature = "store")]
pub mod store;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export scoring types at crate root for convenience
pub use scoring::{
    score, Answer, Contribution, Polarity, Question, ScoreLevel, ScoreResult, ScoringError,
    QUESTIONS,
};

// Re-export share-token types at crate root for convenience
pub use share::{ShareCodec, TokenError};

// Re-export aggregation types at crate root for convenience
pub use stats::{FilterPolicy, Statistics};
#[cfg(feature = "store")]
pub use stats::{summarize, summarize_with};

// Re-export store types at crate root for convenience
#[cfg(feature = "store")]
pub use store::{
    ResponseRecord, ResponseStore, Source, StoreConfig, StoreError, MAX_RESPONSES,
};
