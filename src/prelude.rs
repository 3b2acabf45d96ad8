//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use tomo_index::prelude::*;
//!
//! let result = score(&[Answer::new(1, 7)])?;
//! let store = ResponseStore::from_env();
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Scoring types
pub use crate::scoring::{
    score, Answer, Contribution, Polarity, Question, ScoreLevel, ScoreResult, ScoringError,
    QUESTIONS,
};

// Share-token types
pub use crate::share::{ShareCodec, TokenError, MAX_TOKEN_AGE_MS};

// Aggregation types
pub use crate::stats::{FilterPolicy, Statistics};
#[cfg(feature = "store")]
pub use crate::stats::{summarize, summarize_with};

// Response store types (requires "store" feature)
#[cfg(feature = "store")]
pub use crate::store::{
    CountOutcome, ReadOutcome, ResponseRecord, ResponseStore, Source, StoreConfig, StoreError,
    WriteOutcome, MAX_RESPONSES,
};
