//! Unified error type for the tomo-index library.
//!
//! This module provides a single [`Error`] type that encompasses all errors
//! that can occur in the library, making it easier to handle errors in
//! application code.

use thiserror::Error;

use crate::scoring::ScoringError;
use crate::share::TokenError;
#[cfg(feature = "store")]
use crate::store::StoreError;

/// Unified error type for all tomo-index operations.
///
/// This enum wraps all module-specific error types, allowing callers to
/// use a single error type throughout their application.
///
/// # Example
///
/// ```ignore
/// use tomo_index::{Result, score, Answer};
///
/// fn do_something() -> Result<()> {
///     let result = score(&[Answer::new(1, 7)])?;
///     println!("{}", result.total_score);
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the scoring engine (caller-bug precondition violation).
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// Error from share-token encoding or verification.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Error from response store operations.
    #[cfg(feature = "store")]
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a scoring error.
    pub fn is_scoring(&self) -> bool {
        matches!(self, Self::Scoring(_))
    }

    /// Returns `true` if this is a share-token error.
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Returns `true` if this is a store error.
    #[cfg(feature = "store")]
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
