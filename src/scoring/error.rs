//! Error types for the scoring engine.

use thiserror::Error;

/// Errors that can occur when scoring an answer set.
///
/// [`ScoringError::UnknownQuestion`] signals a contract violation by the
/// caller, not bad external input: no valid answer-collection path can
/// produce a question id outside the catalog. It is the one error in this
/// crate that should propagate instead of being absorbed.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Unknown question id: {0}")]
    UnknownQuestion(u32),
}
