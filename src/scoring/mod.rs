//! Weighted scoring engine for the ToMo index diagnostic.
//!
//! Six Likert-scale questions, three weighted positive and three weighted
//! negative, combine into a single motivation score in roughly the -100..+100
//! range. Scoring is pure: no clock, no I/O, and the result does not depend
//! on the order of the input answers.

mod catalog;
mod engine;
mod error;

pub use catalog::{question_by_id, Polarity, Question, QUESTIONS};
pub use engine::{commentary_for, level_for, score, Contribution, ScoreLevel, ScoreResult};
pub use error::ScoringError;

use serde::{Deserialize, Serialize};

/// A single Likert answer: which question, and the chosen rating.
///
/// Valid ratings are 1-7; the value 0 is the "unanswered" sentinel used by
/// form defaults and is excluded by some aggregation filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub value: u8,
}

impl Answer {
    /// Create an answer for a question.
    pub fn new(question_id: u32, value: u8) -> Self {
        Self { question_id, value }
    }
}
