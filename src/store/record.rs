//! The stored response record and its wire validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logging;
use crate::scoring::{Answer, ScoreResult};

/// One completed diagnostic submission.
///
/// Immutable after creation: records are only ever appended to the log and
/// eventually evicted by capacity. Serialized camelCase, matching the wire
/// format the web client and the remote list store already use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub id: String,
    /// Epoch milliseconds at creation. Insertion order is authoritative for
    /// the log; timestamps can diverge from it under clock skew.
    pub timestamp: i64,
    pub answers: Vec<Answer>,
    pub total_score: f64,
    pub positive_score: f64,
    pub negative_score: f64,
}

impl ResponseRecord {
    /// Create a record from a scored answer set, stamped with a fresh id and
    /// the current time.
    pub fn new(answers: Vec<Answer>, result: &ScoreResult) -> Self {
        Self::from_scores(
            answers,
            result.total_score,
            result.positive_score,
            result.negative_score,
        )
    }

    /// Create a record from already-extracted score fields.
    pub fn from_scores(
        answers: Vec<Answer>,
        total_score: f64,
        positive_score: f64,
        negative_score: f64,
    ) -> Self {
        Self {
            id: new_record_id(),
            timestamp: now_millis(),
            answers,
            total_score,
            positive_score,
            negative_score,
        }
    }

    /// Parse one raw stored entry.
    ///
    /// Returns `None` for anything that does not validate against the record
    /// shape (string id, numeric timestamp and scores, an array of
    /// `{questionId, value}` pairs). A corrupt entry is dropped, never fatal
    /// to the batch it came from.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(record) => Some(record),
            Err(err) => {
                logging::warn!(error = %err, "dropping stored entry that failed validation");
                None
            }
        }
    }
}

fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
