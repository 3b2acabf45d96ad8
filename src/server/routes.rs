//! API routes and handlers.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::Answer;
use crate::stats::{summarize, Statistics};
use crate::store::ResponseRecord;

use super::{error::ApiError, state::AppState};

/// Window size for statistics when the client does not ask for one.
const DEFAULT_STATS_COUNT: i64 = 30;

/// Build the API router.
///
/// `/api/simple-db` is the legacy path of the same endpoint pair; older
/// deployed clients still call it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/responses", get(get_statistics).post(save_response))
        .route("/api/simple-db", get(get_statistics).post(save_response))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Successful submission reply.
#[derive(Debug, Serialize)]
struct SaveReply {
    success: bool,
    id: String,
}

/// Accept a completed submission and append it to the response log.
///
/// The body is validated by hand rather than through a typed extractor:
/// `answers` must be an array (400 otherwise) but its entries are sanitized
/// individually, dropping anything non-numeric instead of rejecting the
/// whole submission; the three score fields must be numeric (400 otherwise).
async fn save_response(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SaveReply>, ApiError> {
    let raw_answers = body
        .get("answers")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::validation("answers must be an array"))?;
    let answers = sanitize_answers(raw_answers);

    let result = body
        .get("result")
        .ok_or_else(|| ApiError::validation("result is required"))?;
    let total_score = numeric_field(result, "totalScore")?;
    let positive_score = numeric_field(result, "positiveScore")?;
    let negative_score = numeric_field(result, "negativeScore")?;

    let record =
        ResponseRecord::from_scores(answers, total_score, positive_score, negative_score);
    let id = record.id.clone();

    state.store().write(record).await;

    Ok(Json(SaveReply { success: true, id }))
}

/// Query parameters for the statistics endpoint.
#[derive(Debug, Deserialize, Default)]
struct StatsQuery {
    /// Window size; kept as a string so a non-numeric value falls back to
    /// the default instead of failing extraction.
    count: Option<String>,
}

/// Summarize the most recent responses.
async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Statistics>, ApiError> {
    let count = query
        .count
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_STATS_COUNT);

    let outcome = state.store().read_recent(count).await;
    let stats = summarize(&outcome.records, state.policy());

    Ok(Json(stats))
}

/// Coerce raw answer entries to `{questionId, value}` pairs, dropping any
/// entry whose fields are not finite numbers.
fn sanitize_answers(raw: &[Value]) -> Vec<Answer> {
    raw.iter()
        .filter_map(|entry| {
            let question_id = entry.get("questionId").and_then(Value::as_f64)?;
            let value = entry.get("value").and_then(Value::as_f64)?;
            if !question_id.is_finite() || !value.is_finite() {
                return None;
            }
            Some(Answer::new(question_id as u32, value as u8))
        })
        .collect()
}

fn numeric_field(result: &Value, name: &str) -> Result<f64, ApiError> {
    result
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| ApiError::validation(format!("result.{name} must be numeric")))
}
