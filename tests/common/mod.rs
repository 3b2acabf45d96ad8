//! Common test utilities and fixtures.
//!
//! This module provides a shared harness and helpers to reduce duplication
//! across the integration test suite.

#![cfg(feature = "server")]

use axum_test::TestServer;
use serde_json::{json, Value};
use tomo_index::server::{router, AppState};
use tomo_index::{FilterPolicy, ResponseStore};

/// Test application wrapping the API router around a memory-only store.
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Build an app with the canonical filter policy.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_policy(FilterPolicy::NonZeroTotal)
    }

    /// Build an app with an explicit filter policy.
    pub fn with_policy(policy: FilterPolicy) -> anyhow::Result<Self> {
        let state = AppState::with_store(ResponseStore::in_memory(), policy);
        let server = TestServer::new(router(state))?;
        Ok(Self { server })
    }

    /// Submit a six-answer response with the given total score (the other
    /// score fields are derived well enough for statistics tests).
    pub async fn submit(&self, total_score: f64) -> Value {
        let body = submission(total_score);
        let response = self.server.post("/api/responses").json(&body).await;
        response.assert_status_ok();
        response.json()
    }
}

/// A well-formed submission body.
pub fn submission(total_score: f64) -> Value {
    json!({
        "answers": [
            {"questionId": 1, "value": 4},
            {"questionId": 2, "value": 4},
            {"questionId": 3, "value": 4},
            {"questionId": 4, "value": 4},
            {"questionId": 5, "value": 4},
            {"questionId": 6, "value": 4}
        ],
        "result": {
            "totalScore": total_score,
            "positiveScore": total_score.max(0.0),
            "negativeScore": (-total_score).max(0.0)
        }
    })
}
