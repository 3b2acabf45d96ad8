//! Integration tests for the response store.
//!
//! The remote-failure tests point the store at an unroutable endpoint with a
//! short deadline: every remote leg fails fast and the store must degrade to
//! its memory mirror without surfacing an error.

#![cfg(feature = "store")]

use std::sync::Arc;
use std::time::Duration;

use tomo_index::{
    Answer, ResponseRecord, ResponseStore, Source, StoreConfig, MAX_RESPONSES,
};

fn record(total_score: f64) -> ResponseRecord {
    ResponseRecord::from_scores(vec![Answer::new(1, 4)], total_score, total_score, 0.0)
}

/// A store whose remote backend is configured but unreachable.
fn store_with_failing_remote() -> ResponseStore {
    let config = StoreConfig::with_endpoint("http://127.0.0.1:9", "test-token")
        .with_timeouts(Duration::from_millis(300), Duration::from_millis(200));
    ResponseStore::new(config)
}

// =============================================================================
// Memory-Only Store Tests
// =============================================================================

#[tokio::test]
async fn test_write_then_read_recent() {
    let store = ResponseStore::in_memory();

    store.write(record(10.0)).await;
    store.write(record(20.0)).await;

    let outcome = store.read_recent(10).await;
    assert_eq!(outcome.source, Source::Memory);
    assert_eq!(outcome.records.len(), 2);
    // Newest first.
    assert_eq!(outcome.records.first().map(|r| r.total_score), Some(20.0));
}

#[tokio::test]
async fn test_capacity_cap_evicts_oldest() {
    let store = ResponseStore::in_memory();

    for i in 0..=MAX_RESPONSES {
        store.write(record(i as f64)).await;
    }

    let outcome = store.read_all().await;
    assert_eq!(outcome.records.len(), MAX_RESPONSES);
    // The very first write (score 0) fell off the tail; the newest leads.
    assert_eq!(
        outcome.records.first().map(|r| r.total_score),
        Some(MAX_RESPONSES as f64)
    );
    assert_eq!(
        outcome.records.last().map(|r| r.total_score),
        Some(1.0)
    );
}

#[tokio::test]
async fn test_read_recent_clamps_limit() {
    let store = ResponseStore::in_memory();
    store.write(record(1.0)).await;

    let zero = store.read_recent(0).await;
    assert!(zero.records.is_empty());
    assert_eq!(zero.source, Source::Memory);

    let negative = store.read_recent(-7).await;
    assert!(negative.records.is_empty());

    let oversized = store.read_recent(50_000).await;
    assert_eq!(oversized.records.len(), 1);
}

#[tokio::test]
async fn test_count_memory_source() {
    let store = ResponseStore::in_memory();
    store.write(record(1.0)).await;
    store.write(record(2.0)).await;

    let outcome = store.count().await;
    assert_eq!(outcome.count, 2);
    assert_eq!(outcome.source, Source::Memory);
}

#[tokio::test]
async fn test_reset_clears_mirror() {
    let store = ResponseStore::in_memory();
    store.write(record(1.0)).await;
    store.reset();

    assert_eq!(store.count().await.count, 0);
    assert!(store.read_all().await.records.is_empty());
}

// =============================================================================
// Remote Degradation Tests
// =============================================================================

#[tokio::test]
async fn test_write_survives_remote_failure() {
    let store = store_with_failing_remote();

    let outcome = store.write(record(33.0)).await;
    assert!(!outcome.persisted_remotely);

    // The record is still served from the mirror.
    let read = store.read_recent(10).await;
    assert_eq!(read.source, Source::Memory);
    assert_eq!(read.records.len(), 1);
    assert_eq!(read.records.first().map(|r| r.total_score), Some(33.0));
}

#[tokio::test]
async fn test_count_falls_back_to_memory() {
    let store = store_with_failing_remote();

    store.write(record(1.0)).await;
    store.write(record(2.0)).await;

    let outcome = store.count().await;
    assert_eq!(outcome.source, Source::Memory);
    assert_eq!(outcome.count, 2);
}

#[tokio::test]
async fn test_unconfigured_store_is_memory_only() {
    let store = ResponseStore::new(StoreConfig::default());

    let outcome = store.write(record(5.0)).await;
    assert!(!outcome.persisted_remotely);
    assert_eq!(store.read_recent(5).await.source, Source::Memory);
}

#[tokio::test]
async fn test_detached_write_completes() -> anyhow::Result<()> {
    let store = Arc::new(ResponseStore::in_memory());

    let handle = store.write_detached(record(7.0));
    let outcome = handle.await?;
    assert!(!outcome.persisted_remotely);

    assert_eq!(store.count().await.count, 1);
    Ok(())
}
