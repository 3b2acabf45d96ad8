//! In-process memory mirror of the response log.

use std::sync::Mutex;

use super::record::ResponseRecord;
use super::store::MAX_RESPONSES;

/// Newest-first, capacity-bounded record list.
///
/// Serves reads when the remote backend is absent or failing, and shadows it
/// the rest of the time. Interior mutability keeps the owning store shareable
/// behind an `Arc` without external locking.
pub(crate) struct MemoryLog {
    records: Mutex<Vec<ResponseRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Insert at the head, evicting from the tail past capacity.
    pub fn push_head(&self, record: ResponseRecord) {
        let mut records = self.lock();
        records.insert(0, record);
        records.truncate(MAX_RESPONSES);
    }

    /// Merge a batch fetched from the remote store: fetched entries first in
    /// their given order, then existing entries not in the batch,
    /// de-duplicated by id and capacity-truncated.
    pub fn merge(&self, fetched: &[ResponseRecord]) {
        if fetched.is_empty() {
            return;
        }

        let mut records = self.lock();
        let mut merged: Vec<ResponseRecord> = Vec::with_capacity(fetched.len() + records.len());

        for record in fetched {
            if !merged.iter().any(|r| r.id == record.id) {
                merged.push(record.clone());
            }
        }
        for existing in records.drain(..) {
            if !merged.iter().any(|r| r.id == existing.id) {
                merged.push(existing);
            }
        }

        merged.truncate(MAX_RESPONSES);
        *records = merged;
    }

    /// The newest `limit` records.
    pub fn recent(&self, limit: usize) -> Vec<ResponseRecord> {
        let records = self.lock();
        records.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ResponseRecord>> {
        // A poisoned mirror still holds consistent data; keep serving it.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ResponseRecord {
        ResponseRecord {
            id: id.to_string(),
            timestamp: 0,
            answers: Vec::new(),
            total_score: 1.0,
            positive_score: 1.0,
            negative_score: 0.0,
        }
    }

    #[test]
    fn test_push_head_orders_newest_first() {
        let log = MemoryLog::new();
        log.push_head(record("a"));
        log.push_head(record("b"));

        let recent = log.recent(10);
        assert_eq!(recent.first().map(|r| r.id.as_str()), Some("b"));
        assert_eq!(recent.get(1).map(|r| r.id.as_str()), Some("a"));
    }

    #[test]
    fn test_capacity_evicts_tail() {
        let log = MemoryLog::new();
        for i in 0..=MAX_RESPONSES {
            log.push_head(record(&format!("r{i}")));
        }

        assert_eq!(log.len(), MAX_RESPONSES);
        let recent = log.recent(MAX_RESPONSES);
        // Newest still at the head, the very first write evicted.
        assert_eq!(
            recent.first().map(|r| r.id.clone()),
            Some(format!("r{MAX_RESPONSES}"))
        );
        assert!(!recent.iter().any(|r| r.id == "r0"));
    }

    #[test]
    fn test_merge_dedups_and_preserves_existing() {
        let log = MemoryLog::new();
        log.push_head(record("old"));
        log.push_head(record("shared"));

        log.merge(&[record("new"), record("shared")]);

        let recent = log.recent(10);
        let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        // Fetched order first, then surviving existing entries.
        assert_eq!(ids, vec!["new", "shared", "old"]);
    }

    #[test]
    fn test_merge_empty_batch_is_noop() {
        let log = MemoryLog::new();
        log.push_head(record("a"));
        log.merge(&[]);
        assert_eq!(log.len(), 1);
    }
}
