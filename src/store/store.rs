//! The response store: remote primary, memory fallback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::logging;

use super::config::StoreConfig;
use super::error::StoreError;
use super::memory::MemoryLog;
use super::record::ResponseRecord;
use super::remote::RemoteListStore;

/// Capacity of the response log, on both backends.
pub const MAX_RESPONSES: usize = 1000;

/// List key under which records live in the remote store.
const RESPONSES_KEY: &str = "tomo_responses";

/// Which backend actually served an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Memory,
}

/// Result of a write: the memory leg always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub persisted_remotely: bool,
}

/// Result of a bounded read.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutcome {
    pub records: Vec<ResponseRecord>,
    pub source: Source,
}

/// Result of a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOutcome {
    pub count: usize,
    pub source: Source,
}

/// Append-capped response log over two interchangeable backends.
///
/// Constructed once at process start and passed by handle to all callers;
/// there is no ambient singleton. All state (the mirror and the two
/// degradation flags) lives inside the store and resets with
/// [`ResponseStore::reset`].
///
/// No operation on this type returns an error: remote problems degrade to
/// the memory mirror, and each distinct degradation cause (missing
/// configuration vs. failing operations) is logged at most once per store
/// lifetime.
pub struct ResponseStore {
    remote: Option<RemoteListStore>,
    memory: MemoryLog,
    missing_config_logged: AtomicBool,
    failure_logged: AtomicBool,
}

impl ResponseStore {
    /// Build a store from configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            remote: RemoteListStore::from_config(&config),
            memory: MemoryLog::new(),
            missing_config_logged: AtomicBool::new(false),
            failure_logged: AtomicBool::new(false),
        }
    }

    /// Build a store from the environment (see [`StoreConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(StoreConfig::from_env())
    }

    /// An explicitly memory-only store (development, tests).
    pub fn in_memory() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Append a record.
    ///
    /// The memory mirror is updated first, unconditionally, so it stays
    /// self-consistent under remote failure; the remote push + trim runs
    /// after. The outcome reports whether the remote leg succeeded.
    pub async fn write(&self, record: ResponseRecord) -> WriteOutcome {
        self.memory.push_head(record.clone());

        let Some(remote) = self.remote() else {
            return WriteOutcome {
                persisted_remotely: false,
            };
        };

        let payload = match serde_json::to_string(&record) {
            Ok(payload) => payload,
            Err(err) => {
                logging::warn!(error = %err, "failed to serialize record for remote write");
                return WriteOutcome {
                    persisted_remotely: false,
                };
            }
        };

        match remote.push_head(RESPONSES_KEY, &payload).await {
            Ok(()) => {
                // Push + trim is two commands, not atomic across writers:
                // concurrent writers can transiently exceed the cap by their
                // count. Trim failure leaves extra tail entries behind; the
                // next successful write trims them again.
                if let Err(err) = remote.trim(RESPONSES_KEY, 0, MAX_RESPONSES as i64 - 1).await {
                    self.warn_remote_failure("trim", &err);
                }
                WriteOutcome {
                    persisted_remotely: true,
                }
            }
            Err(err) => {
                self.warn_remote_failure("write", &err);
                WriteOutcome {
                    persisted_remotely: false,
                }
            }
        }
    }

    /// Spawn a write without blocking the caller.
    ///
    /// The returned handle can be awaited by consumers that want eventual
    /// confirmation; dropping it is the fire-and-forget path.
    pub fn write_detached(
        self: &Arc<Self>,
        record: ResponseRecord,
    ) -> tokio::task::JoinHandle<WriteOutcome> {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.write(record).await })
    }

    /// Read the newest `limit` records.
    ///
    /// `limit` is clamped into `[0, 1000]`; zero or negative limits return
    /// an empty result from the memory source. On the remote path each raw
    /// entry is validated independently (corrupt entries are dropped) and
    /// the fetched batch is merged into the memory mirror.
    pub async fn read_recent(&self, limit: i64) -> ReadOutcome {
        let limit = normalize_limit(limit);
        if limit == 0 {
            return ReadOutcome {
                records: Vec::new(),
                source: Source::Memory,
            };
        }

        let Some(remote) = self.remote() else {
            return self.read_memory(limit);
        };

        match remote.range(RESPONSES_KEY, 0, limit as i64 - 1).await {
            Ok(raw_entries) => {
                let records: Vec<ResponseRecord> = raw_entries
                    .iter()
                    .filter_map(|raw| ResponseRecord::parse(raw))
                    .collect();

                self.memory.merge(&records);

                ReadOutcome {
                    records,
                    source: Source::Remote,
                }
            }
            Err(err) => {
                self.warn_remote_failure("read", &err);
                self.read_memory(limit)
            }
        }
    }

    /// Read the whole log (capacity-bounded).
    pub async fn read_all(&self) -> ReadOutcome {
        self.read_recent(MAX_RESPONSES as i64).await
    }

    /// Count stored records, capped at capacity.
    pub async fn count(&self) -> CountOutcome {
        let Some(remote) = self.remote() else {
            return CountOutcome {
                count: self.memory.len(),
                source: Source::Memory,
            };
        };

        match remote.len(RESPONSES_KEY).await {
            Ok(len) => CountOutcome {
                count: (len.max(0) as usize).min(MAX_RESPONSES),
                source: Source::Remote,
            },
            Err(err) => {
                self.warn_remote_failure("count", &err);
                CountOutcome {
                    count: self.memory.len(),
                    source: Source::Memory,
                }
            }
        }
    }

    /// Clear the memory mirror and re-arm the degradation logs.
    ///
    /// Explicit test/reset lifecycle; process restart is the only other way
    /// to drop this state.
    pub fn reset(&self) {
        self.memory.clear();
        self.missing_config_logged.store(false, Ordering::Relaxed);
        self.failure_logged.store(false, Ordering::Relaxed);
    }

    fn read_memory(&self, limit: usize) -> ReadOutcome {
        ReadOutcome {
            records: self.memory.recent(limit),
            source: Source::Memory,
        }
    }

    fn remote(&self) -> Option<&RemoteListStore> {
        match &self.remote {
            Some(remote) => Some(remote),
            None => {
                if !self.missing_config_logged.swap(true, Ordering::Relaxed) {
                    logging::warn!(
                        "remote store environment variables are missing, \
                         falling back to in-memory storage"
                    );
                }
                None
            }
        }
    }

    fn warn_remote_failure(&self, action: &str, err: &StoreError) {
        if !self.failure_logged.swap(true, Ordering::Relaxed) {
            logging::warn!(
                action = action,
                error = %err,
                "remote store operation failed, using in-memory fallback"
            );
        }
    }
}

fn normalize_limit(limit: i64) -> usize {
    if limit <= 0 {
        0
    } else {
        (limit as usize).min(MAX_RESPONSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_limit_clamps() {
        assert_eq!(normalize_limit(-5), 0);
        assert_eq!(normalize_limit(0), 0);
        assert_eq!(normalize_limit(30), 30);
        assert_eq!(normalize_limit(5000), MAX_RESPONSES);
    }
}
