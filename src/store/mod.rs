//! Capped response log with a remote list-store backend and an in-process
//! memory fallback.
//!
//! The remote backend is a REST list store configured from the environment;
//! when it is unconfigured or failing, every operation degrades to the
//! memory mirror instead of surfacing an error. The mirror is also kept
//! warm on the happy path: writes land in it first, and batches fetched
//! from the remote side are merged into it, so a later fallback read still
//! reflects recent shared state.
//!
//! This is a recent-history log, not a queryable database: newest first,
//! capacity-bounded, append-only, eviction from the tail.

mod config;
mod error;
mod memory;
mod record;
mod remote;
mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use record::ResponseRecord;
pub use store::{
    CountOutcome, ReadOutcome, ResponseStore, Source, WriteOutcome, MAX_RESPONSES,
};
