//! Persistent key-value storage for widget state
//!
//! This module provides the `KeyValueStore` seam, a file-backed store that lays
//! keys out as JSON files under a namespace directory, an in-memory store, and
//! the freshness policy that records when the widget last ran.

mod freshness;
mod store;

pub use freshness::{FreshnessCache, LAST_UPDATED_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, DEFAULT_NAMESPACE};
