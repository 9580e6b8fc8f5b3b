//! "Last updated" bookkeeping on top of a key-value store

use tracing::debug;

use super::store::{KeyValueStore, StoreError};

/// Key holding the epoch-millisecond time of the last run
pub const LAST_UPDATED_KEY: &str = "last_updated";

/// Records when the widget last refreshed its data
///
/// The timestamp is written on every run, whether or not the data it describes
/// is usable, so it reads as "last checked" rather than "last successful fetch".
#[derive(Debug)]
pub struct FreshnessCache<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> FreshnessCache<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Returns the stored timestamp, seeding it with `now_ms` on first run
    ///
    /// A value that does not decode as an integer is treated like a missing one.
    pub fn last_updated(&mut self, now_ms: i64) -> Result<i64, StoreError> {
        let stored = self
            .store
            .read(LAST_UPDATED_KEY)?
            .and_then(|raw| serde_json::from_str::<i64>(raw.trim()).ok());

        match stored {
            Some(timestamp) => {
                debug!(timestamp, "read last_updated from cache");
                Ok(timestamp)
            }
            None => {
                debug!(now_ms, "no last_updated in cache, seeding with now");
                self.touch(now_ms)?;
                Ok(now_ms)
            }
        }
    }

    /// Overwrites the stored timestamp with `now_ms`
    pub fn touch(&mut self, now_ms: i64) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&now_ms)?;
        self.store.write(LAST_UPDATED_KEY, &encoded)
    }
}
