//! Key-value stores backing the freshness cache
//!
//! `FileStore` persists each key as `<root>/<namespace>/<key>.json`, so every
//! widget identity gets its own directory. `MemoryStore` keeps values in a map
//! and is used by tests and cache-less runs.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

/// Store identifier used when none is configured
pub const DEFAULT_NAMESPACE: &str = "tamuDiningHallMenuFinder";

/// Errors raised by a key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Cache storage failed: {0}")]
    Io(#[from] io::Error),

    /// A value could not be encoded for storage
    #[error("Failed to encode cache value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No platform cache directory could be determined
    #[error("Could not determine a cache directory (no home directory?)")]
    NoCacheDir,
}

/// String key-value storage scoped to one widget identity
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if it was never written
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Stores values as files in an XDG-compliant cache directory
///
/// Uses `~/.cache/commons-menu/<namespace>/` on Linux by default.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding this namespace's files
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store for `namespace` under the platform cache directory
    pub fn new(namespace: &str) -> Result<Self, StoreError> {
        let project_dirs =
            ProjectDirs::from("", "", "commons-menu").ok_or(StoreError::NoCacheDir)?;
        Ok(Self::with_dir(project_dirs.cache_dir(), namespace))
    }

    /// Creates a store for `namespace` under a custom root directory
    pub fn with_dir(root: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            dir: root.as_ref().join(namespace),
        }
    }

    /// Directory this store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory store, discarded when the process exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
