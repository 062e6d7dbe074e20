//! In-memory storage
//!
//! Same contract as the file store without touching disk. Counts writes so
//! callers can assert that a mutation was persisted.

use crate::error::Result;
use crate::KeyValueStore;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`KeyValueStore`] held entirely in memory.
///
/// Clones are handles to the same entries, so a caller can keep one while
/// another owner writes through its own.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Value>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let inner = Inner {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            writes: 0,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Number of `set`/`remove` calls that changed the store.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.lock().entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut inner = self.lock();
        inner.entries.insert(key.to_string(), value);
        inner.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut inner = self.lock();
        if inner.entries.remove(key).is_some() {
            inner.writes += 1;
        }
        Ok(())
    }
}
