//! Key-value document storage for Nexus settings
//!
//! This crate persists small JSON documents under string keys, mirroring the
//! extension storage the Nexus new-tab page uses in the browser. Two stores
//! are provided:
//!
//! - [`JsonFileStore`]: one JSON object file, atomic writes
//! - [`MemoryStore`]: in-process map, for tests and dry runs
//!
//! Callers work with typed documents through [`load`] and [`save`]; the
//! store itself only sees `serde_json::Value`.
//!
//! # Examples
//!
//! ```
//! use nexus_storage::{load, save, KeyValueStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! save(&mut store, "nexus.greeting", &"Hello").unwrap();
//! let greeting: Option<String> = load(&store, "nexus.greeting").unwrap();
//! assert_eq!(greeting.as_deref(), Some("Hello"));
//! ```

#![warn(missing_docs)]

mod error;
mod file;
mod memory;

pub use error::{Result, StorageError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Key of the profile document.
pub const PROFILE_KEY: &str = "nexus.profile";

/// Key of the per-layout widget map.
pub const LAYOUTS_KEY: &str = "nexus.layouts";

/// Key of the Unsplash access key in the credential store.
pub const UNSPLASH_KEY: &str = "nexus.unsplashKey";

/// A string-keyed store of JSON values.
///
/// Writes replace the whole value under a key. There is no partial update
/// and no transaction spanning keys.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Read a plain string value. Non-string values read as `None`.
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key)?.and_then(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        }))
    }

    /// Store a plain string value.
    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(key, Value::String(value.to_string()))
    }
}

/// Read and deserialize the document under `key`.
///
/// # Errors
///
/// Propagates store errors. Returns `StorageError::Decode` if the stored
/// value does not deserialize into `T`.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Decode {
                key: key.to_string(),
                message: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Serialize `document` and store it under `key`.
///
/// # Errors
///
/// Returns `StorageError::Serialize` if `document` cannot be represented as
/// JSON, otherwise propagates store errors.
pub fn save<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    document: &T,
) -> Result<()> {
    let value = serde_json::to_value(document).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, value)
}
