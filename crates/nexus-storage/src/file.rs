//! JSON object file storage with atomic writes
//!
//! The whole store is one JSON object on disk, keyed like the browser's
//! extension storage (`nexus.profile`, `nexus.layouts`, ...). Every `set`
//! reads the current object, replaces one key, and writes the object back
//! with temp-file-then-rename so a crash never leaves a half-written file.

use crate::error::{Result, StorageError};
use crate::KeyValueStore;
use chrono::Local;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A [`KeyValueStore`] backed by a single JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the file at `path`.
    ///
    /// The file does not need to exist yet; it is created on first write,
    /// together with any missing parent directories.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole object. A missing file reads as an empty object.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file exists but cannot be read.
    /// Returns `StorageError::Parse` if it is not a JSON object.
    pub fn read_all(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(StorageError::Parse {
                path: self.path.clone(),
                message: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
            Err(e) => Err(StorageError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// Write the whole object atomically.
    ///
    /// 1. Write to a temp file with timestamp suffix
    /// 2. Fsync to disk
    /// 3. Rename temp to original
    ///
    /// On failure before rename, the temp file is left behind as a safety copy.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be written or synced.
    /// Returns `StorageError::WriteAtomic` if the rename fails.
    pub fn write_all(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage.json".to_string());
        let timestamp = Local::now().format("%Y%m%d-%H%M%S%.6f").to_string();
        let temp_path = self
            .path
            .with_file_name(format!("{}.tmp.{}", file_name, timestamp));

        let json = serde_json::to_string_pretty(map).map_err(|e| StorageError::Serialize {
            key: "*".to_string(),
            message: e.to_string(),
        })?;

        fs::write(&temp_path, json).map_err(|e| StorageError::Io {
            path: temp_path.clone(),
            source: e,
        })?;

        let file = fs::File::open(&temp_path).map_err(|e| StorageError::Io {
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StorageError::Io {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|_| StorageError::WriteAtomic {
            path: self.path.clone(),
            temp_path: temp_path.clone(),
        })?;

        log::debug!("wrote {} keys to {}", map.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        self.write_all(&map)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.read_all()?;
        if map.remove(key).is_some() {
            self.write_all(&map)?;
        }
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
