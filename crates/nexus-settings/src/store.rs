//! Typed access to the persisted settings documents.
//!
//! Two key-value stores back the panel:
//!
//! - the document store (`storage.json`) holding `nexus.profile` and
//!   `nexus.layouts`, shared with the rest of the new-tab page;
//! - the credential store (`local.json`) holding `nexus.unsplashKey`.
//!
//! [`SettingsStore`] is the only place that knows these keys. The panel
//! edits in-memory copies and calls [`SettingsStore::save_profile`] or
//! [`SettingsStore::save_layouts`] after each change.

use crate::layout::Layouts;
use crate::profile::Profile;
use nexus_storage::{
    load, save, JsonFileStore, KeyValueStore, MemoryStore, LAYOUTS_KEY, PROFILE_KEY, UNSPLASH_KEY,
};
use std::path::Path;

pub use nexus_storage::{Result, StorageError};

/// File name of the document store inside the data directory.
pub const DOCUMENTS_FILE: &str = "storage.json";

/// File name of the credential store inside the data directory.
pub const CREDENTIALS_FILE: &str = "local.json";

/// A key-value store the panel can move between threads.
pub type BoxedStore = Box<dyn KeyValueStore + Send>;

/// Profile, layouts, and the photo-search credential.
pub struct SettingsStore {
    documents: BoxedStore,
    credentials: BoxedStore,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore").finish_non_exhaustive()
    }
}

impl SettingsStore {
    /// Wraps existing stores.
    pub fn new(documents: BoxedStore, credentials: BoxedStore) -> Self {
        Self {
            documents,
            credentials,
        }
    }

    /// File-backed stores under `data_dir`. Files are created on first write.
    pub fn open(data_dir: &Path) -> Self {
        Self::new(
            Box::new(JsonFileStore::new(data_dir.join(DOCUMENTS_FILE))),
            Box::new(JsonFileStore::new(data_dir.join(CREDENTIALS_FILE))),
        )
    }

    /// Empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
    }

    /// The stored profile, if one was ever saved.
    pub fn load_profile(&self) -> Result<Option<Profile>> {
        load(self.documents.as_ref(), PROFILE_KEY)
    }

    /// The stored layouts, if they were ever saved.
    pub fn load_layouts(&self) -> Result<Option<Layouts>> {
        load(self.documents.as_ref(), LAYOUTS_KEY)
    }

    /// Persists the whole profile.
    pub fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        save(self.documents.as_mut(), PROFILE_KEY, profile)
    }

    /// Persists the whole layout map.
    pub fn save_layouts(&mut self, layouts: &Layouts) -> Result<()> {
        save(self.documents.as_mut(), LAYOUTS_KEY, layouts)
    }

    /// The Unsplash access key. Empty when none is stored.
    pub fn api_key(&self) -> Result<String> {
        Ok(self
            .credentials
            .get_string(UNSPLASH_KEY)?
            .unwrap_or_default())
    }

    /// Stores the Unsplash access key as typed, including the empty string.
    pub fn set_api_key(&mut self, key: &str) -> Result<()> {
        self.credentials.set_string(UNSPLASH_KEY, key)
    }

    /// Removes the Unsplash access key.
    pub fn clear_api_key(&mut self) -> Result<()> {
        self.credentials.remove(UNSPLASH_KEY)
    }
}
