pub(crate) use super::*;
pub(crate) use crate::store::SettingsStore;
pub(crate) use unsplash_search::PhotoUrls;


use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) fn make_panel() -> SettingsPanel {
    let mut panel = SettingsPanel::new(SettingsStore::in_memory(), LayoutType::Focus);
    panel.open();
    panel
}

pub(crate) fn make_panel_with_key(key: &str) -> SettingsPanel {
    let mut store = SettingsStore::in_memory();
    store.set_api_key(key).expect("seed key");
    let mut panel = SettingsPanel::new(store, LayoutType::Focus);
    panel.open();
    panel
}

pub(crate) fn photo(id: &str, alt: Option<&str>) -> Photo {
    Photo {
        id: id.to_string(),
        urls: PhotoUrls {
            small: format!("https://cdn.example/{id}-small.jpg"),
            regular: format!("https://cdn.example/{id}-regular.jpg"),
        },
        alt_description: alt.map(String::from),
    }
}

/// Backend returning canned photos, or a server error when `fail` is set.
pub(crate) struct StubSearch {
    pub photos: Vec<Photo>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl StubSearch {
    pub fn returning(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            photos: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PhotoSearch for StubSearch {
    fn search(&self, _query: &str, _access_key: &str) -> Result<Vec<Photo>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ApiError::Server(503))
        } else {
            Ok(self.photos.clone())
        }
    }
}
