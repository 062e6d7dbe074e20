//! Background photo candidates.
//!
//! The photo grid shows either the curated set or the results of the last
//! successful search. Candidates are ephemeral; only the chosen photo's full
//! URL is persisted, as the profile's background.

use unsplash_search::Photo;

/// Thumbnail width requested for curated photos.
pub const THUMB_WIDTH: u32 = 400;

/// Full-size width requested for curated photos.
pub const FULL_WIDTH: u32 = 1920;

/// A photo that can be previewed or applied as the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCandidate {
    pub id: String,
    pub thumb: String,
    pub full: String,
    pub label: String,
}

impl PhotoCandidate {
    /// Builds a candidate from an Unsplash search result.
    ///
    /// The label is the photo's alt text, or `query` when the photo has none.
    pub fn from_search(photo: &Photo, query: &str) -> Self {
        Self {
            id: photo.id.clone(),
            thumb: photo.urls.small.clone(),
            full: photo.urls.regular.clone(),
            label: photo
                .description()
                .map(str::to_string)
                .unwrap_or_else(|| query.to_string()),
        }
    }
}

/// Builds an Unsplash CDN URL for `photo_id` at the given width.
pub fn image_url(photo_id: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo_id}?w={width}&q=80&auto=format&fit=crop")
}

const CURATED: [(&str, &str); 10] = [
    ("photo-1469474968028-56623f02e42e", "Meadow"),
    ("photo-1506905925346-21bda4d32df4", "Mountains"),
    ("photo-1519681393784-d120267933ba", "Starry Sky"),
    ("photo-1477959858617-67f85cf4f1df", "City Night"),
    ("photo-1448375240586-882707db888b", "Forest"),
    ("photo-1531366936337-7c912a4589a7", "Aurora"),
    ("photo-1505118380757-91f5f5632de0", "Ocean"),
    ("photo-1464822759023-fed622ff2c3b", "Lake"),
    ("photo-1500534314209-a25ddb2bd429", "Sunset"),
    ("photo-1493246507139-91e8fad9978e", "Valley"),
];

/// The fixed fallback set shown without a query, without a key, and after a
/// failed or empty search.
pub fn curated() -> Vec<PhotoCandidate> {
    CURATED
        .iter()
        .map(|(id, label)| PhotoCandidate {
            id: (*id).to_string(),
            thumb: image_url(id, THUMB_WIDTH),
            full: image_url(id, FULL_WIDTH),
            label: (*label).to_string(),
        })
        .collect()
}
