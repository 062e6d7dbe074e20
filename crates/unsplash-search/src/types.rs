//! Type definitions for Unsplash search API responses.
//!
//! Only the fields the settings panel consumes are modeled; everything else
//! in the response is ignored by serde.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `GET /search/photos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResponse {
    /// Total matches across all pages.
    #[serde(default)]
    pub total: u64,

    /// Photos on the requested page.
    pub results: Vec<Photo>,
}

/// A single photo in a search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    /// Unsplash photo identifier.
    pub id: String,

    /// Pre-sized image URLs.
    pub urls: PhotoUrls,

    /// Human-written alt text. Frequently missing or empty.
    #[serde(default)]
    pub alt_description: Option<String>,
}

/// Image URLs for a photo at the sizes the panel uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoUrls {
    /// 400px wide rendition, used for grid thumbnails.
    pub small: String,

    /// 1080px wide rendition, used as the page background.
    pub regular: String,
}

impl Photo {
    /// Returns the alt description unless it is absent or empty.
    ///
    /// Whitespace is kept as sent.
    pub fn description(&self) -> Option<&str> {
        self.alt_description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Orientation filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Wider than tall. Suits page backgrounds.
    #[default]
    Landscape,
    /// Taller than wide.
    Portrait,
    /// Roughly square.
    Squarish,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        };
        write!(f, "{}", s)
    }
}
