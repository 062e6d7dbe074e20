//! # unsplash-search
//!
//! A small library for searching photos through the Unsplash API.
//!
//! It covers exactly one endpoint, `GET /search/photos`, authenticated with a
//! public access key, and returns typed results.
//!
//! ## Example
//!
//! ```rust,ignore
//! use unsplash_search::UnsplashClient;
//!
//! let client = UnsplashClient::new();
//! for photo in client.search("mountains", "YOUR_ACCESS_KEY")? {
//!     println!("{} {}", photo.id, photo.urls.regular);
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{
    parse_search_response, SearchParams, DEFAULT_API_URL, DEFAULT_PER_PAGE, SEARCH_PATH,
};
#[cfg(feature = "blocking")]
pub use client::UnsplashClient;
pub use error::ApiError;
pub use types::{Orientation, Photo, PhotoUrls, SearchResponse};
