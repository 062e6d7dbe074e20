//! Photo search sequencing.
//!
//! A search is split in two so the network call can run off the UI thread:
//! [`SettingsPanel::begin_search`](super::SettingsPanel::begin_search) hands
//! out a [`SearchRequest`], the caller runs it against a [`PhotoSearch`]
//! backend, and the outcome goes back through
//! [`SettingsPanel::finish_search`](super::SettingsPanel::finish_search).
//! Every request carries a [`SearchToken`]; only the most recently issued
//! token is applied.

use std::fmt;
use unsplash_search::{ApiError, Photo, UnsplashClient};

/// Monotonically increasing request sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchToken(pub(crate) u64);

impl fmt::Display for SearchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One outbound photo search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: SearchToken,
    /// The trimmed query.
    pub query: String,
    pub access_key: String,
}

impl SearchRequest {
    /// Runs the request against `backend`. Blocks for the duration of the call.
    pub fn run(&self, backend: &dyn PhotoSearch) -> Result<Vec<Photo>, ApiError> {
        backend.search(&self.query, &self.access_key)
    }
}

/// Whether a finished search changed the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied,
    /// A newer search was issued (or the panel closed) before this one finished.
    Stale,
}

/// A photo search backend.
pub trait PhotoSearch: Send + Sync {
    fn search(&self, query: &str, access_key: &str) -> Result<Vec<Photo>, ApiError>;
}

impl PhotoSearch for UnsplashClient {
    fn search(&self, query: &str, access_key: &str) -> Result<Vec<Photo>, ApiError> {
        UnsplashClient::search(self, query, access_key)
    }
}
