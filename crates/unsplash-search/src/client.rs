//! HTTP client for the Unsplash photo search API.
//!
//! This module issues `GET /search/photos` requests authenticated with a
//! public access key (`client_id` query parameter) and maps status codes to
//! [`ApiError`] variants.

use crate::error::ApiError;
use crate::types::{Orientation, Photo, SearchResponse};

/// Unsplash API base URL.
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

/// Path of the photo search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/search/photos";

/// Page size requested by the settings panel.
pub const DEFAULT_PER_PAGE: u8 = 10;

/// Query parameters that stay fixed across searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Results per page (Unsplash caps this at 30).
    pub per_page: u8,
    /// Orientation filter.
    pub orientation: Orientation,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            orientation: Orientation::Landscape,
        }
    }
}

/// Parse a raw search response body.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the body is not JSON or lacks `results`.
pub fn parse_search_response(body: &str) -> Result<SearchResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Blocking Unsplash search client.
///
/// Holds a pooled `reqwest` client, so one instance should be reused for
/// every search issued during a session.
#[cfg(feature = "blocking")]
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    base_url: String,
    params: SearchParams,
    http: reqwest::blocking::Client,
}

#[cfg(feature = "blocking")]
impl UnsplashClient {
    /// Creates a client against the public Unsplash API with default params.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a client against a custom base URL (proxies, tests).
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            params: SearchParams::default(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Replaces the fixed query parameters.
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the fixed query parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Full URL of the search endpoint, without query string.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// Fetch the raw search response body (blocking).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Network request fails
    /// - Server returns 401 (bad access key)
    /// - Server returns 429 (hourly quota exhausted)
    /// - Server returns 5xx
    /// - Server returns any other non-200 status
    ///
    /// # Security
    ///
    /// The access key is sent as a query parameter, as Unsplash requires for
    /// public-key authentication. It is not logged.
    pub fn search_raw(&self, query: &str, access_key: &str) -> Result<String, ApiError> {
        let per_page = self.params.per_page.to_string();
        let orientation = self.params.orientation.to_string();

        tracing::debug!(query, per_page = %per_page, "searching unsplash");

        let response = self
            .http
            .get(self.search_url())
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", orientation.as_str()),
                ("client_id", access_key),
            ])
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        map_response(response)
    }

    /// Search photos and return the parsed result list.
    ///
    /// # Errors
    ///
    /// Any error from [`search_raw`](Self::search_raw), or
    /// [`ApiError::Parse`] when the body is malformed.
    pub fn search(&self, query: &str, access_key: &str) -> Result<Vec<Photo>, ApiError> {
        let body = self.search_raw(query, access_key)?;
        let parsed = parse_search_response(&body)?;
        tracing::debug!(count = parsed.results.len(), "unsplash search returned");
        Ok(parsed.results)
    }
}

#[cfg(feature = "blocking")]
impl Default for UnsplashClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map HTTP response to result, handling error status codes.
#[cfg(feature = "blocking")]
fn map_response(response: reqwest::blocking::Response) -> Result<String, ApiError> {
    let status = response.status().as_u16();

    match status {
        200 => response
            .text()
            .map_err(|e| ApiError::Network(e.to_string())),
        401 => Err(ApiError::Unauthorized),
        429 => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            Err(ApiError::RateLimited { retry_after })
        }
        500..=599 => Err(ApiError::Server(status)),
        _ => Err(ApiError::Unexpected(status)),
    }
}
