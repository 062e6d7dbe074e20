//! Background photo search.
//!
//! The Unsplash client blocks, so each search runs on tokio's blocking pool
//! and reports back over the app's channel. The panel's sequencing token
//! decides whether a finished search still matters.

use super::*;
use crate::panel::{PhotoSearch, SearchOutcome, SearchRequest, SearchToken};
use std::sync::Arc;
use unsplash_search::{ApiError, Photo, SearchParams, UnsplashClient};

/// Builds a search backend on the blocking thread that uses it.
pub type SearchFactory = Arc<dyn Fn() -> Box<dyn PhotoSearch> + Send + Sync>;

/// A finished search, tagged with the token it was issued under.
#[derive(Debug)]
pub struct SearchMessage {
    pub token: SearchToken,
    pub outcome: Result<Vec<Photo>, ApiError>,
}

/// Factory for the Unsplash client at `api_url`.
///
/// The blocking HTTP client must not be created or dropped on an async
/// worker, so it is built inside each search task.
pub fn unsplash_search(api_url: &str, params: SearchParams) -> SearchFactory {
    let api_url = api_url.to_string();
    Arc::new(move || {
        let client = UnsplashClient::with_base_url(&api_url).with_params(params.clone());
        Box::new(client) as Box<dyn PhotoSearch>
    })
}

impl App {
    pub(super) fn spawn_search(&self, request: SearchRequest) {
        let factory = Arc::clone(&self.search);
        let tx = self.search_tx.clone();
        tokio::task::spawn_blocking(move || {
            let backend = factory();
            let outcome = request.run(backend.as_ref());
            let message = SearchMessage {
                token: request.token,
                outcome,
            };
            if tx.blocking_send(message).is_err() {
                tracing::debug!(token = %request.token, "search finished after the app exited");
            }
        });
    }

    pub(super) fn apply_search_message(&mut self, message: SearchMessage) {
        match self.panel.finish_search(message.token, message.outcome) {
            SearchOutcome::Applied => {
                self.photo_cursor = 0;
                self.clamp_photo_cursor();
            }
            SearchOutcome::Stale => {}
        }
    }
}
