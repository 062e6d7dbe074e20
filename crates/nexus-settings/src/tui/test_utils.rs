//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helper functions for creating test terminals, extracting buffer
//! content, asserting colors, and building an [`App`] over in-memory stores
//! with a canned photo search backend.

use crate::layout::LayoutType;
use crate::panel::{PhotoSearch, SettingsPanel};
use crate::store::SettingsStore;
use crate::theme::{AppliedTheme, FixedColorScheme, SharedThemeSink};
use crate::tui::app::{App, SearchFactory};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use unsplash_search::{ApiError, Photo, PhotoUrls};

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area();
    (0..area.height).find(|row| row_contains(buffer, *row, text))
}

/// Asserts that the cell at (col, row) has the specified foreground color.
pub fn assert_fg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.fg, color,
        "expected fg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.fg
    );
}

/// Finds the first occurrence of `text` in the specified row and checks
/// if the first character of that text has the specified foreground color.
///
/// Columns are counted in characters, so rows with multi-byte symbols
/// before `text` still resolve to the right cell.
pub fn assert_text_fg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let row_string = row_text(buffer, row);
    let byte = row_string
        .find(text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}: '{}'", text, row, row_string));
    let col = row_string[..byte].chars().count();
    assert_fg_color(buffer, col as u16, row, color);
}

/// A search result with predictable URLs.
pub fn photo(id: &str, alt: Option<&str>) -> Photo {
    Photo {
        id: id.to_string(),
        urls: PhotoUrls {
            small: format!("https://cdn.example/{id}-small.jpg"),
            regular: format!("https://cdn.example/{id}-regular.jpg"),
        },
        alt_description: alt.map(String::from),
    }
}

/// Backend returning canned photos and counting calls.
pub struct CannedSearch {
    photos: Vec<Photo>,
    calls: Arc<AtomicUsize>,
}

impl PhotoSearch for CannedSearch {
    fn search(&self, _query: &str, _access_key: &str) -> Result<Vec<Photo>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.photos.clone())
    }
}

/// Factory for [`CannedSearch`] and the shared call counter.
pub fn canned_search(photos: Vec<Photo>) -> (SearchFactory, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let factory: SearchFactory = Arc::new(move || {
        Box::new(CannedSearch {
            photos: photos.clone(),
            calls: Arc::clone(&counter),
        }) as Box<dyn PhotoSearch>
    });
    (factory, calls)
}

/// Builds an app over `store` whose `system` theme resolves to dark.
pub fn make_app_with(store: SettingsStore, search: SearchFactory) -> App {
    let sink = SharedThemeSink::new(AppliedTheme::default());
    let panel = SettingsPanel::new(store, LayoutType::Focus)
        .with_theme_sink(Box::new(sink.clone()))
        .with_color_scheme(Box::new(FixedColorScheme::dark()));
    App::new(panel, sink, search)
}

/// An app over empty in-memory stores with a search that finds nothing.
pub fn make_app() -> App {
    make_app_with(SettingsStore::in_memory(), canned_search(Vec::new()).0)
}

/// An app with `key` stored, whose searches return `photos`.
pub fn make_app_with_key(key: &str, photos: Vec<Photo>) -> (App, Arc<AtomicUsize>) {
    let mut store = SettingsStore::in_memory();
    store.set_api_key(key).expect("seed key");
    let (factory, calls) = canned_search(photos);
    (make_app_with(store, factory), calls)
}

/// Renders the full panel to a buffer and returns the buffer for inspection.
pub fn render_app_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| {
            crate::tui::ui::render_panel(frame, app);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_terminal_creates_terminal() {
        let terminal = test_terminal(80, 24);
        let size = terminal.size().expect("should have size");
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_find_row_with_text_returns_row_index() {
        let mut terminal = test_terminal(40, 10);
        terminal
            .draw(|frame| {
                let area = frame.area();
                use ratatui::layout::{Constraint, Direction, Layout};
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Length(1)])
                    .split(area);
                frame.render_widget(ratatui::widgets::Paragraph::new("First Line"), chunks[0]);
                frame.render_widget(ratatui::widgets::Paragraph::new("Target Row"), chunks[1]);
            })
            .expect("draw failed");
        let buffer = terminal.backend().buffer();
        assert_eq!(find_row_with_text(buffer, "Target Row"), Some(1));
        assert!(row_contains(buffer, 0, "First"));
        assert_eq!(find_row_with_text(buffer, "Missing"), None);
    }

    #[test]
    fn test_canned_search_counts_calls() {
        let (factory, calls) = canned_search(vec![photo("a", None)]);
        let backend = factory();
        let found = backend.search("q", "k").expect("canned");
        assert_eq!(found.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
