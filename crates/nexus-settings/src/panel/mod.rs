//! Settings panel view-model.
//!
//! [`SettingsPanel`] holds everything the settings UI shows and implements
//! every user action on it. It owns no terminal state, so the TUI, the CLI,
//! and the tests all drive the same code.
//!
//! Every profile or layout edit is applied to the in-memory copy first and
//! then persisted through [`SettingsStore`]. A failed write is logged and the
//! in-memory copy is kept.

mod search;

#[cfg(test)]
mod tests;

pub use search::{PhotoSearch, SearchOutcome, SearchRequest, SearchToken};

use crate::layout::{LayoutType, Layouts};
use crate::photos::{self, PhotoCandidate};
use crate::profile::{clamp_accent_input, ParseThemeModeError, Profile, ProfileField, ThemeMode};
use crate::store::SettingsStore;
use crate::theme::{self, ColorSchemeProbe, FixedColorScheme, NoopThemeSink, ThemeSink};
use crate::widgets::WidgetId;
use tracing::{debug, info, warn};
use unsplash_search::{ApiError, Photo};

/// Shown when a search is attempted without an access key.
pub const MSG_KEY_REQUIRED: &str = "Add an Unsplash Access Key below to search.";

/// Shown when the search request fails for any reason.
pub const MSG_SEARCH_FAILED: &str = "Search failed. Please check your API key.";

/// Shown when a search succeeds with no photos.
pub const MSG_NO_RESULTS: &str = "No results — showing curated photos.";

/// Key field hint when a key is stored.
pub const KEY_HINT_CONFIGURED: &str = "(configured)";

/// Key field hint when no key is stored.
pub const KEY_HINT_MISSING: &str = "(optional — enables search)";

/// Tabs of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Widgets,
    Ai,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [SettingsTab::General, SettingsTab::Widgets, SettingsTab::Ai];

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Widgets => "Widgets",
            SettingsTab::Ai => "AI Assistant",
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> SettingsTab {
        match self {
            SettingsTab::General => SettingsTab::Widgets,
            SettingsTab::Widgets => SettingsTab::Ai,
            SettingsTab::Ai => SettingsTab::General,
        }
    }

    /// The tab to the left, wrapping around.
    pub fn prev(self) -> SettingsTab {
        match self {
            SettingsTab::General => SettingsTab::Ai,
            SettingsTab::Widgets => SettingsTab::General,
            SettingsTab::Ai => SettingsTab::Widgets,
        }
    }
}

/// The settings panel.
pub struct SettingsPanel {
    store: SettingsStore,
    theme_sink: Box<dyn ThemeSink>,
    color_scheme: Box<dyn ColorSchemeProbe>,
    active_layout: LayoutType,

    is_open: bool,
    tab: SettingsTab,
    profile: Profile,
    /// False when the stored profile could not be decoded; edits stay in memory.
    profile_writable: bool,
    /// `None` until loaded; widget toggles are ignored meanwhile.
    layouts: Option<Layouts>,

    query: String,
    results: Vec<PhotoCandidate>,
    loading: bool,
    message: String,
    api_key: String,
    show_key_field: bool,
    preview: Option<PhotoCandidate>,

    last_token: u64,
    /// Token and query of the search whose outcome is still wanted.
    in_flight: Option<(SearchToken, String)>,
}

impl std::fmt::Debug for SettingsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsPanel")
            .field("active_layout", &self.active_layout)
            .field("is_open", &self.is_open)
            .field("tab", &self.tab)
            .field("profile", &self.profile)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl SettingsPanel {
    /// Creates a closed panel editing `active_layout`.
    ///
    /// The access key is read from the credential store here; profile and
    /// layouts are read by [`open`](Self::open). Theme effects go nowhere and
    /// `system` resolves to light until replaced with
    /// [`with_theme_sink`](Self::with_theme_sink) and
    /// [`with_color_scheme`](Self::with_color_scheme).
    pub fn new(store: SettingsStore, active_layout: LayoutType) -> Self {
        let api_key = store.api_key().unwrap_or_else(|e| {
            warn!(error = %e, "failed to read Unsplash access key");
            String::new()
        });
        Self {
            store,
            theme_sink: Box::new(NoopThemeSink),
            color_scheme: Box::new(FixedColorScheme::light()),
            active_layout,
            is_open: false,
            tab: SettingsTab::General,
            profile: Profile::default(),
            profile_writable: true,
            layouts: None,
            query: String::new(),
            results: photos::curated(),
            loading: false,
            message: String::new(),
            api_key,
            show_key_field: false,
            preview: None,
            last_token: 0,
            in_flight: None,
        }
    }

    pub fn with_theme_sink(mut self, sink: Box<dyn ThemeSink>) -> Self {
        self.theme_sink = sink;
        self
    }

    pub fn with_color_scheme(mut self, probe: Box<dyn ColorSchemeProbe>) -> Self {
        self.color_scheme = probe;
        self
    }

    // -- lifecycle ---------------------------------------------------------

    /// Opens the panel on the General tab and loads profile and layouts.
    ///
    /// A missing profile starts from [`Profile::default`] and missing layouts
    /// from [`Layouts::default`]. A profile that fails to decode is shown as
    /// the defaults but never written back, and layouts that fail to decode
    /// stay unloaded, so neither document can be overwritten.
    pub fn open(&mut self) {
        self.is_open = true;
        self.tab = SettingsTab::General;
        (self.profile, self.profile_writable) = match self.store.load_profile() {
            Ok(profile) => (profile.unwrap_or_default(), true),
            Err(e) => {
                warn!(error = %e, "failed to load profile, edits will not be saved");
                (Profile::default(), false)
            }
        };
        self.layouts = match self.store.load_layouts() {
            Ok(layouts) => Some(layouts.unwrap_or_default()),
            Err(e) => {
                warn!(error = %e, "failed to load layouts, widget toggles disabled");
                None
            }
        };
        info!(layout = %self.active_layout, "settings panel opened");
    }

    /// Closes the panel.
    ///
    /// Transient view state is reset and any search still in flight will be
    /// reported stale. Nothing is written.
    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
        self.results = photos::curated();
        self.message.clear();
        self.loading = false;
        self.show_key_field = false;
        self.preview = None;
        self.in_flight = None;
        debug!("settings panel closed");
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    // -- navigation --------------------------------------------------------

    pub fn tab(&self) -> SettingsTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    pub fn active_layout(&self) -> LayoutType {
        self.active_layout
    }

    /// Switches the layout the Widgets tab edits.
    pub fn set_active_layout(&mut self, layout: LayoutType) {
        self.active_layout = layout;
    }

    // -- profile -----------------------------------------------------------

    /// False after [`open`](Self::open) found a profile it could not decode.
    pub fn is_profile_writable(&self) -> bool {
        self.profile_writable
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replaces one profile field, persists the whole profile, and applies
    /// the theme effect of accent and theme edits.
    ///
    /// # Errors
    ///
    /// Fails only for an unknown theme name; the profile is then unchanged.
    pub fn handle_profile_change(
        &mut self,
        field: ProfileField,
        value: &str,
    ) -> Result<(), ParseThemeModeError> {
        let updated = self.profile.with_field(field, value)?;
        self.commit_profile(field, updated);
        Ok(())
    }

    pub fn set_username(&mut self, value: &str) {
        self.edit_profile(ProfileField::Username, |p| p.username = value.to_string());
    }

    pub fn set_greeting(&mut self, value: &str) {
        self.edit_profile(ProfileField::Greeting, |p| p.greeting = value.to_string());
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.edit_profile(ProfileField::Theme, |p| p.theme = mode);
    }

    /// Picks an accent color (swatch or color picker).
    pub fn set_accent_color(&mut self, color: &str) {
        self.edit_profile(ProfileField::AccentColor, |p| p.accent_color = color.to_string());
    }

    /// Accent color typed by hand. Input beyond seven characters is dropped.
    pub fn set_accent_color_text(&mut self, text: &str) {
        let color = clamp_accent_input(text);
        self.edit_profile(ProfileField::AccentColor, |p| p.accent_color = color);
    }

    /// Background URL typed by hand. Clears the photo preview.
    pub fn set_background_url(&mut self, url: &str) {
        self.edit_profile(ProfileField::BackgroundUrl, |p| p.background_url = url.to_string());
        self.preview = None;
    }

    /// Removes the background image. Clears the photo preview.
    pub fn clear_background(&mut self) {
        self.set_background_url("");
    }

    /// Sends the stored accent color and resolved theme to the sink.
    ///
    /// Front ends call this once after [`open`](Self::open) so the screen
    /// matches the profile before any edit.
    pub fn apply_theme(&mut self) {
        self.theme_sink.set_accent_color(&self.profile.accent_color);
        let resolved = theme::resolve(self.profile.theme, self.color_scheme.as_ref());
        self.theme_sink.set_theme(resolved);
    }

    fn edit_profile(&mut self, field: ProfileField, apply: impl FnOnce(&mut Profile)) {
        let mut updated = self.profile.clone();
        apply(&mut updated);
        self.commit_profile(field, updated);
    }

    fn commit_profile(&mut self, field: ProfileField, updated: Profile) {
        self.profile = updated;
        if !self.profile_writable {
            warn!(field = %field, "stored profile unreadable, edit not saved");
        } else if let Err(e) = self.store.save_profile(&self.profile) {
            warn!(error = %e, field = %field, "failed to persist profile");
        }
        match field {
            ProfileField::AccentColor => {
                self.theme_sink.set_accent_color(&self.profile.accent_color);
            }
            ProfileField::Theme => {
                let resolved = theme::resolve(self.profile.theme, self.color_scheme.as_ref());
                debug!(theme = %self.profile.theme, resolved = %resolved, "theme changed");
                self.theme_sink.set_theme(resolved);
            }
            _ => {}
        }
    }

    // -- widgets -----------------------------------------------------------

    pub fn layouts(&self) -> Option<&Layouts> {
        self.layouts.as_ref()
    }

    /// Adds `widget` to the active layout if absent, removes it if present,
    /// then persists all layouts.
    ///
    /// Returns whether the widget is now enabled, or `None` if layouts are
    /// not loaded.
    pub fn toggle_widget(&mut self, widget: WidgetId) -> Option<bool> {
        let layouts = self.layouts.as_mut()?;
        let enabled = layouts.toggle(self.active_layout, widget);
        if let Err(e) = self.store.save_layouts(layouts) {
            warn!(error = %e, widget = %widget, "failed to persist layouts");
        }
        debug!(layout = %self.active_layout, widget = %widget, enabled, "widget toggled");
        Some(enabled)
    }

    pub fn is_widget_enabled(&self, widget: WidgetId) -> bool {
        self.layouts
            .as_ref()
            .map(|l| l.get(self.active_layout).contains(widget))
            .unwrap_or(false)
    }

    /// Number of widgets enabled in the active layout.
    pub fn enabled_count(&self) -> usize {
        self.layouts
            .as_ref()
            .map(|l| l.get(self.active_layout).widgets.len())
            .unwrap_or(0)
    }

    // -- photo search ------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    pub fn results(&self) -> &[PhotoCandidate] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The hint or error line under the search bar. Empty when none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Starts a search for the current query.
    ///
    /// - An empty query restores the curated photos, clears the message, and
    ///   supersedes any search in flight.
    /// - Without an access key the key hint is shown and results are kept.
    ///
    /// Otherwise the panel enters the loading state and returns the request
    /// to run.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            self.results = photos::curated();
            self.message.clear();
            self.loading = false;
            self.in_flight = None;
            return None;
        }
        if self.api_key.is_empty() {
            self.message = MSG_KEY_REQUIRED.to_string();
            return None;
        }

        self.last_token += 1;
        let token = SearchToken(self.last_token);
        self.loading = true;
        self.message.clear();
        self.in_flight = Some((token, query.clone()));
        debug!(token = %token, query = %query, "photo search started");
        Some(SearchRequest {
            token,
            query,
            access_key: self.api_key.clone(),
        })
    }

    /// Applies the outcome of the search identified by `token`.
    ///
    /// Outcomes of superseded searches change nothing.
    pub fn finish_search(
        &mut self,
        token: SearchToken,
        outcome: Result<Vec<Photo>, ApiError>,
    ) -> SearchOutcome {
        let query = match &self.in_flight {
            Some((latest, query)) if *latest == token => query.clone(),
            _ => {
                debug!(token = %token, "discarding stale search result");
                return SearchOutcome::Stale;
            }
        };
        self.in_flight = None;
        self.loading = false;

        match outcome {
            Ok(found) if found.is_empty() => {
                self.results = photos::curated();
                self.message = MSG_NO_RESULTS.to_string();
            }
            Ok(found) => {
                debug!(count = found.len(), "photo search returned results");
                self.results = found
                    .iter()
                    .map(|p| PhotoCandidate::from_search(p, &query))
                    .collect();
                self.message.clear();
            }
            Err(e) => {
                warn!(error = %e, "photo search failed");
                self.results = photos::curated();
                self.message = MSG_SEARCH_FAILED.to_string();
            }
        }
        SearchOutcome::Applied
    }

    /// Runs a whole search on the calling thread.
    ///
    /// Returns `false` when no request was issued (empty query or no key).
    pub fn search_with(&mut self, backend: &dyn PhotoSearch) -> bool {
        match self.begin_search() {
            Some(request) => {
                let outcome = request.run(backend);
                self.finish_search(request.token, outcome);
                true
            }
            None => false,
        }
    }

    // -- photos ------------------------------------------------------------

    /// Makes `photo` the background and the active preview.
    pub fn apply_photo(&mut self, photo: &PhotoCandidate) {
        self.edit_profile(ProfileField::BackgroundUrl, |p| {
            p.background_url = photo.full.clone()
        });
        self.preview = Some(photo.clone());
    }

    /// True exactly when `photo` is the current background.
    pub fn is_photo_active(&self, photo: &PhotoCandidate) -> bool {
        photo.full == self.profile.background_url
    }

    /// Sets or clears the photo under the cursor.
    pub fn preview_photo(&mut self, photo: Option<PhotoCandidate>) {
        self.preview = photo;
    }

    /// The preview strip content: the previewed photo, unless it is already
    /// the background.
    pub fn preview_strip(&self) -> Option<&PhotoCandidate> {
        self.preview
            .as_ref()
            .filter(|p| p.full != self.profile.background_url)
    }

    // -- access key --------------------------------------------------------

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Stores the access key as typed. An empty key disables search.
    pub fn save_api_key(&mut self, key: &str) {
        self.api_key = key.to_string();
        if let Err(e) = self.store.set_api_key(key) {
            warn!(error = %e, "failed to persist Unsplash access key");
        }
    }

    pub fn show_key_field(&self) -> bool {
        self.show_key_field
    }

    pub fn toggle_key_field(&mut self) {
        self.show_key_field = !self.show_key_field;
    }

    pub fn key_field_hint(&self) -> &'static str {
        if self.api_key.is_empty() {
            KEY_HINT_MISSING
        } else {
            KEY_HINT_CONFIGURED
        }
    }

    /// The backing store, for reads outside the panel's view state.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }
}
