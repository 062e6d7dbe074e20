//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! All settings behavior lives in [`SettingsPanel`]; `App` only tracks what
//! the terminal needs on top of it: which field has focus, whether a text
//! field is being edited, and the cursors inside the photo grid, the accent
//! swatches, and the widget list.

mod update;

pub use update::{unsplash_search, SearchFactory, SearchMessage};

use crate::layout::LayoutType;
use crate::panel::SettingsPanel;
use crate::profile::ThemeMode;
use crate::theme::{SharedThemeSink, ACCENT_PRESETS};
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_panel;
use crate::widgets::{catalog_entries, WidgetId};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Default render tick when the config does not set one.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// How long footer status messages stay visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Photos per row in the photo grid.
pub const PHOTO_COLUMNS: usize = 5;

/// Shown when a widget toggle is refused because layouts failed to load.
pub const MSG_LAYOUTS_UNAVAILABLE: &str = "Layouts could not be loaded; widget changes are disabled";

/// Focusable rows of the General tab, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Greeting,
    Theme,
    Search,
    Photos,
    KeyToggle,
    /// Only focusable while the key field is shown.
    ApiKey,
    BackgroundUrl,
    Accent,
    AccentText,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Username,
        Field::Greeting,
        Field::Theme,
        Field::Search,
        Field::Photos,
        Field::KeyToggle,
        Field::ApiKey,
        Field::BackgroundUrl,
        Field::Accent,
        Field::AccentText,
    ];

    /// True for fields edited by typing.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::Username
                | Field::Greeting
                | Field::Search
                | Field::ApiKey
                | Field::BackgroundUrl
                | Field::AccentText
        )
    }

    /// Label shown left of the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Name",
            Field::Greeting => "Custom Greeting",
            Field::Theme => "Theme",
            Field::Search => "Search",
            Field::Photos => "Photos",
            Field::KeyToggle => "Unsplash API key",
            Field::ApiKey => "Access Key",
            Field::BackgroundUrl => "Image URL",
            Field::Accent => "Swatches",
            Field::AccentText => "Hex",
        }
    }
}

/// Core application state for the TUI.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// The settings panel being driven.
    pub panel: SettingsPanel,
    /// Theme the panel last applied; the renderer paints from it.
    pub theme: SharedThemeSink,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Focused row on the General tab.
    pub focus: Field,
    /// Whether keystrokes go into the focused text field.
    pub editing: bool,
    /// Index into the panel's current photo results.
    pub photo_cursor: usize,
    /// Index into [`ACCENT_PRESETS`].
    pub accent_cursor: usize,
    /// Index into the flattened widget catalog.
    pub widget_cursor: usize,
    /// Temporary status message shown in the hint line, with expiry time.
    pub status_message: Option<(String, Instant)>,
    tick_rate: Duration,
    search: SearchFactory,
    search_tx: mpsc::Sender<SearchMessage>,
    search_rx: mpsc::Receiver<SearchMessage>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("should_quit", &self.should_quit)
            .field("panel", &self.panel)
            .field("focus", &self.focus)
            .field("editing", &self.editing)
            .field("tick_rate", &self.tick_rate)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates the app around `panel`, opening it if needed.
    ///
    /// `theme` must be the sink the panel was built with, so edits repaint
    /// the screen. `search` builds the backend for each photo search.
    pub fn new(mut panel: SettingsPanel, theme: SharedThemeSink, search: SearchFactory) -> Self {
        if !panel.is_open() {
            panel.open();
        }
        panel.apply_theme();
        let accent_cursor = ACCENT_PRESETS
            .iter()
            .position(|p| p.color.eq_ignore_ascii_case(&panel.profile().accent_color))
            .unwrap_or(0);
        let (search_tx, search_rx) = mpsc::channel(16);
        Self {
            should_quit: false,
            panel,
            theme,
            tick_count: 0,
            focus: Field::Username,
            editing: false,
            photo_cursor: 0,
            accent_cursor,
            widget_cursor: 0,
            status_message: None,
            tick_rate: DEFAULT_TICK_RATE,
            search,
            search_tx,
            search_rx,
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    // -- focus -------------------------------------------------------------

    /// Whether `field` can currently take focus.
    pub fn is_focusable(&self, field: Field) -> bool {
        field != Field::ApiKey || self.panel.show_key_field()
    }

    /// Moves focus down one field, stopping at the last.
    pub fn focus_next(&mut self) {
        let start = self.focus_index();
        if let Some(next) = Field::ALL[start + 1..]
            .iter()
            .copied()
            .find(|f| self.is_focusable(*f))
        {
            self.set_focus(next);
        }
    }

    /// Moves focus up one field, stopping at the first.
    pub fn focus_prev(&mut self) {
        let start = self.focus_index();
        if let Some(prev) = Field::ALL[..start]
            .iter()
            .rev()
            .copied()
            .find(|f| self.is_focusable(*f))
        {
            self.set_focus(prev);
        }
    }

    /// Focuses `field`, ending any edit.
    ///
    /// The photo under the cursor is previewed while the grid has focus.
    pub fn set_focus(&mut self, field: Field) {
        if !self.is_focusable(field) {
            return;
        }
        self.editing = false;
        if self.focus == Field::Photos && field != Field::Photos {
            self.panel.preview_photo(None);
        }
        self.focus = field;
        if field == Field::Photos {
            self.preview_cursor_photo();
        }
    }

    fn focus_index(&self) -> usize {
        Field::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    // -- text editing ------------------------------------------------------

    /// Starts editing the focused field if it takes text.
    pub fn begin_edit(&mut self) {
        if self.focus.is_text() {
            self.editing = true;
        }
    }

    pub fn finish_edit(&mut self) {
        self.editing = false;
    }

    /// Current text of a text field.
    pub fn field_value(&self, field: Field) -> String {
        let profile = self.panel.profile();
        match field {
            Field::Username => profile.username.clone(),
            Field::Greeting => profile.greeting.clone(),
            Field::Search => self.panel.query().to_string(),
            Field::ApiKey => self.panel.api_key().to_string(),
            Field::BackgroundUrl => profile.background_url.clone(),
            Field::AccentText => profile.accent_color.clone(),
            Field::Theme | Field::Photos | Field::KeyToggle | Field::Accent => String::new(),
        }
    }

    /// Appends `c` to the field being edited. Every keystroke is applied.
    pub fn input_char(&mut self, c: char) {
        if !self.editing {
            return;
        }
        let mut value = self.field_value(self.focus);
        value.push(c);
        self.apply_text(self.focus, &value);
    }

    /// Deletes the last character of the field being edited.
    pub fn backspace(&mut self) {
        if !self.editing {
            return;
        }
        let mut value = self.field_value(self.focus);
        if value.pop().is_some() {
            self.apply_text(self.focus, &value);
        }
    }

    fn apply_text(&mut self, field: Field, value: &str) {
        match field {
            Field::Username => self.panel.set_username(value),
            Field::Greeting => self.panel.set_greeting(value),
            Field::Search => self.panel.set_query(value),
            Field::ApiKey => self.panel.save_api_key(value),
            Field::BackgroundUrl => self.panel.set_background_url(value),
            Field::AccentText => {
                self.panel.set_accent_color_text(value);
                self.sync_accent_cursor();
            }
            Field::Theme | Field::Photos | Field::KeyToggle | Field::Accent => {}
        }
    }

    // -- choices -----------------------------------------------------------

    /// Left/right on the focused field.
    pub fn move_horizontal(&mut self, delta: isize) {
        match self.focus {
            Field::Theme => self.cycle_theme(delta),
            Field::Photos => self.move_photo_cursor(delta),
            Field::Accent => {
                self.accent_cursor = step(self.accent_cursor, delta, ACCENT_PRESETS.len());
            }
            _ => {}
        }
    }

    /// Enter on the focused field: edit text, apply the photo or swatch
    /// under the cursor, or expand the key field.
    pub fn activate(&mut self) {
        match self.focus {
            f if f.is_text() => self.begin_edit(),
            Field::Theme => self.cycle_theme(1),
            Field::Photos => self.apply_selected_photo(),
            Field::KeyToggle => self.panel.toggle_key_field(),
            Field::Accent => self.apply_selected_accent(),
            _ => {}
        }
    }

    /// Selects the neighbouring theme mode, wrapping around.
    pub fn cycle_theme(&mut self, delta: isize) {
        let modes = ThemeMode::ALL;
        let current = modes
            .iter()
            .position(|m| *m == self.panel.profile().theme)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(modes.len() as isize) as usize;
        self.panel.set_theme(modes[next]);
    }

    pub fn move_photo_cursor(&mut self, delta: isize) {
        let len = self.panel.results().len();
        if len == 0 {
            return;
        }
        self.photo_cursor = step(self.photo_cursor, delta, len);
        self.preview_cursor_photo();
    }

    /// Applies the photo under the cursor as the background.
    pub fn apply_selected_photo(&mut self) {
        if let Some(photo) = self.panel.results().get(self.photo_cursor).cloned() {
            self.panel.apply_photo(&photo);
        }
    }

    /// Applies the swatch under the cursor as the accent color.
    pub fn apply_selected_accent(&mut self) {
        if let Some(preset) = ACCENT_PRESETS.get(self.accent_cursor) {
            self.panel.set_accent_color(preset.color);
        }
    }

    fn preview_cursor_photo(&mut self) {
        let photo = self.panel.results().get(self.photo_cursor).cloned();
        self.panel.preview_photo(photo);
    }

    fn sync_accent_cursor(&mut self) {
        let color = &self.panel.profile().accent_color;
        if let Some(i) = ACCENT_PRESETS
            .iter()
            .position(|p| p.color.eq_ignore_ascii_case(color))
        {
            self.accent_cursor = i;
        }
    }

    /// Keeps the photo cursor inside the current results.
    pub(crate) fn clamp_photo_cursor(&mut self) {
        let len = self.panel.results().len();
        self.photo_cursor = self.photo_cursor.min(len.saturating_sub(1));
        if self.focus == Field::Photos {
            self.preview_cursor_photo();
        }
    }

    // -- widgets -----------------------------------------------------------

    pub fn move_widget_cursor(&mut self, delta: isize) {
        self.widget_cursor = step(self.widget_cursor, delta, WidgetId::ALL.len());
    }

    /// Widget under the cursor on the Widgets tab.
    pub fn selected_widget(&self) -> Option<WidgetId> {
        catalog_entries().nth(self.widget_cursor).map(|info| info.id)
    }

    /// Toggles the widget under the cursor in the active layout.
    pub fn toggle_selected_widget(&mut self) {
        let Some(widget) = self.selected_widget() else {
            return;
        };
        if self.panel.toggle_widget(widget).is_none() {
            self.set_status(MSG_LAYOUTS_UNAVAILABLE);
        }
    }

    /// Switches the Widgets tab to the next layout.
    pub fn cycle_layout(&mut self) {
        let next: LayoutType = self.panel.active_layout().next();
        self.panel.set_active_layout(next);
        self.set_status(&format!("Editing the {} layout", next.name()));
    }

    // -- search ------------------------------------------------------------

    /// Starts a photo search for the current query in the background.
    ///
    /// When the panel issues no request (empty query or no key) its state
    /// already reflects that and nothing is spawned.
    pub fn start_search(&mut self) {
        match self.panel.begin_search() {
            Some(request) => self.spawn_search(request),
            None => self.clamp_photo_cursor(),
        }
    }

    /// Applies every finished search waiting in the channel.
    pub fn drain_search_results(&mut self) {
        while let Ok(message) = self.search_rx.try_recv() {
            self.apply_search_message(message);
        }
    }

    // -- status & lifecycle ------------------------------------------------

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some((message.to_string(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Closes the panel and marks the app for exit.
    pub fn quit(&mut self) {
        self.panel.close();
        self.should_quit = true;
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        terminal.draw(|frame| render_panel(frame, self))?;

        loop {
            self.drain_search_results();

            match event_handler.next(&mut reader).await? {
                Event::Key(key) => match handle_key_event(self, key) {
                    Action::Quit => {
                        self.quit();
                        return Ok(());
                    }
                    Action::Search => self.start_search(),
                    Action::None => {}
                },
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message();
                }
                Event::Resize(_, _) => {}
            }

            self.drain_search_results();
            terminal.draw(|frame| render_panel(frame, self))?;
        }
    }
}

/// Moves `index` by `delta` within `0..len`, clamping at both ends.
fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = index as isize + delta;
    moved.clamp(0, len as isize - 1) as usize
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests;
