//! General tab: profile, theme, background image, and accent color.
//!
//! The tab is one tall paragraph scrolled so the focused row stays visible.

use super::{
    choice_style, input_spans, row_prefix, scroll_offset, section_title, truncate, LABEL_WIDTH,
};
use crate::profile::{ThemeMode, DEFAULT_ACCENT_COLOR};
use crate::theme::ACCENT_PRESETS;
use crate::tui::app::{App, Field, PHOTO_COLUMNS};
use crate::tui::ui::{accent_color, Palette};
use crate::UNSPLASH_DEVELOPERS_URL;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const PLACEHOLDER_NAME: &str = "Your name";
pub const PLACEHOLDER_GREETING: &str = "e.g. Ready to build something great?";
pub const PLACEHOLDER_SEARCH: &str = "Search Unsplash photos…";
pub const PLACEHOLDER_KEY: &str = "Your Unsplash Access Key";
pub const PLACEHOLDER_URL: &str = "https://images.unsplash.com/…";

/// Shown after the search field while a search runs.
pub const SEARCHING_TEXT: &str = " searching…";

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (lines, focus_line) = general_lines(app, palette, area.width);
    let offset = scroll_offset(focus_line, area.height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

/// Accumulates lines and remembers which one holds the focus.
struct Rows {
    lines: Vec<Line<'static>>,
    focus_line: usize,
}

impl Rows {
    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn push_focused(&mut self, focused: bool, line: Line<'static>) {
        if focused {
            self.focus_line = self.lines.len();
        }
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }
}

/// Every line of the tab and the index of the focused one.
pub fn general_lines(app: &App, palette: &Palette, width: u16) -> (Vec<Line<'static>>, usize) {
    let panel = &app.panel;
    let profile = panel.profile();
    let mut rows = Rows {
        lines: Vec::new(),
        focus_line: 0,
    };

    rows.push(section_title("Profile", palette));
    rows.push_focused(
        app.focus == Field::Username,
        text_row(app, Field::Username, PLACEHOLDER_NAME, palette),
    );
    rows.push_focused(
        app.focus == Field::Greeting,
        text_row(app, Field::Greeting, PLACEHOLDER_GREETING, palette),
    );
    rows.blank();

    rows.push(section_title("Appearance", palette));
    rows.push_focused(app.focus == Field::Theme, theme_row(app, palette));
    rows.blank();

    rows.push(section_title("Background Image", palette));
    let mut search = text_row(app, Field::Search, PLACEHOLDER_SEARCH, palette);
    if panel.is_loading() {
        search.spans.push(Span::styled(SEARCHING_TEXT, palette.accent()));
    }
    rows.push_focused(app.focus == Field::Search, search);
    if !panel.message().is_empty() {
        rows.push(indented(Span::styled(panel.message().to_string(), palette.muted())));
    }

    let cell_width =
        (usize::from(width).saturating_sub(2 + LABEL_WIDTH) / PHOTO_COLUMNS).clamp(8, 24);
    for (row, chunk) in panel.results().chunks(PHOTO_COLUMNS).enumerate() {
        let cursor_row = app.focus == Field::Photos && app.photo_cursor / PHOTO_COLUMNS == row;
        let label = if row == 0 { Field::Photos.label() } else { "" };
        let mut spans = row_prefix(label, cursor_row, palette);
        for (col, photo) in chunk.iter().enumerate() {
            let index = row * PHOTO_COLUMNS + col;
            let active = panel.is_photo_active(photo);
            let under_cursor = app.focus == Field::Photos && index == app.photo_cursor;
            let mark = if active { "✓ " } else { "  " };
            let text_width = cell_width - 3;
            let text = format!(
                "{mark}{:<text_width$}",
                truncate(&photo.label, text_width)
            );
            spans.push(Span::styled(text, choice_style(under_cursor, active, palette)));
            spans.push(Span::raw(" "));
        }
        rows.push_focused(cursor_row, Line::from(spans));
    }

    if let Some(preview) = panel.preview_strip() {
        let mut spans = row_prefix("Preview", false, palette);
        spans.push(Span::styled(preview.label.clone(), palette.text()));
        rows.push(Line::from(spans));
    }

    let arrow = if panel.show_key_field() { "▾" } else { "▸" };
    let focused = app.focus == Field::KeyToggle;
    let mut key_toggle = row_prefix("", focused, palette);
    key_toggle.truncate(1);
    key_toggle.push(Span::styled(
        format!("{arrow} {} {}", Field::KeyToggle.label(), panel.key_field_hint()),
        if focused { palette.text() } else { palette.muted() },
    ));
    rows.push_focused(focused, Line::from(key_toggle));

    if panel.show_key_field() {
        let mut key = text_row(app, Field::ApiKey, PLACEHOLDER_KEY, palette);
        key.spans.push(Span::styled(
            format!("  Get key: {UNSPLASH_DEVELOPERS_URL}"),
            palette.muted(),
        ));
        rows.push_focused(app.focus == Field::ApiKey, key);
    }

    rows.push(indented(Span::styled("Or paste an image URL", palette.muted())));
    let mut url = text_row(app, Field::BackgroundUrl, PLACEHOLDER_URL, palette);
    if !profile.background_url.is_empty() {
        url.spans.push(Span::styled("  [x] Remove", palette.muted()));
    }
    rows.push_focused(app.focus == Field::BackgroundUrl, url);
    rows.blank();

    rows.push(section_title("Accent Color", palette));
    let focused = app.focus == Field::Accent;
    let mut swatches = row_prefix(Field::Accent.label(), focused, palette);
    for (i, preset) in ACCENT_PRESETS.iter().enumerate() {
        let selected = profile.accent_color.eq_ignore_ascii_case(preset.color);
        let under_cursor = focused && i == app.accent_cursor;
        let check = if selected { "✓" } else { "" };
        swatches.push(Span::styled(
            "■",
            Style::default().fg(accent_color(preset.color)),
        ));
        swatches.push(Span::styled(
            format!("{}{check}", preset.name),
            choice_style(under_cursor, selected, palette),
        ));
        swatches.push(Span::raw(" "));
    }
    rows.push_focused(focused, Line::from(swatches));

    let mut hex = text_row(app, Field::AccentText, DEFAULT_ACCENT_COLOR, palette);
    hex.spans.push(Span::raw("  "));
    hex.spans.push(Span::styled(
        "■■",
        Style::default().fg(accent_color(&profile.accent_color)),
    ));
    rows.push_focused(app.focus == Field::AccentText, hex);

    (rows.lines, rows.focus_line)
}

/// A labelled text input row.
fn text_row(app: &App, field: Field, placeholder: &str, palette: &Palette) -> Line<'static> {
    let focused = app.focus == field;
    let editing = focused && app.editing;
    let mut value = app.field_value(field);
    if field == Field::ApiKey {
        value = "•".repeat(value.chars().count());
    }
    let mut spans = row_prefix(field.label(), focused, palette);
    spans.extend(input_spans(&value, placeholder, editing, palette));
    Line::from(spans)
}

/// The three theme choices, the stored one marked.
fn theme_row(app: &App, palette: &Palette) -> Line<'static> {
    let focused = app.focus == Field::Theme;
    let current = app.panel.profile().theme;
    let mut spans = row_prefix(Field::Theme.label(), focused, palette);
    for mode in ThemeMode::ALL {
        let selected = mode == current;
        let dot = if selected { "●" } else { "○" };
        spans.push(Span::styled(
            format!(" {dot} {} ", mode.label()),
            choice_style(focused && selected, selected, palette),
        ));
    }
    Line::from(spans)
}

/// A line starting at the value column.
fn indented(span: Span<'static>) -> Line<'static> {
    Line::from(vec![Span::raw(" ".repeat(2 + LABEL_WIDTH)), span])
}
