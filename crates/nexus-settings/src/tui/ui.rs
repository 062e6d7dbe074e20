//! Main rendering orchestration for the settings panel.
//!
//! Provides the top-level `render_panel` function that composes the header,
//! tab bar, active tab view, key hints, and footer. Colors come from the
//! theme the panel last applied through its [`SharedThemeSink`], so accent
//! and theme edits repaint the whole screen.
//!
//! [`SharedThemeSink`]: crate::theme::SharedThemeSink

use crate::panel::SettingsTab;
use crate::theme::{parse_hex_color, AppliedTheme, ResolvedTheme};
use crate::tui::app::{App, Field};
use crate::tui::views;
use crate::{APP_SHORT_NAME, REPO_URL};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::time::Instant;

/// Header title.
const HEADER_TEXT: &str = "Settings";

/// Version string shown in the header (right-aligned) and footer.
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Used while the stored accent is not a parseable hex color.
pub const FALLBACK_ACCENT: Color = Color::Blue;

/// Colors for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub fg: Color,
    pub muted: Color,
    pub bg: Color,
}

impl Palette {
    pub fn from_applied(applied: &AppliedTheme) -> Self {
        let accent = accent_color(&applied.accent_color);
        match applied.theme {
            ResolvedTheme::Dark => Self {
                accent,
                fg: Color::White,
                muted: Color::Gray,
                bg: Color::Black,
            },
            ResolvedTheme::Light => Self {
                accent,
                fg: Color::Black,
                muted: Color::DarkGray,
                bg: Color::White,
            },
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Inverted accent, for the item under a cursor.
    pub fn cursor(&self) -> Style {
        Style::default().fg(self.bg).bg(self.accent)
    }
}

/// Terminal color for an accent hex string.
pub fn accent_color(hex: &str) -> Color {
    parse_hex_color(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(FALLBACK_ACCENT)
}

/// Renders the whole panel.
///
/// Layout, top to bottom: header (2 rows), tab bar (2 rows), the active
/// tab's view, one row of key hints (or the status message), and the footer.
pub fn render_panel(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::from_applied(&app.theme.snapshot());

    frame.render_widget(
        Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(2), // tabs
            Constraint::Min(3),    // active tab
            Constraint::Length(1), // key hints / status
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0], &palette);
    render_tabs(frame, chunks[1], app.panel.tab(), &palette);

    match app.panel.tab() {
        SettingsTab::General => views::general::render(frame, chunks[2], app, &palette),
        SettingsTab::Widgets => views::widgets::render(frame, chunks[2], app, &palette),
        SettingsTab::Ai => views::assistant::render(frame, chunks[2], &palette),
    }

    let hints = match &app.status_message {
        Some((msg, expiry)) if Instant::now() < *expiry => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)))
        }
        _ => Line::from(Span::styled(hint_text(app), palette.muted())),
    };
    frame.render_widget(Paragraph::new(hints), chunks[3]);

    render_footer(frame, chunks[4], &palette);
}

/// Title (left) and version (right), with the subtitle below.
fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let width = area.width as usize;
    let padding = width.saturating_sub(HEADER_TEXT.len() + VERSION_TEXT.len());
    let lines = vec![
        Line::from(vec![
            Span::styled(HEADER_TEXT, palette.text().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::styled(VERSION_TEXT, palette.muted()),
        ]),
        Line::from(Span::styled(
            format!("Personalize your {APP_SHORT_NAME}"),
            palette.muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: SettingsTab, palette: &Palette) {
    let index = SettingsTab::ALL
        .iter()
        .position(|t| *t == active)
        .unwrap_or(0);
    let tabs = Tabs::new(SettingsTab::ALL.iter().map(|t| t.label()))
        .select(index)
        .style(palette.muted())
        .highlight_style(palette.accent().add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .divider(" ")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.muted()),
        );
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(format!("{APP_SHORT_NAME} "), palette.muted()),
        Span::styled(VERSION_TEXT, palette.text()),
        Span::styled(" · ", palette.muted()),
        Span::styled(REPO_URL, palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the current tab and mode.
pub fn hint_text(app: &App) -> &'static str {
    if app.editing {
        return if app.focus == Field::Search {
            "[Enter] Search  [Esc] Done  [Backspace] Delete"
        } else {
            "[Enter/Esc] Done  [Backspace] Delete"
        };
    }
    match app.panel.tab() {
        SettingsTab::General => {
            "[j/k] Field  [h/l] Choose  [Enter] Edit/Apply  [/] Search  [Tab] Next tab  [q] Close"
        }
        SettingsTab::Widgets => {
            "[j/k] Widget  [Enter] Toggle  [L] Layout  [Tab] Next tab  [q] Close"
        }
        SettingsTab::Ai => "[Tab] Next tab  [q] Close",
    }
}
