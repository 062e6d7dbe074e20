//! Widgets tab: per-layout widget toggles grouped by catalog section.

use super::{scroll_offset, section_title, truncate, FOCUS_MARKER};
use crate::tui::app::App;
use crate::tui::ui::Palette;
use crate::widgets::CATALOG;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the widget name column.
const NAME_WIDTH: usize = 18;

pub const TOGGLE_ON: &str = "[━●]";
pub const TOGGLE_OFF: &str = "[○━]";

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (lines, cursor_line) = widget_lines(app, palette, area.width);
    let offset = scroll_offset(cursor_line, area.height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

/// `"{n} enabled for {Layout}"`.
pub fn enabled_summary(app: &App) -> String {
    format!(
        "{} enabled for {}",
        app.panel.enabled_count(),
        app.panel.active_layout().name()
    )
}

/// Every line of the tab and the index of the line under the cursor.
pub fn widget_lines(app: &App, palette: &Palette, width: u16) -> (Vec<Line<'static>>, usize) {
    let layout = app.panel.active_layout();
    let summary = enabled_summary(app);
    let padding = usize::from(width).saturating_sub("WIDGETS".len() + summary.len());

    let mut heading = section_title("Widgets", palette);
    heading.spans.push(Span::raw(" ".repeat(padding)));
    heading.spans.push(Span::styled(summary, palette.muted()));

    let mut lines = vec![
        heading,
        Line::from(Span::styled(layout.description(), palette.text())),
    ];
    if app.panel.layouts().is_none() {
        lines.push(Line::from(Span::styled(
            "Layouts could not be loaded; changes are disabled.",
            palette.muted(),
        )));
    }
    lines.push(Line::default());

    let desc_width =
        usize::from(width).saturating_sub(2 + TOGGLE_ON.chars().count() + 1 + NAME_WIDTH);
    let mut cursor_line = 0;
    let mut index = 0;
    for group in CATALOG {
        lines.push(Line::from(Span::styled(
            group.label.to_uppercase(),
            palette.muted(),
        )));
        for info in group.items {
            let under_cursor = index == app.widget_cursor;
            let enabled = app.panel.is_widget_enabled(info.id);
            if under_cursor {
                cursor_line = lines.len();
            }
            let marker = if under_cursor {
                Span::styled(FOCUS_MARKER, palette.accent())
            } else {
                Span::raw("  ")
            };
            let (toggle, toggle_style, name_style) = if enabled {
                (TOGGLE_ON, palette.accent(), palette.text())
            } else {
                (TOGGLE_OFF, palette.muted(), palette.muted())
            };
            let name_style = if under_cursor {
                name_style.add_modifier(Modifier::BOLD)
            } else {
                name_style
            };
            lines.push(Line::from(vec![
                marker,
                Span::styled(toggle, toggle_style),
                Span::raw(" "),
                Span::styled(format!("{:<NAME_WIDTH$}", info.name), name_style),
                Span::styled(truncate(info.description, desc_width), palette.muted()),
            ]));
            index += 1;
        }
        lines.push(Line::default());
    }
    (lines, cursor_line)
}
