//! One view per settings tab, plus the line-building helpers they share.

pub mod assistant;
pub mod general;
pub mod widgets;

#[cfg(test)]
mod tests;

use crate::tui::ui::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Width of the label column on the General tab.
pub const LABEL_WIDTH: usize = 18;

/// Marker in front of the focused row.
pub const FOCUS_MARKER: &str = "› ";

/// Cursor drawn after the text of the field being edited.
pub const EDIT_CURSOR: &str = "▏";

/// Upper-cased section heading.
pub fn section_title(title: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        title.to_uppercase(),
        palette.muted().add_modifier(Modifier::BOLD),
    ))
}

/// The focus marker and padded label that start every General tab row.
pub fn row_prefix(label: &str, focused: bool, palette: &Palette) -> Vec<Span<'static>> {
    let (marker, label_style) = if focused {
        (
            Span::styled(FOCUS_MARKER, palette.accent()),
            palette.text().add_modifier(Modifier::BOLD),
        )
    } else {
        (Span::raw("  "), palette.muted())
    };
    vec![
        marker,
        Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), label_style),
    ]
}

/// Spans for a text input: the value, or the placeholder when empty.
pub fn input_spans(
    value: &str,
    placeholder: &str,
    editing: bool,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(2);
    if value.is_empty() && !editing {
        spans.push(Span::styled(
            placeholder.to_string(),
            palette.muted().add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), palette.text()));
    }
    if editing {
        spans.push(Span::styled(EDIT_CURSOR, palette.accent()));
    }
    spans
}

/// Truncates `text` to `max` characters, ending with `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// First row to show so that `line` stays inside a viewport of `height`.
pub fn scroll_offset(line: usize, height: u16) -> u16 {
    let height = height.max(1) as usize;
    line.saturating_sub(height - 1) as u16
}

/// Style for a choice: under the cursor, selected, or neither.
pub fn choice_style(under_cursor: bool, selected: bool, palette: &Palette) -> Style {
    if under_cursor {
        palette.cursor()
    } else if selected {
        palette.accent().add_modifier(Modifier::BOLD)
    } else {
        palette.muted()
    }
}
