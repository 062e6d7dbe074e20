//! AI Assistant tab. Its settings belong to the new-tab page itself.

use super::section_title;
use crate::tui::ui::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const ASSISTANT_TEXT: &str =
    "The AI assistant is configured from the Nexus new-tab page. Nothing here is stored by this panel.";

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        section_title("AI Assistant", palette),
        Line::from(Span::styled(ASSISTANT_TEXT, palette.muted())),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
