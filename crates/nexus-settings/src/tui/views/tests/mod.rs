use super::general::{general_lines, PLACEHOLDER_NAME, PLACEHOLDER_SEARCH};
use super::widgets::{enabled_summary, widget_lines, TOGGLE_OFF, TOGGLE_ON};
use super::*;
use crate::panel::{SettingsTab, KEY_HINT_MISSING, MSG_KEY_REQUIRED};
use crate::store::SettingsStore;
use crate::tui::app::{App, Field};
use crate::tui::test_utils::{
    canned_search, find_row_with_text, make_app, make_app_with, render_app_to_buffer,
};
use crate::widgets::WidgetId;
use crate::UNSPLASH_DEVELOPERS_URL;
use nexus_storage::{MemoryStore, LAYOUTS_KEY};
use serde_json::json;

fn palette(app: &App) -> Palette {
    Palette::from_applied(&app.theme.snapshot())
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn general_text(app: &App) -> Vec<String> {
    let (lines, _) = general_lines(app, &palette(app), 100);
    lines.iter().map(line_text).collect()
}

fn widget_text(app: &App) -> Vec<String> {
    let (lines, _) = widget_lines(app, &palette(app), 100);
    lines.iter().map(line_text).collect()
}

fn find<'a>(lines: &'a [String], needle: &str) -> Option<&'a String> {
    lines.iter().find(|l| l.contains(needle))
}

// --- helpers ---

#[test]
fn test_truncate_adds_ellipsis_only_when_cut() {
    assert_eq!(truncate("Meadow", 10), "Meadow");
    assert_eq!(truncate("Meadow", 6), "Meadow");
    assert_eq!(truncate("Mountains", 5), "Moun…");
    assert_eq!(truncate("Mountains", 0), "");
}

#[test]
fn test_scroll_offset_keeps_line_visible() {
    assert_eq!(scroll_offset(0, 10), 0);
    assert_eq!(scroll_offset(9, 10), 0);
    assert_eq!(scroll_offset(12, 10), 3);
    assert_eq!(scroll_offset(4, 0), 4);
}

#[test]
fn test_row_prefix_pads_label() {
    let app = make_app();
    let spans = row_prefix("Name", true, &palette(&app));
    assert_eq!(spans[0].content, FOCUS_MARKER);
    assert_eq!(spans[1].content.len(), LABEL_WIDTH);
}

#[test]
fn test_input_spans_placeholder_and_cursor() {
    let app = make_app();
    let p = palette(&app);
    let idle: String = input_spans("", "hint", false, &p)
        .iter()
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(idle, "hint");
    let editing: String = input_spans("", "hint", true, &p)
        .iter()
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(editing, EDIT_CURSOR);
}

// --- General tab ---

#[test]
fn test_general_shows_sections_and_placeholders() {
    let app = make_app();
    let lines = general_text(&app);
    for title in ["PROFILE", "APPEARANCE", "BACKGROUND IMAGE", "ACCENT COLOR"] {
        assert!(find(&lines, title).is_some(), "missing section {title}");
    }
    let name = find(&lines, PLACEHOLDER_NAME).expect("name row");
    assert!(name.starts_with(FOCUS_MARKER));
    assert!(find(&lines, PLACEHOLDER_SEARCH).is_some());
    assert!(find(&lines, "Or paste an image URL").is_some());
}

#[test]
fn test_general_focus_line_tracks_focus() {
    let mut app = make_app();
    let (lines, focus_line) = general_lines(&app, &palette(&app), 100);
    assert!(line_text(&lines[focus_line]).contains("Name"));

    app.set_focus(Field::AccentText);
    let (lines, focus_line) = general_lines(&app, &palette(&app), 100);
    assert_eq!(focus_line, lines.len() - 1);
    assert!(line_text(&lines[focus_line]).contains("#3B82F6"));
}

#[test]
fn test_theme_row_marks_stored_mode() {
    let mut app = make_app();
    let lines = general_text(&app);
    let row = find(&lines, "Theme").expect("theme row");
    assert!(row.contains("● System"));
    assert!(row.contains("○ Light"));

    app.cycle_theme(1);
    let lines = general_text(&app);
    let row = find(&lines, "Theme").expect("theme row");
    assert!(row.contains("● Light"));
    assert!(row.contains("○ System"));
}

#[test]
fn test_key_toggle_collapsed_by_default() {
    let app = make_app();
    let lines = general_text(&app);
    let toggle = find(&lines, "Unsplash API key").expect("toggle row");
    assert!(toggle.contains('▸'));
    assert!(toggle.contains(KEY_HINT_MISSING));
    assert!(find(&lines, UNSPLASH_DEVELOPERS_URL).is_none());
}

#[test]
fn test_expanded_key_field_is_masked() {
    let mut app = make_app();
    app.panel.toggle_key_field();
    app.panel.save_api_key("abcd");
    let lines = general_text(&app);
    let key = find(&lines, "Access Key").expect("key row");
    assert!(key.contains("••••"));
    assert!(!key.contains("abcd"));
    assert!(key.contains(&format!("Get key: {UNSPLASH_DEVELOPERS_URL}")));
    assert!(find(&lines, "▾ Unsplash API key (configured)").is_some());
}

#[test]
fn test_search_message_line_shown() {
    let mut app = make_app();
    assert!(find(&general_text(&app), MSG_KEY_REQUIRED).is_none());
    app.panel.set_query("fjords");
    app.start_search();
    assert!(find(&general_text(&app), MSG_KEY_REQUIRED).is_some());
}

#[test]
fn test_photo_grid_marks_active_photo() {
    let mut app = make_app();
    let lines = general_text(&app);
    let grid = find(&lines, "Meadow").expect("curated grid");
    assert!(grid.contains("Photos"));
    assert!(!grid.contains('✓'));

    app.set_focus(Field::Photos);
    app.activate();
    let lines = general_text(&app);
    assert!(find(&lines, "✓ Meadow").is_some());
    assert!(find(&lines, "[x] Remove").is_some());
}

#[test]
fn test_preview_row_shown_for_unapplied_photo() {
    let mut app = make_app();
    app.set_focus(Field::Photos);
    app.move_photo_cursor(1);
    let lines = general_text(&app);
    let preview = find(&lines, "Preview").expect("preview row");
    assert!(preview.contains("Mountains"));
}

#[test]
fn test_accent_swatches_mark_selection() {
    let app = make_app();
    let lines = general_text(&app);
    let swatches = find(&lines, "Swatches").expect("swatch row");
    assert!(swatches.contains("■Blue✓"));
    assert!(swatches.contains("■Violet "));
    let hex = find(&lines, "Hex").expect("hex row");
    assert!(hex.contains("#3B82F6  ■■"));
}

// --- Widgets tab ---

#[test]
fn test_enabled_summary_counts_active_layout() {
    let mut app = make_app();
    assert_eq!(enabled_summary(&app), "3 enabled for Focus");
    app.cycle_layout();
    assert_eq!(enabled_summary(&app), "7 enabled for Dashboard");
}

#[test]
fn test_widget_rows_show_toggle_state() {
    let app = make_app();
    let lines = widget_text(&app);
    let clock = find(&lines, "Clock & Greeting").expect("clock row");
    assert!(clock.starts_with(FOCUS_MARKER));
    assert!(clock.contains(TOGGLE_ON));
    assert!(clock.contains("Time, date, personalized message"));
    let rss = find(&lines, "RSS Feeds").expect("rss row");
    assert!(rss.contains(TOGGLE_OFF));
    for group in ["CORE", "PRODUCTIVITY", "INTEGRATIONS"] {
        assert!(lines.iter().any(|l| l == group), "missing group {group}");
    }
}

#[test]
fn test_widget_heading_and_description() {
    let app = make_app();
    let lines = widget_text(&app);
    assert!(lines[0].starts_with("WIDGETS"));
    assert!(lines[0].ends_with("3 enabled for Focus"));
    assert_eq!(lines[1], "Minimal: clock, search, essentials");
}

#[test]
fn test_widget_cursor_line_follows_cursor() {
    let mut app = make_app();
    app.move_widget_cursor(12);
    let (lines, cursor_line) = widget_lines(&app, &palette(&app), 100);
    assert!(line_text(&lines[cursor_line]).contains("Shortcuts"));
}

#[test]
fn test_toggle_reflected_in_rows() {
    let mut app = make_app();
    app.panel.toggle_widget(WidgetId::Rss);
    let lines = widget_text(&app);
    assert!(find(&lines, "RSS Feeds").expect("rss row").contains(TOGGLE_ON));
    assert!(lines[0].ends_with("4 enabled for Focus"));
}

#[test]
fn test_unloadable_layouts_notice() {
    let store = SettingsStore::new(
        Box::new(MemoryStore::with_entries([(
            LAYOUTS_KEY,
            json!({"focus": {"widgets": ["calendar"]}}),
        )])),
        Box::new(MemoryStore::new()),
    );
    let app = make_app_with(store, canned_search(Vec::new()).0);
    let lines = widget_text(&app);
    assert!(find(&lines, "Layouts could not be loaded").is_some());
    assert!(lines[0].ends_with("0 enabled for Focus"));
}

// --- full frames ---

#[test]
fn test_widgets_tab_renders_in_frame() {
    let mut app = make_app();
    app.panel.set_tab(SettingsTab::Widgets);
    let buffer = render_app_to_buffer(&app, 100, 30);
    assert!(find_row_with_text(&buffer, "3 enabled for Focus").is_some());
    assert!(find_row_with_text(&buffer, "Quick Links").is_some());
}

#[test]
fn test_assistant_tab_renders_notice() {
    let mut app = make_app();
    app.panel.set_tab(SettingsTab::Ai);
    let buffer = render_app_to_buffer(&app, 100, 30);
    assert!(find_row_with_text(&buffer, "AI ASSISTANT").is_some());
    assert!(find_row_with_text(&buffer, "configured from the Nexus new-tab page").is_some());
}

#[test]
fn test_general_tab_scrolls_to_focused_row() {
    let mut app = make_app();
    app.set_focus(Field::AccentText);
    let buffer = render_app_to_buffer(&app, 100, 20);
    assert!(find_row_with_text(&buffer, "#3B82F6").is_some());
    assert!(find_row_with_text(&buffer, PLACEHOLDER_NAME).is_none());
}
