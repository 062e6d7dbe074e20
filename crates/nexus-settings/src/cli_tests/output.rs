//! Formatting of command output.

use crate::commands::{format_profile, format_results, format_widget_list};
use nexus_settings::layout::Layouts;
use nexus_settings::photos::curated;
use nexus_settings::{LayoutType, Profile, ProfileField, ThemeMode};

#[test]
fn test_format_profile_lists_every_field() {
    let profile = Profile {
        username: "Ada".to_string(),
        theme: ThemeMode::Dark,
        ..Profile::default()
    };
    let out = format_profile(&profile);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), ProfileField::ALL.len());
    assert_eq!(lines[0], "username       = Ada");
    assert!(lines.contains(&"accentColor    = #3B82F6"));
    assert!(lines.contains(&"theme          = dark"));
    assert!(lines.contains(&"greeting       = "));
}

#[test]
fn test_format_widget_list_marks_enabled() {
    let out = format_widget_list(&Layouts::default(), LayoutType::Focus);
    assert!(out.starts_with("Focus layout: 3 enabled\n"));
    assert!(out.contains("  [x] clock        Clock & Greeting\n"));
    assert!(out.contains("  [ ] rss          RSS Feeds\n"));
    assert!(out.contains("\nIntegrations\n"));
}

#[test]
fn test_format_widget_list_follows_layout() {
    let out = format_widget_list(&Layouts::default(), LayoutType::Workflow);
    assert!(out.starts_with("Workflow layout: 4 enabled\n"));
    assert!(out.contains("  [x] pomodoro     Pomodoro Timer\n"));
    assert!(out.contains("  [ ] search       Search Bar\n"));
}

#[test]
fn test_format_results_tab_separated() {
    let photos = curated();
    let out = format_results(&photos[..2]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let cols: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(cols, vec![photos[0].id.as_str(), "Meadow", photos[0].full.as_str()]);
}
