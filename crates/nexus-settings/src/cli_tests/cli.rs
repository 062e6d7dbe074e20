//! CLI argument parsing tests.

use crate::{Cli, Commands, ConfigAction, KeyAction, ProfileAction, WidgetsAction};
use clap::{CommandFactory, Parser};
use nexus_settings::{LayoutType, ProfileField, WidgetId};
use std::path::PathBuf;

#[test]
fn verify_cli() {
    // Verify the CLI configuration is valid
    Cli::command().debug_assert();
}

#[test]
fn test_tui_layout_defaults_to_none() {
    let cli = Cli::try_parse_from(["nexus", "tui"]).unwrap();
    match cli.command {
        Commands::Tui { layout } => assert_eq!(layout, None),
        _ => panic!("unexpected command variant"),
    }
    assert!(cli.config.is_none());
    assert!(cli.data_dir.is_none());
}

#[test]
fn test_tui_layout_flag() {
    let cli = Cli::try_parse_from(["nexus", "tui", "--layout", "workflow"]).unwrap();
    match cli.command {
        Commands::Tui { layout } => assert_eq!(layout, Some(LayoutType::Workflow)),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_unknown_layout_rejected() {
    let result = Cli::try_parse_from(["nexus", "tui", "--layout", "grid"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "nexus",
        "profile",
        "show",
        "--data-dir",
        "/tmp/nexus-data",
        "--config",
        "/tmp/nexus.toml",
    ])
    .unwrap();
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/nexus-data")));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/nexus.toml")));
    assert!(matches!(
        cli.command,
        Commands::Profile {
            action: ProfileAction::Show
        }
    ));
}

#[test]
fn test_profile_set_parses_field_spellings() {
    for (arg, expected) in [
        ("username", ProfileField::Username),
        ("background-url", ProfileField::BackgroundUrl),
        ("accentColor", ProfileField::AccentColor),
        ("theme", ProfileField::Theme),
    ] {
        let cli = Cli::try_parse_from(["nexus", "profile", "set", arg, "value"]).unwrap();
        match cli.command {
            Commands::Profile {
                action: ProfileAction::Set { field, value },
            } => {
                assert_eq!(field, expected);
                assert_eq!(value, "value");
            }
            _ => panic!("unexpected command variant"),
        }
    }
}

#[test]
fn test_profile_set_unknown_field_rejected() {
    let result = Cli::try_parse_from(["nexus", "profile", "set", "avatar", "x"]);
    assert!(result.is_err());
}

#[test]
fn test_profile_set_requires_value() {
    let result = Cli::try_parse_from(["nexus", "profile", "set", "username"]);
    assert!(result.is_err());
}

#[test]
fn test_widgets_toggle_parses_widget_and_layout() {
    let cli =
        Cli::try_parse_from(["nexus", "widgets", "toggle", "github", "--layout", "dashboard"])
            .unwrap();
    match cli.command {
        Commands::Widgets {
            action: WidgetsAction::Toggle { widget, layout },
        } => {
            assert_eq!(widget, WidgetId::Github);
            assert_eq!(layout, Some(LayoutType::Dashboard));
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_widgets_toggle_unknown_widget_rejected() {
    let result = Cli::try_parse_from(["nexus", "widgets", "toggle", "calendar"]);
    assert!(result.is_err());
}

#[test]
fn test_widgets_without_subcommand_fails() {
    let result = Cli::try_parse_from(["nexus", "widgets"]);
    assert!(result.is_err());
}

#[test]
fn test_key_set_and_clear() {
    let cli = Cli::try_parse_from(["nexus", "key", "set", "abc123"]).unwrap();
    match cli.command {
        Commands::Key {
            action: KeyAction::Set { key },
        } => assert_eq!(key, "abc123"),
        _ => panic!("unexpected command variant"),
    }
    let cli = Cli::try_parse_from(["nexus", "key", "clear"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Key {
            action: KeyAction::Clear
        }
    ));
}

#[test]
fn test_search_collects_words() {
    let cli = Cli::try_parse_from(["nexus", "search", "misty", "forest"]).unwrap();
    match cli.command {
        Commands::Search { query } => assert_eq!(query, vec!["misty", "forest"]),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_search_requires_query() {
    let result = Cli::try_parse_from(["nexus", "search"]);
    assert!(result.is_err());
}

#[test]
fn test_config_init_force_flag() {
    let cli = Cli::try_parse_from(["nexus", "config", "init", "--force"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigAction::Init { force },
        } => assert!(force),
        _ => panic!("unexpected command variant"),
    }
    let cli = Cli::try_parse_from(["nexus", "config", "init"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigAction::Init { force },
        } => assert!(!force),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_config_path_and_validate() {
    let cli = Cli::try_parse_from(["nexus", "config", "path"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Path
        }
    ));
    let cli = Cli::try_parse_from(["nexus", "config", "validate"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Validate
        }
    ));
}
