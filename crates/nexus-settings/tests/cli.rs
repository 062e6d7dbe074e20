//! Integration tests for the `nexus` binary.
//!
//! Every test points the config and data directories at its own temp dir,
//! so nothing touches the real user configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NEXUS_BIN: &str = env!("CARGO_BIN_EXE_nexus");

/// A `nexus` command isolated inside `home`.
fn nexus(home: &Path) -> Command {
    let mut cmd = Command::new(NEXUS_BIN);
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("NEXUS_LOG", "error");
    cmd
}

fn data_dir(home: &Path) -> std::path::PathBuf {
    home.join("data").join("nexus-settings")
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("document written");
    serde_json::from_str(&content).expect("valid JSON")
}

// --- config ---

#[test]
fn test_config_path_uses_xdg_config_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config/nexus-settings/config.toml");
    nexus(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration at"));
    let config = home.path().join("config/nexus-settings/config.toml");
    assert!(config.exists());

    nexus(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    nexus(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
    assert!(config.with_extension("toml.backup").exists());
}

#[test]
fn test_config_validate_defaults_without_file() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_rejects_bad_tick_rate() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[tui]\ntick_rate = \"fast\"\n").unwrap();
    nexus(home.path())
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tui.tick_rate"));
}

#[test]
fn test_invalid_config_blocks_other_commands() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[unsplash]\nper_page = 0\n").unwrap();
    nexus(home.path())
        .args(["profile", "show", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["profile", "show", "--config"])
        .arg(home.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// --- profile ---

#[test]
fn test_profile_show_defaults() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme          = system"))
        .stdout(predicate::str::contains("accentColor    = #3B82F6"));
}

#[test]
fn test_profile_set_persists_whole_record() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["profile", "set", "username", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("username = Ada"));
    nexus(home.path())
        .args(["profile", "set", "theme", "dark"])
        .assert()
        .success();

    let doc = read_json(&data_dir(home.path()).join("storage.json"));
    let profile = &doc["nexus.profile"];
    assert_eq!(profile["username"], "Ada");
    assert_eq!(profile["theme"], "dark");
    assert_eq!(profile["accentColor"], "#3B82F6");
    assert_eq!(profile["backgroundUrl"], "");

    nexus(home.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("username       = Ada"));
}

#[test]
fn test_profile_set_invalid_theme_fails_without_writing() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["profile", "set", "theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid theme: sepia"));
    assert!(!data_dir(home.path()).join("storage.json").exists());
}

#[test]
fn test_profile_set_keeps_readable_fields_of_damaged_profile() {
    let home = TempDir::new().unwrap();
    let dir = data_dir(home.path());
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("storage.json"),
        r##"{"nexus.profile":{"username":"Ada","accentColor":"#10B981","theme":"sepia"}}"##,
    )
    .unwrap();

    nexus(home.path())
        .args(["profile", "set", "greeting", "Hello"])
        .assert()
        .success();

    let profile = &read_json(&dir.join("storage.json"))["nexus.profile"];
    assert_eq!(profile["username"], "Ada");
    assert_eq!(profile["accentColor"], "#10B981");
    assert_eq!(profile["greeting"], "Hello");
    assert_eq!(profile["theme"], "system");
}

#[test]
fn test_profile_set_refuses_unreadable_profile() {
    let home = TempDir::new().unwrap();
    let dir = data_dir(home.path());
    fs::create_dir_all(&dir).unwrap();
    let original = r#"{"nexus.profile":["Ada"]}"#;
    fs::write(dir.join("storage.json"), original).unwrap();

    nexus(home.path())
        .args(["profile", "set", "greeting", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile could not be loaded"));
    assert_eq!(fs::read_to_string(dir.join("storage.json")).unwrap(), original);
}

#[test]
fn test_data_dir_flag_overrides_default() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("custom");
    nexus(home.path())
        .args(["profile", "set", "greeting", "Hello", "--data-dir"])
        .arg(&custom)
        .assert()
        .success();
    let doc = read_json(&custom.join("storage.json"));
    assert_eq!(doc["nexus.profile"]["greeting"], "Hello");
    assert!(!data_dir(home.path()).join("storage.json").exists());
}

// --- widgets ---

#[test]
fn test_widgets_list_defaults() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["widgets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus layout: 3 enabled"))
        .stdout(predicate::str::contains("[x] clock"))
        .stdout(predicate::str::contains("[ ] weather"));
}

#[test]
fn test_widgets_toggle_round_trip() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["widgets", "toggle", "weather"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weather enabled in the Focus layout"));
    nexus(home.path())
        .args(["widgets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] weather"))
        .stdout(predicate::str::contains("Focus layout: 4 enabled"));

    let doc = read_json(&data_dir(home.path()).join("storage.json"));
    let layouts = &doc["nexus.layouts"];
    assert_eq!(
        layouts["focus"]["widgets"],
        serde_json::json!(["clock", "search", "quicklinks", "weather"])
    );
    assert!(layouts["dashboard"]["widgets"].is_array());
    assert!(layouts["workflow"]["widgets"].is_array());

    nexus(home.path())
        .args(["widgets", "toggle", "weather"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weather disabled in the Focus layout"));
}

#[test]
fn test_widgets_toggle_other_layout() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["widgets", "toggle", "tasks", "--layout", "workflow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks disabled in the Workflow layout"));
    nexus(home.path())
        .args(["widgets", "list", "--layout", "workflow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow layout: 3 enabled"));
}

#[test]
fn test_widgets_toggle_refuses_undecodable_layouts() {
    let home = TempDir::new().unwrap();
    let dir = data_dir(home.path());
    fs::create_dir_all(&dir).unwrap();
    let original = r#"{"nexus.layouts":{"focus":{"widgets":["calendar"]}}}"#;
    fs::write(dir.join("storage.json"), original).unwrap();

    nexus(home.path())
        .args(["widgets", "toggle", "notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("layouts could not be loaded"));
    assert_eq!(fs::read_to_string(dir.join("storage.json")).unwrap(), original);
}

// --- key & search ---

#[test]
fn test_key_set_and_clear() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["key", "set", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access key saved"));
    let doc = read_json(&data_dir(home.path()).join("local.json"));
    assert_eq!(doc["nexus.unsplashKey"], "abc123");

    nexus(home.path())
        .args(["key", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access key removed"));
    let doc = read_json(&data_dir(home.path()).join("local.json"));
    assert!(doc.get("nexus.unsplashKey").is_none());
}

#[test]
fn test_search_without_key_fails_with_hint() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .args(["search", "misty", "forest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Add an Unsplash Access Key below to search.",
        ));
}

#[test]
fn test_no_subcommand_prints_usage() {
    let home = TempDir::new().unwrap();
    nexus(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
