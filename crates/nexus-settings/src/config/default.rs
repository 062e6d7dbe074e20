//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and a function to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Nexus Settings Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/nexus-settings/config.toml
# Reference: https://github.com/encoreshao/nexus-tab

# ==============================================================================
# TUI Configuration
# ==============================================================================

[tui]

# Layout edited on the Widgets tab when --layout is not given.
# Options: "focus", "dashboard", "workflow"
#   focus     - Minimal: clock, search, essentials
#   dashboard - Full bento grid: everything visible
#   workflow  - Split view: tasks + side stack
layout = "focus"

# Render tick rate as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# ==============================================================================
# Photo Search
# ==============================================================================

[unsplash]

# Base URL of the Unsplash API.
api_url = "https://api.unsplash.com"

# Photos returned per search (1-30).
per_page = 10

# Orientation filter.
# Options: "landscape", "portrait", "squarish"
orientation = "landscape"

# The access key is stored with your data, not here:
#   nexus key set <ACCESS_KEY>

# ==============================================================================
# Appearance
# ==============================================================================

[appearance]

# What the "system" theme follows.
# Options: "auto", "dark", "light"
#   auto  - read the terminal background from $COLORFGBG
#   dark  - always resolve "system" to dark
#   light - always resolve "system" to light
color_scheme = "auto"

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# Directory holding storage.json and local.json.
# Empty string means $XDG_DATA_HOME/nexus-settings.
# Tilde (~) is expanded to the user's home directory.
data_dir = ""

# Logging verbosity when NEXUS_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
log_level = "info"
"#;

// ---------------------------------------------------------------------------
// File creation
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path: path.clone() });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
