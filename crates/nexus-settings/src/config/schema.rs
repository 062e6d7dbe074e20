//! TOML configuration schema types for the Nexus settings panel.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial file (or none at all) is valid.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`) parsed by
//! the `humantime` crate in [`Config::validate`] and at the call site.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::xdg;
use crate::layout::LayoutType;
use crate::theme::ColorScheme;
use unsplash_search::{Orientation, SearchParams, DEFAULT_API_URL, DEFAULT_PER_PAGE};

/// Largest page size the Unsplash search endpoint accepts.
pub const MAX_PER_PAGE: u8 = 30;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [tui]
/// [unsplash]
/// [appearance]
/// [storage]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terminal panel behavior.
    pub tui: TuiConfig,
    /// Photo search endpoint and parameters.
    pub unsplash: UnsplashConfig,
    /// How the `system` theme is resolved.
    pub appearance: AppearanceConfig,
    /// Data directory and logging.
    pub storage: StorageConfig,
}

impl Config {
    /// Checks values that TOML typing alone cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tick_rate()?;
        if self.unsplash.per_page == 0 || self.unsplash.per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidValue {
                field: "unsplash.per_page".to_string(),
                message: format!("must be between 1 and {MAX_PER_PAGE}"),
            });
        }
        let url = self.unsplash.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "unsplash.api_url".to_string(),
                message: format!("expected an http(s) URL, got {:?}", self.unsplash.api_url),
            });
        }
        Ok(())
    }

    /// Parsed `tui.tick_rate`.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        let rate = humantime::parse_duration(&self.tui.tick_rate).map_err(|e| {
            ConfigError::InvalidValue {
                field: "tui.tick_rate".to_string(),
                message: e.to_string(),
            }
        })?;
        if rate.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "tui.tick_rate".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(rate)
    }

    /// Fixed search parameters for the photo client.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            per_page: self.unsplash.per_page,
            orientation: self.unsplash.orientation,
        }
    }

    /// Directory holding the settings documents.
    ///
    /// An empty `storage.data_dir` means the platform data directory.
    pub fn data_dir(&self) -> PathBuf {
        if self.storage.data_dir.trim().is_empty() {
            xdg::data_dir()
        } else {
            xdg::expand_tilde(self.storage.data_dir.trim())
        }
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// Terminal panel configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Layout the Widgets tab edits when `--layout` is not given.
    pub layout: LayoutType,
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            layout: LayoutType::Focus,
            tick_rate: "250ms".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Unsplash
// ---------------------------------------------------------------------------

/// Photo search configuration. The access key is not stored here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UnsplashConfig {
    /// API base URL.
    pub api_url: String,
    /// Results per search.
    pub per_page: u8,
    /// Orientation filter.
    pub orientation: Orientation,
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            orientation: Orientation::Landscape,
        }
    }
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppearanceConfig {
    /// What the `system` theme resolves against.
    pub color_scheme: ColorScheme,
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Where documents live and how much gets logged.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory. Empty means the platform data directory.
    pub data_dir: String,
    /// Default log level when `NEXUS_LOG` is unset.
    pub log_level: LogLevel,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            log_level: LogLevel::Info,
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
