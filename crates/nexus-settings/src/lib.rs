//! Nexus settings library
//!
//! This crate provides the settings panel of the Nexus new-tab dashboard:
//! profile editing (name, greeting, theme, accent color, background image),
//! per-layout widget visibility, and background photo search through
//! Unsplash.
//!
//! The behavior lives in the headless [`panel::SettingsPanel`] view-model.
//! The terminal front end in [`tui`] and the `nexus` CLI both drive it.
//!
//! # Persistence
//!
//! Documents are stored through [`nexus_storage::KeyValueStore`]; the panel
//! persists the whole profile or layout map after every change. There is no
//! explicit save step.

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Layout identifiers, labels, and per-layout widget sets.
pub mod layout;

/// Logging initialization.
pub mod logging;

/// Settings panel view-model.
pub mod panel;

/// Background photo candidates and the curated fallback set.
pub mod photos;

/// The user profile document.
pub mod profile;

/// Typed access to the persisted documents.
pub mod store;

/// Theme capabilities: resolution, sinks, and color-scheme probes.
pub mod theme;

/// TUI module providing the terminal settings panel.
pub mod tui;

/// Widget catalog shown on the Widgets tab.
pub mod widgets;

pub use layout::{LayoutConfig, LayoutType, Layouts};
pub use profile::{Profile, ProfileField, ThemeMode};
pub use widgets::WidgetId;

/// Short product name shown in the panel header and footer.
pub const APP_SHORT_NAME: &str = "Nexus";

/// Source repository linked from the panel footer.
pub const REPO_URL: &str = "https://github.com/encoreshao/nexus-tab";

/// Where users obtain an Unsplash access key.
pub const UNSPLASH_DEVELOPERS_URL: &str = "https://unsplash.com/developers";
