//! Theme capabilities.
//!
//! Editing the accent color or theme has a visible effect outside the panel.
//! The panel does not know what that effect is; it calls an injected
//! [`ThemeSink`]. Resolving the `system` theme asks an injected
//! [`ColorSchemeProbe`] at the moment of the change.
//!
//! | Type | Use |
//! |---|---|
//! | [`NoopThemeSink`] | CLI commands, where nothing is on screen |
//! | [`RecordingThemeSink`] | tests |
//! | [`SharedThemeSink`] | the TUI palette |

mod accent;
mod probe;
mod sink;

pub use accent::{parse_hex_color, AccentPreset, ACCENT_PRESETS};
pub use probe::{parse_colorfgbg, ColorScheme, EnvColorScheme, FixedColorScheme};
pub use sink::{AppliedTheme, NoopThemeSink, RecordingThemeSink, SharedThemeSink, ThemeEvent};

use crate::profile::ThemeMode;
use std::fmt;

/// A theme with `system` already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedTheme::Light => write!(f, "light"),
            ResolvedTheme::Dark => write!(f, "dark"),
        }
    }
}

/// Receives theme side effects from the settings panel.
pub trait ThemeSink: Send {
    /// Applies a new accent color. The value is passed through unvalidated.
    fn set_accent_color(&mut self, color: &str);

    /// Applies a resolved theme.
    fn set_theme(&mut self, theme: ResolvedTheme);
}

/// Answers whether the environment prefers a dark color scheme.
pub trait ColorSchemeProbe: Send {
    fn prefers_dark(&self) -> bool;
}

/// Resolves a theme preference, consulting `probe` only for `system`.
pub fn resolve(mode: ThemeMode, probe: &dyn ColorSchemeProbe) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if probe.prefers_dark() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}
