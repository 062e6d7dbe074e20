//! Color-scheme probes used to resolve the `system` theme.

use super::ColorSchemeProbe;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The `[appearance] color_scheme` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Inspect the terminal (`COLORFGBG`).
    #[default]
    Auto,
    Dark,
    Light,
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorScheme::Auto => "auto",
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorScheme::Auto),
            "dark" => Ok(ColorScheme::Dark),
            "light" => Ok(ColorScheme::Light),
            _ => Err(format!(
                "invalid color scheme: {} (expected auto, dark, or light)",
                s
            )),
        }
    }
}

impl ColorScheme {
    /// Builds the probe this setting describes.
    pub fn probe(self) -> Box<dyn ColorSchemeProbe> {
        match self {
            ColorScheme::Auto => Box::new(EnvColorScheme),
            ColorScheme::Dark => Box::new(FixedColorScheme::dark()),
            ColorScheme::Light => Box::new(FixedColorScheme::light()),
        }
    }
}

/// A probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme {
    dark: bool,
}

impl FixedColorScheme {
    pub fn dark() -> Self {
        Self { dark: true }
    }

    pub fn light() -> Self {
        Self { dark: false }
    }
}

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// Reads the terminal background from `COLORFGBG` on every call.
///
/// An unset or unreadable variable means no dark preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| parse_colorfgbg(&v))
            .unwrap_or(false)
    }
}

/// Interprets a `COLORFGBG` value (`"15;0"`, `"0;default;15"`).
///
/// The last field is the background palette index. Indices 0-6 and 8 are
/// dark colors in the standard 16-color palette.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg <= 6 || bg == 8)
}
