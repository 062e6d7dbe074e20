//! The user profile document.
//!
//! A [`Profile`] is always a complete record. Edits go through
//! [`Profile::with_field`], which copies the last-known-good record and
//! replaces exactly one field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accent color used until the user picks one.
pub const DEFAULT_ACCENT_COLOR: &str = "#3B82F6";

/// Longest accent color accepted from free-text entry (`#RRGGBB`).
pub const ACCENT_COLOR_MAX_LEN: usize = 7;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the platform color-scheme preference.
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in display order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Label shown on the theme selector.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing [`ThemeMode`] from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeModeError(pub String);

impl fmt::Display for ParseThemeModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid theme: {} (expected light, dark, or system)", self.0)
    }
}

impl std::error::Error for ParseThemeModeError {}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(ParseThemeModeError(s.to_string())),
        }
    }
}

/// The user's personalization record.
///
/// Field names serialize in camelCase to match the document the browser
/// extension writes. Missing fields, and fields whose value cannot be
/// decoded, take their defaults; the readable fields of a partly damaged
/// record are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Display name used in the greeting.
    #[serde(deserialize_with = "or_default")]
    pub username: String,
    /// Custom greeting line.
    #[serde(deserialize_with = "or_default")]
    pub greeting: String,
    /// Background image URL. Empty means no background.
    #[serde(deserialize_with = "or_default")]
    pub background_url: String,
    /// Accent color as a hex string.
    #[serde(deserialize_with = "accent_or_default")]
    pub accent_color: String,
    /// Theme preference.
    #[serde(deserialize_with = "or_default")]
    pub theme: ThemeMode,
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn accent_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(String::deserialize(value).unwrap_or_else(|_| DEFAULT_ACCENT_COLOR.to_string()))
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: String::new(),
            greeting: String::new(),
            background_url: String::new(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            theme: ThemeMode::System,
        }
    }
}

/// Editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// `username`
    Username,
    /// `greeting`
    Greeting,
    /// `backgroundUrl`
    BackgroundUrl,
    /// `accentColor`
    AccentColor,
    /// `theme`
    Theme,
}

impl ProfileField {
    /// All fields in document order.
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Username,
        ProfileField::Greeting,
        ProfileField::BackgroundUrl,
        ProfileField::AccentColor,
        ProfileField::Theme,
    ];

    /// Key of this field in the stored document.
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Username => "username",
            ProfileField::Greeting => "greeting",
            ProfileField::BackgroundUrl => "backgroundUrl",
            ProfileField::AccentColor => "accentColor",
            ProfileField::Theme => "theme",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error type for parsing [`ProfileField`] from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProfileFieldError(pub String);

impl fmt::Display for ParseProfileFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid profile field: {}", self.0)
    }
}

impl std::error::Error for ParseProfileFieldError {}

impl FromStr for ProfileField {
    type Err = ParseProfileFieldError;

    /// Accepts document keys (`backgroundUrl`) and kebab/snake spellings
    /// (`background-url`, `background_url`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "username" | "name" => Ok(ProfileField::Username),
            "greeting" => Ok(ProfileField::Greeting),
            "backgroundurl" | "background" => Ok(ProfileField::BackgroundUrl),
            "accentcolor" | "accent" => Ok(ProfileField::AccentColor),
            "theme" => Ok(ProfileField::Theme),
            _ => Err(ParseProfileFieldError(s.to_string())),
        }
    }
}

impl Profile {
    /// Returns a copy of this profile with `field` replaced by `value`.
    ///
    /// Every other field is carried over unchanged. Free-text fields are not
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns [`ParseThemeModeError`] when `field` is [`ProfileField::Theme`]
    /// and `value` is not a known theme.
    pub fn with_field(
        &self,
        field: ProfileField,
        value: &str,
    ) -> Result<Profile, ParseThemeModeError> {
        let mut updated = self.clone();
        match field {
            ProfileField::Username => updated.username = value.to_string(),
            ProfileField::Greeting => updated.greeting = value.to_string(),
            ProfileField::BackgroundUrl => updated.background_url = value.to_string(),
            ProfileField::AccentColor => updated.accent_color = value.to_string(),
            ProfileField::Theme => updated.theme = value.parse()?,
        }
        Ok(updated)
    }

    /// Reads a field as it would appear in the stored document.
    pub fn field(&self, field: ProfileField) -> String {
        match field {
            ProfileField::Username => self.username.clone(),
            ProfileField::Greeting => self.greeting.clone(),
            ProfileField::BackgroundUrl => self.background_url.clone(),
            ProfileField::AccentColor => self.accent_color.clone(),
            ProfileField::Theme => self.theme.to_string(),
        }
    }
}

/// Truncates free-text accent color input to [`ACCENT_COLOR_MAX_LEN`] characters.
pub fn clamp_accent_input(value: &str) -> String {
    value.chars().take(ACCENT_COLOR_MAX_LEN).collect()
}
