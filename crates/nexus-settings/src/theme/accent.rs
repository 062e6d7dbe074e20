//! Accent color presets and hex parsing.

use ratatui::style::Color;
use std::str::FromStr;

/// A named accent color offered as a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPreset {
    pub name: &'static str,
    pub color: &'static str,
}

/// Swatches in display order.
pub const ACCENT_PRESETS: [AccentPreset; 8] = [
    AccentPreset { name: "Blue", color: "#3B82F6" },
    AccentPreset { name: "Violet", color: "#8B5CF6" },
    AccentPreset { name: "Pink", color: "#EC4899" },
    AccentPreset { name: "Emerald", color: "#10B981" },
    AccentPreset { name: "Amber", color: "#F59E0B" },
    AccentPreset { name: "Red", color: "#EF4444" },
    AccentPreset { name: "Cyan", color: "#06B6D4" },
    AccentPreset { name: "Orange", color: "#F97316" },
];

/// Parses `#RRGGBB` or `#RGB` into an RGB triple.
///
/// Returns `None` for anything else. Accent colors are stored unvalidated,
/// so renderers fall back to a default when this fails.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => match Color::from_str(value) {
            Ok(Color::Rgb(r, g, b)) => Some((r, g, b)),
            _ => None,
        },
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
