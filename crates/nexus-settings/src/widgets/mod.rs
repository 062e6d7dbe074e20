//! Widget catalog for the Widgets tab.
//!
//! Each [`WidgetId`] names a widget of the new-tab page. The panel never
//! renders widgets itself; it only decides which ids belong to a layout.
//! The catalog groups ids the way the Widgets tab lists them:
//!
//! - **Core**: clock, search, tasks, quick links
//! - **Productivity**: bookmarks, notes, pomodoro, RSS
//! - **Integrations**: weather, GitLab, GitHub, embed, shortcuts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a new-tab widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetId {
    Clock,
    Search,
    Tasks,
    Quicklinks,
    Bookmarks,
    Notes,
    Pomodoro,
    Rss,
    Weather,
    Gitlab,
    Github,
    Embed,
    Shortcuts,
}

impl WidgetId {
    /// Every widget, in catalog order.
    pub const ALL: [WidgetId; 13] = [
        WidgetId::Clock,
        WidgetId::Search,
        WidgetId::Tasks,
        WidgetId::Quicklinks,
        WidgetId::Bookmarks,
        WidgetId::Notes,
        WidgetId::Pomodoro,
        WidgetId::Rss,
        WidgetId::Weather,
        WidgetId::Gitlab,
        WidgetId::Github,
        WidgetId::Embed,
        WidgetId::Shortcuts,
    ];

    /// The stored identifier (`"quicklinks"`, `"rss"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetId::Clock => "clock",
            WidgetId::Search => "search",
            WidgetId::Tasks => "tasks",
            WidgetId::Quicklinks => "quicklinks",
            WidgetId::Bookmarks => "bookmarks",
            WidgetId::Notes => "notes",
            WidgetId::Pomodoro => "pomodoro",
            WidgetId::Rss => "rss",
            WidgetId::Weather => "weather",
            WidgetId::Gitlab => "gitlab",
            WidgetId::Github => "github",
            WidgetId::Embed => "embed",
            WidgetId::Shortcuts => "shortcuts",
        }
    }

    /// Catalog entry for this widget.
    pub fn info(self) -> &'static WidgetInfo {
        CATALOG
            .iter()
            .flat_map(|group| group.items.iter())
            .find(|info| info.id == self)
            .unwrap_or(&FALLBACK_INFO)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing [`WidgetId`] from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWidgetIdError(pub String);

impl fmt::Display for ParseWidgetIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown widget: {}", self.0)
    }
}

impl std::error::Error for ParseWidgetIdError {}

impl FromStr for WidgetId {
    type Err = ParseWidgetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        WidgetId::ALL
            .into_iter()
            .find(|id| id.as_str() == lower)
            .ok_or_else(|| ParseWidgetIdError(s.to_string()))
    }
}

/// Display metadata for one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetInfo {
    pub id: WidgetId,
    pub name: &'static str,
    pub description: &'static str,
}

/// A labelled group of widgets on the Widgets tab.
#[derive(Debug, Clone, Copy)]
pub struct WidgetGroup {
    pub label: &'static str,
    pub items: &'static [WidgetInfo],
}

// Never returned for a catalogued id; keeps `info` total.
const FALLBACK_INFO: WidgetInfo = WidgetInfo {
    id: WidgetId::Clock,
    name: "Unknown",
    description: "",
};

/// The Widgets tab catalog, in display order.
pub const CATALOG: &[WidgetGroup] = &[
    WidgetGroup {
        label: "Core",
        items: &[
            WidgetInfo {
                id: WidgetId::Clock,
                name: "Clock & Greeting",
                description: "Time, date, personalized message",
            },
            WidgetInfo {
                id: WidgetId::Search,
                name: "Search Bar",
                description: "Web search and URL navigation",
            },
            WidgetInfo {
                id: WidgetId::Tasks,
                name: "Tasks",
                description: "Task manager with list & board views",
            },
            WidgetInfo {
                id: WidgetId::Quicklinks,
                name: "Quick Links",
                description: "Favorite links with favicons",
            },
        ],
    },
    WidgetGroup {
        label: "Productivity",
        items: &[
            WidgetInfo {
                id: WidgetId::Bookmarks,
                name: "Bookmarks",
                description: "Browse Chrome bookmarks",
            },
            WidgetInfo {
                id: WidgetId::Notes,
                name: "Notes",
                description: "Quick scratchpad",
            },
            WidgetInfo {
                id: WidgetId::Pomodoro,
                name: "Pomodoro Timer",
                description: "Focus timer with work/break",
            },
            WidgetInfo {
                id: WidgetId::Rss,
                name: "RSS Feeds",
                description: "Auto-refresh article reader",
            },
        ],
    },
    WidgetGroup {
        label: "Integrations",
        items: &[
            WidgetInfo {
                id: WidgetId::Weather,
                name: "Weather",
                description: "Current weather via OpenWeather",
            },
            WidgetInfo {
                id: WidgetId::Gitlab,
                name: "GitLab Activity",
                description: "Issues, events, projects",
            },
            WidgetInfo {
                id: WidgetId::Github,
                name: "GitHub Activity",
                description: "PRs, issues, contributions",
            },
            WidgetInfo {
                id: WidgetId::Embed,
                name: "Custom Embed",
                description: "Embed any URL in an iframe",
            },
            WidgetInfo {
                id: WidgetId::Shortcuts,
                name: "Shortcuts",
                description: "Keyboard launcher",
            },
        ],
    },
];

/// Catalog entries flattened in display order.
pub fn catalog_entries() -> impl Iterator<Item = &'static WidgetInfo> {
    CATALOG.iter().flat_map(|group| group.items.iter())
}
