//! Layout identifiers, their labels, and the built-in widget presets.
//!
//! Presets are only used when storage has no layouts document yet:
//! - **focus**: clock, search, quick links
//! - **dashboard**: clock, search, tasks, quick links, bookmarks, notes, weather
//! - **workflow**: clock, tasks, notes, pomodoro

use crate::widgets::WidgetId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Identifier of a new-tab layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Focus,
    Dashboard,
    Workflow,
}

impl LayoutType {
    /// All layouts in display order.
    pub const ALL: [LayoutType; 3] = [
        LayoutType::Focus,
        LayoutType::Dashboard,
        LayoutType::Workflow,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            LayoutType::Focus => "Focus",
            LayoutType::Dashboard => "Dashboard",
            LayoutType::Workflow => "Workflow",
        }
    }

    /// One-line description shown under the Widgets heading.
    pub fn description(self) -> &'static str {
        match self {
            LayoutType::Focus => "Minimal: clock, search, essentials",
            LayoutType::Dashboard => "Full bento grid: everything visible",
            LayoutType::Workflow => "Split view: tasks + side stack",
        }
    }

    /// Widgets enabled in a fresh install.
    pub fn default_widgets(self) -> Vec<WidgetId> {
        match self {
            LayoutType::Focus => vec![WidgetId::Clock, WidgetId::Search, WidgetId::Quicklinks],
            LayoutType::Dashboard => vec![
                WidgetId::Clock,
                WidgetId::Search,
                WidgetId::Tasks,
                WidgetId::Quicklinks,
                WidgetId::Bookmarks,
                WidgetId::Notes,
                WidgetId::Weather,
            ],
            LayoutType::Workflow => vec![
                WidgetId::Clock,
                WidgetId::Tasks,
                WidgetId::Notes,
                WidgetId::Pomodoro,
            ],
        }
    }

    /// The next layout, wrapping around.
    pub fn next(self) -> LayoutType {
        match self {
            LayoutType::Focus => LayoutType::Dashboard,
            LayoutType::Dashboard => LayoutType::Workflow,
            LayoutType::Workflow => LayoutType::Focus,
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayoutType::Focus => "focus",
            LayoutType::Dashboard => "dashboard",
            LayoutType::Workflow => "workflow",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing [`LayoutType`] from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutTypeError(pub String);

impl fmt::Display for ParseLayoutTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid layout: {} (expected focus, dashboard, or workflow)",
            self.0
        )
    }
}

impl std::error::Error for ParseLayoutTypeError {}

impl FromStr for LayoutType {
    type Err = ParseLayoutTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "focus" => Ok(LayoutType::Focus),
            "dashboard" => Ok(LayoutType::Dashboard),
            "workflow" => Ok(LayoutType::Workflow),
            _ => Err(ParseLayoutTypeError(s.to_string())),
        }
    }
}

/// Configuration of one layout.
///
/// Only `widgets` is interpreted here. Any other keys the new-tab page keeps
/// on a layout (column widths, ordering hints) are carried through `extra`
/// so a toggle never drops them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub widgets: Vec<WidgetId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutConfig {
    /// Creates a config enabling exactly `widgets`.
    pub fn new(widgets: Vec<WidgetId>) -> Self {
        Self {
            widgets,
            extra: Map::new(),
        }
    }

    /// Returns true if `widget` is enabled.
    pub fn contains(&self, widget: WidgetId) -> bool {
        self.widgets.contains(&widget)
    }

    /// Adds `widget` at the end if absent, removes every occurrence if present.
    ///
    /// Returns whether the widget is enabled afterwards.
    pub fn toggle(&mut self, widget: WidgetId) -> bool {
        if self.contains(widget) {
            self.widgets.retain(|w| *w != widget);
            false
        } else {
            self.widgets.push(widget);
            true
        }
    }
}

/// The per-layout widget map stored under `nexus.layouts`.
///
/// A layout missing from a stored document falls back to its preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layouts {
    pub focus: LayoutConfig,
    pub dashboard: LayoutConfig,
    pub workflow: LayoutConfig,
}

impl Default for Layouts {
    fn default() -> Self {
        Self {
            focus: LayoutConfig::new(LayoutType::Focus.default_widgets()),
            dashboard: LayoutConfig::new(LayoutType::Dashboard.default_widgets()),
            workflow: LayoutConfig::new(LayoutType::Workflow.default_widgets()),
        }
    }
}

impl Layouts {
    /// Returns the config of `layout`.
    pub fn get(&self, layout: LayoutType) -> &LayoutConfig {
        match layout {
            LayoutType::Focus => &self.focus,
            LayoutType::Dashboard => &self.dashboard,
            LayoutType::Workflow => &self.workflow,
        }
    }

    /// Returns the config of `layout` mutably.
    pub fn get_mut(&mut self, layout: LayoutType) -> &mut LayoutConfig {
        match layout {
            LayoutType::Focus => &mut self.focus,
            LayoutType::Dashboard => &mut self.dashboard,
            LayoutType::Workflow => &mut self.workflow,
        }
    }

    /// Toggles `widget` in `layout`. Other layouts are untouched.
    pub fn toggle(&mut self, layout: LayoutType, widget: WidgetId) -> bool {
        self.get_mut(layout).toggle(widget)
    }
}
