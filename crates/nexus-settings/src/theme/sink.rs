//! [`ThemeSink`] implementations.

use super::{ResolvedTheme, ThemeSink};
use crate::profile::DEFAULT_ACCENT_COLOR;
use std::sync::{Arc, Mutex};

/// Discards every effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopThemeSink;

impl ThemeSink for NoopThemeSink {
    fn set_accent_color(&mut self, _color: &str) {}

    fn set_theme(&mut self, _theme: ResolvedTheme) {}
}

/// One effect received by a [`RecordingThemeSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    Accent(String),
    Theme(ResolvedTheme),
}

/// Records effects in order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingThemeSink {
    events: Arc<Mutex<Vec<ThemeEvent>>>,
}

impl RecordingThemeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every effect received so far.
    pub fn events(&self) -> Vec<ThemeEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn push(&self, event: ThemeEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

impl ThemeSink for RecordingThemeSink {
    fn set_accent_color(&mut self, color: &str) {
        self.push(ThemeEvent::Accent(color.to_string()));
    }

    fn set_theme(&mut self, theme: ResolvedTheme) {
        self.push(ThemeEvent::Theme(theme));
    }
}

/// The theme currently in effect on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTheme {
    pub accent_color: String,
    pub theme: ResolvedTheme,
}

impl Default for AppliedTheme {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            theme: ResolvedTheme::Dark,
        }
    }
}

/// Keeps the applied theme in shared state for the TUI to paint from.
#[derive(Debug, Clone, Default)]
pub struct SharedThemeSink {
    applied: Arc<Mutex<AppliedTheme>>,
}

impl SharedThemeSink {
    /// Creates a sink starting from `initial`.
    pub fn new(initial: AppliedTheme) -> Self {
        Self {
            applied: Arc::new(Mutex::new(initial)),
        }
    }

    /// Current applied theme.
    pub fn snapshot(&self) -> AppliedTheme {
        self.applied
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ThemeSink for SharedThemeSink {
    fn set_accent_color(&mut self, color: &str) {
        let mut applied = self.applied.lock().unwrap_or_else(|e| e.into_inner());
        applied.accent_color = color.to_string();
    }

    fn set_theme(&mut self, theme: ResolvedTheme) {
        let mut applied = self.applied.lock().unwrap_or_else(|e| e.into_inner());
        applied.theme = theme;
    }
}
