//! TUI module for the Nexus settings panel.
//!
//! Provides a terminal user interface built on ratatui and crossterm that
//! drives a [`SettingsPanel`](crate::panel::SettingsPanel) and paints itself
//! with the accent color and theme the panel applies.

pub mod app;
pub mod event;
pub mod ui;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;
