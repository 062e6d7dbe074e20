//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.

use crate::panel::SettingsTab;
use crate::tui::app::{App, Field};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            return Ok(Event::Key(key))
                        }
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore key releases, mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Close the panel and quit.
    Quit,
    /// Run a photo search for the current query.
    Search,
}

/// Handles a key event by dispatching to the appropriate app method or action.
///
/// While a text field is being edited, printable keys go into the field and
/// only Enter, Esc, and Backspace are special. Otherwise keys navigate the
/// active tab.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: Ctrl-C always quits, even mid-edit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.editing {
        return handle_edit_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Tab => {
            app.panel.next_tab();
            return Action::None;
        }
        KeyCode::BackTab => {
            app.panel.prev_tab();
            return Action::None;
        }
        KeyCode::Char(c @ '1'..='3') => {
            app.panel.set_tab(SettingsTab::ALL[(c as u8 - b'1') as usize]);
            return Action::None;
        }
        KeyCode::Char('L') => {
            app.cycle_layout();
            return Action::None;
        }
        _ => {}
    }

    match app.panel.tab() {
        SettingsTab::General => handle_general_key(app, key),
        SettingsTab::Widgets => handle_widgets_key(app, key),
        SettingsTab::Ai => Action::None,
    }
}

/// Handles keys while a text field is being edited.
fn handle_edit_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => {
            let run_search = app.focus == Field::Search;
            app.finish_edit();
            if run_search {
                Action::Search
            } else {
                Action::None
            }
        }
        KeyCode::Esc => {
            app.finish_edit();
            Action::None
        }
        KeyCode::Backspace => {
            app.backspace();
            Action::None
        }
        KeyCode::Char(c) => {
            app.input_char(c);
            Action::None
        }
        _ => Action::None,
    }
}

/// Handles keys on the General tab.
fn handle_general_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => app.focus_prev(),
        KeyCode::Char('h') | KeyCode::Left => app.move_horizontal(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_horizontal(1),
        KeyCode::Char('/') => {
            app.set_focus(Field::Search);
            app.begin_edit();
        }
        KeyCode::Char('x') | KeyCode::Delete if app.focus == Field::BackgroundUrl => {
            app.panel.clear_background();
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        _ => {}
    }
    Action::None
}

/// Handles keys on the Widgets tab.
fn handle_widgets_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_widget_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_widget_cursor(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_widget(),
        _ => {}
    }
    Action::None
}
