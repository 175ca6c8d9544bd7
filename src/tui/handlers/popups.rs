//! Handlers for components that take over the keyboard.

use crossterm::event::KeyEvent;

use crate::tui::help_overlay::HelpOverlayEvent;
use crate::tui::{AppState, Component, TaskInputEvent};

/// Handle input for the help overlay
pub fn handle_help_input(state: &mut AppState, key: KeyEvent) {
    let Some(help) = state.help_overlay.as_mut() else {
        return;
    };

    let closed = help.handle_input(key) == Some(HelpOverlayEvent::Closed);
    if closed || help.should_close() {
        state.close_help();
    }
}

/// Handle input for the focused new-task field
pub fn handle_task_input(state: &mut AppState, key: KeyEvent) {
    match state.input.handle_input(key) {
        Some(TaskInputEvent::Submitted(text)) => state.add_task(text),
        Some(TaskInputEvent::Unfocused) => state.set_status(""),
        None => {}
    }
}
