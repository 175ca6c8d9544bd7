//! Main UI input handler.

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::tui::AppState;

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    if let Some(action) = state.shortcuts.lookup(key) {
        super::dispatch_action(state, action, now)
    } else {
        // No action mapped - ignore key
        false
    }
}
