//! Input handler modules for different TUI contexts.
//!
//! Keys go to the help overlay first, then to the focused task input, and
//! finally through the shortcut registry to [`dispatch_action`].

pub mod actions;
pub mod main;
pub mod mouse;
pub mod popups;

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::tui::AppState;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use mouse::handle_mouse_event;
pub use popups::{handle_help_input, handle_task_input};

/// Routes a key press to the active context. Returns true when the app should quit.
///
/// The previous status message is cleared first, so it lasts until the next
/// key press and the contextual hints come back.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    state.status_message.clear();

    if state.help_overlay.is_some() {
        handle_help_input(state, key);
        false
    } else if state.input.is_focused() {
        handle_task_input(state, key);
        false
    } else {
        handle_main_input(state, key, now)
    }
}
