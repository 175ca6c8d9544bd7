//! Action dispatch for the main screen.

use std::time::Instant;

use crate::shortcuts::Action;
use crate::tui::{AppState, DragSource};

/// Dispatch an action to the appropriate handler. Returns true on quit.
pub fn dispatch_action(state: &mut AppState, action: Action, now: Instant) -> bool {
    tracing::trace!(?action, "dispatch");

    match action {
        // === TIMER ===
        Action::ToggleTimer => state.toggle_timer(now),
        Action::StartTimer => state.start_timer(now),
        Action::PauseTimer => state.pause_timer(now),
        Action::ResetTimer => state.reset_timer(now),

        // === TASKS ===
        Action::SelectPrevious => {
            if state.drag.is_some() {
                state.step_drag_target(-1);
            } else {
                state.select_previous_task();
            }
        }
        Action::SelectNext => {
            if state.drag.is_some() {
                state.step_drag_target(1);
            } else {
                state.select_next_task();
            }
        }
        Action::MoveTaskUp => state.move_selected_task(-1),
        Action::MoveTaskDown => state.move_selected_task(1),
        Action::GrabTask => handle_grab(state),
        Action::DeleteTask => state.delete_selected_task(),
        Action::FocusInput => {
            state.cancel_drag();
            state.input.focus();
            state.set_status("Type a task and press Enter");
        }

        // === DISPLAY ===
        Action::ToggleDisplayMode => state.toggle_display_mode(),

        // === HELP ===
        Action::ToggleHelp => {
            if state.help_overlay.is_some() {
                state.close_help();
            } else {
                state.open_help();
            }
        }

        // === GENERAL ===
        Action::Cancel => {
            if state.drag.is_some() {
                state.cancel_drag();
            } else {
                state.set_status("");
            }
        }
        Action::Quit => {
            state.should_quit = true;
            return true;
        }
    }

    false
}

fn handle_grab(state: &mut AppState) {
    if state.drag.is_some() {
        state.finish_drag();
    } else if let Some(index) = state.selected_task {
        state.begin_drag(index, DragSource::Keyboard);
    } else {
        state.set_status("No task selected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ThemeMode};

    fn state_with_tasks(items: &[&str]) -> AppState {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Light;
        let mut state = AppState::new(config);
        for item in items {
            state.add_task(*item);
        }
        state
    }

    #[test]
    fn test_quit() {
        let mut state = state_with_tasks(&[]);
        assert!(dispatch_action(&mut state, Action::Quit, Instant::now()));
        assert!(state.should_quit);
    }

    #[test]
    fn test_navigation_moves_drop_target_while_grabbed() {
        let now = Instant::now();
        let mut state = state_with_tasks(&["a", "b", "c"]);
        state.selected_task = Some(0);

        dispatch_action(&mut state, Action::GrabTask, now);
        dispatch_action(&mut state, Action::SelectNext, now);
        assert_eq!(state.selected_task, Some(0));
        assert_eq!(state.drag.map(|d| d.target), Some(1));

        dispatch_action(&mut state, Action::GrabTask, now);
        assert_eq!(state.tasks.as_slice(), ["b", "a", "c"]);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_cancel_drops_nothing() {
        let now = Instant::now();
        let mut state = state_with_tasks(&["a", "b"]);
        state.selected_task = Some(0);
        dispatch_action(&mut state, Action::GrabTask, now);
        dispatch_action(&mut state, Action::SelectNext, now);
        dispatch_action(&mut state, Action::Cancel, now);
        assert_eq!(state.tasks.as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_focus_input() {
        let mut state = state_with_tasks(&[]);
        dispatch_action(&mut state, Action::FocusInput, Instant::now());
        assert!(state.input.is_focused());
    }

    #[test]
    fn test_toggle_help() {
        let now = Instant::now();
        let mut state = state_with_tasks(&[]);
        dispatch_action(&mut state, Action::ToggleHelp, now);
        assert!(state.help_overlay.is_some());
        dispatch_action(&mut state, Action::ToggleHelp, now);
        assert!(state.help_overlay.is_none());
    }
}
