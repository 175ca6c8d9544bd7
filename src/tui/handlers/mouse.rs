//! Mouse input: buttons, delete affordances and drag-to-reorder.
//!
//! A drag starts with a left press on a task row and ends with the release.
//! The release row picks the new position; releasing outside the list
//! cancels the move.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::{AppState, DragSource, HitTarget};

/// Handle a mouse event against the last drawn layout
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    if let Some(help) = state.help_overlay.as_mut() {
        match mouse.kind {
            MouseEventKind::ScrollUp => help.scroll_up(),
            MouseEventKind::ScrollDown => help.scroll_down(),
            MouseEventKind::Down(_) => state.close_help(),
            _ => {}
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_press(state, mouse, now),
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(target) = row_under(state, mouse) {
                if is_mouse_drag(state) {
                    state.set_drag_target(target);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if !is_mouse_drag(state) {
                return;
            }
            if let Some(target) = row_under(state, mouse) {
                state.set_drag_target(target);
                state.finish_drag();
            } else {
                state.cancel_drag();
            }
        }
        MouseEventKind::ScrollUp => state.select_previous_task(),
        MouseEventKind::ScrollDown => state.select_next_task(),
        _ => {}
    }
}

fn handle_press(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    state.status_message.clear();

    let layout = state.layout();
    let hit = layout.hit_test(
        mouse.column,
        mouse.row,
        state.tasks.len(),
        state.task_list_offset(),
    );

    if state.input.is_focused() && hit != Some(HitTarget::Input) {
        state.input.blur();
    }

    match hit {
        Some(HitTarget::ThemeToggle) => state.toggle_display_mode(),
        Some(HitTarget::StartPause) => state.toggle_timer(now),
        Some(HitTarget::Reset) => state.reset_timer(now),
        Some(HitTarget::Input) => {
            state.cancel_drag();
            state.input.focus();
        }
        Some(HitTarget::DeleteTask(index)) => state.delete_task(index),
        Some(HitTarget::TaskRow(index)) => state.begin_drag(index, DragSource::Mouse),
        None => {}
    }
}

fn is_mouse_drag(state: &AppState) -> bool {
    state
        .drag
        .is_some_and(|drag| drag.source == DragSource::Mouse)
}

fn row_under(state: &AppState, mouse: MouseEvent) -> Option<usize> {
    state
        .layout()
        .task_index_at_row(mouse.row, state.tasks.len(), state.task_list_offset())
}
