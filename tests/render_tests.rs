//! Rendering tests against ratatui's in-memory backend.

use pomodoro_tui::config::{Config, ThemeMode};
use pomodoro_tui::tui::{render, AppState, DragSource};
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

fn create_state() -> AppState {
    let mut config = Config::default();
    config.ui.theme_mode = ThemeMode::Light;
    AppState::new(config)
}

fn draw(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_initial_screen() {
    let state = create_state();
    let screen = draw(&state, 80, 30);

    assert!(screen.contains("25:00"));
    assert!(screen.contains("Cycle 1"));
    assert!(screen.contains("Paused"));
    assert!(screen.contains("Start"));
    assert!(screen.contains("Reset"));
    assert!(screen.contains("Add a new task"));
}

#[test]
fn test_running_screen() {
    let t0 = Instant::now();
    let mut state = create_state();
    state.start_timer(t0);
    for i in 1..=9 {
        state.poll_ticker(t0 + Duration::from_secs(i));
    }

    let screen = draw(&state, 80, 30);
    assert!(screen.contains("24:51"));
    assert!(screen.contains("Running"));
    assert!(screen.contains("Pause"));
}

#[test]
fn test_tasks_render_with_affordances() {
    let mut state = create_state();
    state.add_task("write report");
    state.add_task("review");

    let screen = draw(&state, 80, 30);
    assert!(screen.contains("write report"));
    assert!(screen.contains("review"));
    assert!(screen.contains('⠿'));
    assert!(screen.contains('✕'));
    assert!(screen.contains("Tasks (2)"));
}

#[test]
fn test_drop_marker_while_dragging() {
    let mut state = create_state();
    state.add_task("a");
    state.add_task("b");
    state.begin_drag(0, DragSource::Keyboard);
    state.set_drag_target(1);

    let screen = draw(&state, 80, 30);
    assert!(screen.contains('»'));
}

#[test]
fn test_help_overlay() {
    let mut state = create_state();
    state.open_help();
    let screen = draw(&state, 100, 40);
    assert!(screen.contains("Help - Shortcuts"));
    assert!(screen.contains("TIMER"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = create_state();
    state.add_task("a");
    let _ = draw(&state, 10, 5);
    let _ = draw(&state, 1, 1);
}

#[test]
fn test_help_overlay_on_very_wide_terminal() {
    let mut state = create_state();
    state.open_help();
    let screen = draw(&state, 1000, 40);
    assert!(screen.contains("Help - Shortcuts"));
}

#[test]
fn test_help_overlay_on_very_tall_terminal() {
    let mut state = create_state();
    state.open_help();
    let screen = draw(&state, 60, 1000);
    assert!(screen.contains("Help - Shortcuts"));
}

#[test]
fn test_help_reset_line_names_focus_interval() {
    let mut state = create_state();
    state.open_help();
    let screen = draw(&state, 120, 40);
    assert!(screen.contains("Reset to the first focus interval, cycle 1"));
    assert!(!screen.contains("25:00, cycle"));
}
