//! Terminal user interface: state, event loop, and rendering.
//!
//! `AppState` is the single source of truth. Renderers read it immutably;
//! only the handlers in [`handlers`] mutate it.

pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod layout;
pub mod status_bar;
pub mod task_input;
pub mod task_panel;
pub mod theme;
pub mod ticker;
pub mod timer_panel;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{format_time, DisplayMode, TaskList, TickOutcome, Timer};
use crate::shortcuts::ShortcutRegistry;

pub use component::Component;
pub use help_overlay::HelpOverlay;
pub use layout::{AppLayout, HitTarget};
pub use status_bar::StatusBar;
pub use task_input::{TaskInput, TaskInputEvent};
pub use theme::Theme;
pub use ticker::Ticker;

/// Longest the event loop blocks waiting for input.
const MAX_POLL: Duration = Duration::from_millis(250);

/// What started a task drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// Mouse press on a task row
    Mouse,
    /// Grab key on the selected task
    Keyboard,
}

/// A task being dragged to a new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDrag {
    /// Index the task was picked up from
    pub from: usize,
    /// Row currently under the pointer or keyboard cursor
    pub target: usize,
    /// How the drag was started
    pub source: DragSource,
}

/// Application state - single source of truth
pub struct AppState {
    // Core data
    /// Countdown state machine
    pub timer: Timer,
    /// One-second tick source; armed exactly while the timer runs
    pub ticker: Ticker,
    /// Ordered task labels
    pub tasks: TaskList,
    /// Dark/light flag
    pub display_mode: DisplayMode,

    // UI state
    /// Palette derived from `display_mode`
    pub theme: Theme,
    /// Highlighted task
    pub selected_task: Option<usize>,
    /// Task drag in progress
    pub drag: Option<TaskDrag>,
    /// New-task input
    pub input: TaskInput,
    /// Help overlay, when open
    pub help_overlay: Option<HelpOverlay>,
    /// Status bar message
    pub status_message: String,
    /// Last drawn terminal area, used for mouse hit testing
    pub screen: Rect,
    /// Index of the first visible task row
    pub task_scroll: usize,

    // System
    /// Key bindings for the main screen
    pub shortcuts: ShortcutRegistry,
    /// Loaded configuration
    pub config: Config,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state: stopped timer at cycle 1, empty task list.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let display_mode = theme::initial_mode(config.ui.theme_mode);
        let help_overlay = config.ui.show_help_on_startup.then(HelpOverlay::new);

        Self {
            timer: Timer::with_durations(config.timer.durations()),
            ticker: Ticker::new(),
            tasks: TaskList::new(),
            display_mode,
            theme: Theme::for_mode(display_mode),
            selected_task: None,
            drag: None,
            input: TaskInput::new(),
            help_overlay,
            status_message: String::new(),
            screen: Rect::default(),
            task_scroll: 0,
            shortcuts: ShortcutRegistry::new(),
            config,
            should_quit: false,
        }
    }

    /// Layout of the last drawn screen.
    #[must_use]
    pub fn layout(&self) -> AppLayout {
        AppLayout::compute(self.screen)
    }

    /// Index of the first visible task row.
    ///
    /// Rendering and mouse hit testing both read this value, so a row keeps
    /// its index between a press and the matching release.
    #[must_use]
    pub const fn task_list_offset(&self) -> usize {
        self.task_scroll
    }

    /// Records the terminal area and keeps the focused task on screen.
    pub fn resize(&mut self, area: Rect) {
        self.screen = area;
        self.scroll_to_focus();
    }

    /// Scrolls the task list just enough to show the drag target or selection.
    pub fn scroll_to_focus(&mut self) {
        let focus = self.drag.map(|drag| drag.target).or(self.selected_task);
        self.task_scroll = layout::scroll_to_keep_visible(
            self.task_scroll,
            focus,
            self.layout().visible_task_rows(),
            self.tasks.len(),
        );
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    // === Timer ===

    /// Starts the countdown and arms the ticker.
    pub fn start_timer(&mut self, now: Instant) {
        if self.timer.start() {
            tracing::info!(
                cycle = self.timer.cycle(),
                remaining = self.timer.remaining_seconds(),
                "timer started"
            );
            self.set_status("Timer started");
        }
        self.sync_ticker(now);
    }

    /// Pauses the countdown and releases the ticker.
    pub fn pause_timer(&mut self, now: Instant) {
        if self.timer.pause() {
            tracing::info!(
                cycle = self.timer.cycle(),
                remaining = self.timer.remaining_seconds(),
                "timer paused"
            );
            self.set_status("Timer paused");
        }
        self.sync_ticker(now);
    }

    /// Starts when stopped, pauses when running.
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause_timer(now);
        } else {
            self.start_timer(now);
        }
    }

    /// Stops the countdown and returns to the first focus interval.
    pub fn reset_timer(&mut self, now: Instant) {
        self.timer.reset();
        tracing::info!("timer reset");
        self.set_status(format!(
            "Timer reset to {}",
            format_time(self.timer.remaining_seconds())
        ));
        self.sync_ticker(now);
    }

    /// Arms the ticker while the timer runs and releases it otherwise.
    pub fn sync_ticker(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.ticker.arm(now);
        } else if self.ticker.is_armed() {
            self.ticker.disarm();
            tracing::debug!("ticker released");
        }
    }

    /// Applies one countdown tick.
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if let TickOutcome::RolledOver { cycle, next } = outcome {
            tracing::info!(cycle, interval = %next, "interval rolled over");
            self.set_status(format!(
                "Cycle {cycle}: {next} ({})",
                format_time(self.timer.remaining_seconds())
            ));
        }
        outcome
    }

    /// Fires the ticker if a tick is due at `now`.
    pub fn poll_ticker(&mut self, now: Instant) -> Option<TickOutcome> {
        self.sync_ticker(now);
        if self.ticker.fire_if_due(now) {
            Some(self.on_tick())
        } else {
            None
        }
    }

    // === Tasks ===

    /// Appends a task and selects it.
    pub fn add_task(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(task = %text, "task added");
        self.set_status(if text.is_empty() {
            "Added empty task".to_string()
        } else {
            format!("Added: {text}")
        });
        self.tasks.add(text);
        self.selected_task = Some(self.tasks.len() - 1);
        self.scroll_to_focus();
    }

    /// Deletes the task at `index`. Out-of-range indices are ignored.
    pub fn delete_task(&mut self, index: usize) {
        let Some(removed) = self.tasks.remove(index) else {
            return;
        };
        tracing::debug!(index, task = %removed, "task removed");
        self.set_status(format!("Deleted: {removed}"));
        self.drag = None;

        self.selected_task = match self.selected_task {
            _ if self.tasks.is_empty() => None,
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) => Some(selected.min(self.tasks.len() - 1)),
            None => None,
        };
        self.scroll_to_focus();
    }

    /// Deletes the selected task, if any.
    pub fn delete_selected_task(&mut self) {
        if let Some(index) = self.selected_task {
            self.delete_task(index);
        } else {
            self.set_status("No task selected");
        }
    }

    /// Moves a task and keeps it selected.
    pub fn reorder_task(&mut self, from: usize, to: usize) {
        if let Some(index) = self.tasks.reorder(from, to) {
            tracing::debug!(from, to = index, "task reordered");
            if index != from {
                self.set_status(format!("Moved task to position {}", index + 1));
            }
            self.selected_task = Some(index);
            self.scroll_to_focus();
        }
    }

    /// Moves the selected task one row up (`-1`) or down (`+1`).
    pub fn move_selected_task(&mut self, delta: isize) {
        let Some(from) = self.selected_task else {
            self.set_status("No task selected");
            return;
        };
        let Some(to) = from.checked_add_signed(delta) else {
            return;
        };
        if to < self.tasks.len() {
            self.reorder_task(from, to);
        }
    }

    /// Selects the previous task, wrapping to the last.
    pub fn select_previous_task(&mut self) {
        let count = self.tasks.len();
        if count == 0 {
            return;
        }
        self.selected_task = Some(match self.selected_task {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        });
        self.scroll_to_focus();
    }

    /// Selects the next task, wrapping to the first.
    pub fn select_next_task(&mut self) {
        let count = self.tasks.len();
        if count == 0 {
            return;
        }
        self.selected_task = Some(match self.selected_task {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        });
        self.scroll_to_focus();
    }

    // === Drag and drop ===

    /// Picks up the task at `from`.
    pub fn begin_drag(&mut self, from: usize, source: DragSource) {
        if from >= self.tasks.len() {
            return;
        }
        self.selected_task = Some(from);
        self.drag = Some(TaskDrag {
            from,
            target: from,
            source,
        });
        self.scroll_to_focus();
        if source == DragSource::Keyboard {
            self.set_status("Moving task - ↑/↓ to choose position, m to drop, Esc to cancel");
        }
    }

    /// Points the active drag at another row.
    pub fn set_drag_target(&mut self, target: usize) {
        let count = self.tasks.len();
        if let Some(drag) = self.drag.as_mut() {
            if count > 0 {
                drag.target = target.min(count - 1);
            }
        }
        self.scroll_to_focus();
    }

    /// Shifts the drag target by one row, clamped to the list.
    pub fn step_drag_target(&mut self, delta: isize) {
        if let Some(drag) = self.drag {
            if let Some(target) = drag.target.checked_add_signed(delta) {
                self.set_drag_target(target);
            }
        }
    }

    /// Drops the dragged task onto its current target.
    pub fn finish_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.reorder_task(drag.from, drag.target);
        }
    }

    /// Abandons the drag without moving anything.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.set_status("Move cancelled");
            self.scroll_to_focus();
        }
    }

    // === Display ===

    /// Flips dark/light mode.
    pub fn toggle_display_mode(&mut self) {
        self.display_mode.toggle();
        self.theme = Theme::for_mode(self.display_mode);
        tracing::debug!(mode = %self.display_mode, "display mode toggled");
        self.set_status(format!("Switched to {} mode", self.display_mode));
    }

    // === Popups ===

    /// Opens the help overlay
    pub fn open_help(&mut self) {
        self.help_overlay = Some(HelpOverlay::new());
    }

    /// Closes the help overlay
    pub fn close_help(&mut self) {
        self.help_overlay = None;
    }

    /// Releases the tick source. Called when the UI is torn down.
    pub fn shutdown(&mut self) {
        self.ticker.disarm();
        tracing::debug!("ticker released on shutdown");
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let result = event_loop(state, terminal);
    state.shutdown();
    result
}

fn event_loop(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let mut area = state.screen;
        terminal.draw(|f| {
            area = f.area();
            render(f, state);
        })?;
        if area != state.screen {
            state.resize(area);
        }

        let timeout = state.ticker.poll_timeout(Instant::now(), MAX_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::handle_key_event(state, key, Instant::now()) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse, Instant::now()),
                // Resize and focus events re-render on the next iteration
                _ => {}
            }
        }

        state.poll_ticker(Instant::now());

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = AppLayout::compute(f.area());

    render_header(f, &layout, state);
    timer_panel::render(f, &layout, state);
    task_panel::render(f, &layout, state);
    state.input.render(f, layout.input, &state.theme);
    StatusBar::render(f, layout.status_bar, state, &state.theme);

    if let Some(help) = &state.help_overlay {
        let area = f.area();
        help.render(f, area, &state.theme);
    }
}

fn render_header(f: &mut Frame, layout: &AppLayout, state: &AppState) {
    let theme = &state.theme;

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {APP_NAME}"),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(title, layout.header);

    // Shows the mode a click switches to
    let toggle_label = if state.display_mode.is_dark() {
        "☀ Light"
    } else {
        "☾ Dark"
    };
    let toggle = Paragraph::new(toggle_label).style(
        Style::default()
            .fg(theme.accent)
            .bg(theme.surface),
    );
    f.render_widget(toggle, layout.theme_toggle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;

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
    fn test_new_state() {
        let state = state_with_tasks(&[]);
        assert_eq!(state.timer.remaining_seconds(), 1500);
        assert!(!state.ticker.is_armed());
        assert!(state.tasks.is_empty());
        assert_eq!(state.display_mode, DisplayMode::Light);
        assert!(state.help_overlay.is_none());
    }

    #[test]
    fn test_start_arms_and_pause_releases_ticker() {
        let now = Instant::now();
        let mut state = state_with_tasks(&[]);

        state.start_timer(now);
        assert!(state.ticker.is_armed());

        state.pause_timer(now);
        assert!(!state.ticker.is_armed());
        assert_eq!(state.poll_ticker(now + Duration::from_secs(3)), None);
        assert_eq!(state.timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_poll_ticker_counts_down() {
        let now = Instant::now();
        let mut state = state_with_tasks(&[]);
        state.start_timer(now);

        assert_eq!(
            state.poll_ticker(now + Duration::from_secs(1)),
            Some(TickOutcome::Counted)
        );
        assert_eq!(state.timer.remaining_seconds(), 1499);
    }

    #[test]
    fn test_reset_releases_ticker() {
        let now = Instant::now();
        let mut state = state_with_tasks(&[]);
        state.start_timer(now);
        state.reset_timer(now);
        assert!(!state.ticker.is_armed());
        assert!(!state.timer.is_running());
    }

    #[test]
    fn test_add_selects_new_task() {
        let state = state_with_tasks(&["a", "b"]);
        assert_eq!(state.selected_task, Some(1));
    }

    #[test]
    fn test_delete_adjusts_selection() {
        let mut state = state_with_tasks(&["a", "b", "c"]);
        state.selected_task = Some(2);
        state.delete_task(0);
        assert_eq!(state.selected_task, Some(1));
        assert_eq!(state.tasks.as_slice(), ["b", "c"]);

        state.delete_task(1);
        assert_eq!(state.selected_task, Some(0));

        state.delete_task(0);
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn test_delete_out_of_range_keeps_state() {
        let mut state = state_with_tasks(&["a"]);
        state.delete_task(4);
        assert_eq!(state.tasks.as_slice(), ["a"]);
        assert_eq!(state.selected_task, Some(0));
    }

    #[test]
    fn test_keyboard_drag() {
        let mut state = state_with_tasks(&["a", "b", "c"]);
        state.begin_drag(0, DragSource::Keyboard);
        state.step_drag_target(1);
        state.step_drag_target(1);
        state.step_drag_target(1);
        assert_eq!(state.drag.map(|d| d.target), Some(2));

        state.finish_drag();
        assert_eq!(state.tasks.as_slice(), ["b", "c", "a"]);
        assert_eq!(state.selected_task, Some(2));
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_cancel_drag() {
        let mut state = state_with_tasks(&["a", "b"]);
        state.begin_drag(1, DragSource::Mouse);
        state.set_drag_target(0);
        state.cancel_drag();
        assert_eq!(state.tasks.as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_move_selected_task_at_edges() {
        let mut state = state_with_tasks(&["a", "b"]);
        state.selected_task = Some(0);
        state.move_selected_task(-1);
        assert_eq!(state.tasks.as_slice(), ["a", "b"]);

        state.move_selected_task(1);
        assert_eq!(state.tasks.as_slice(), ["b", "a"]);
        assert_eq!(state.selected_task, Some(1));

        state.move_selected_task(1);
        assert_eq!(state.tasks.as_slice(), ["b", "a"]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = state_with_tasks(&["a", "b"]);
        state.selected_task = Some(1);
        state.select_next_task();
        assert_eq!(state.selected_task, Some(0));
        state.select_previous_task();
        assert_eq!(state.selected_task, Some(1));
    }

    #[test]
    fn test_toggle_display_mode_updates_theme() {
        let mut state = state_with_tasks(&[]);
        state.toggle_display_mode();
        assert_eq!(state.display_mode, DisplayMode::Dark);
        assert_eq!(state.theme, Theme::dark());
        state.toggle_display_mode();
        assert_eq!(state.theme, Theme::light());
    }

    #[test]
    fn test_task_scroll_stable_while_grabbing_visible_row() {
        let mut state = state_with_tasks(&[]);
        state.resize(Rect::new(0, 0, 80, 30));
        for i in 0..20 {
            state.add_task(format!("t{i}"));
        }
        let visible = state.layout().visible_task_rows();
        let scroll = state.task_list_offset();
        assert_eq!(scroll, 20 - visible);

        state.begin_drag(scroll + 1, DragSource::Mouse);
        assert_eq!(state.task_list_offset(), scroll);
        state.finish_drag();
        assert_eq!(state.task_list_offset(), scroll);
    }

    #[test]
    fn test_resize_keeps_selection_visible() {
        let mut state = state_with_tasks(&[]);
        state.resize(Rect::new(0, 0, 80, 60));
        for i in 0..20 {
            state.add_task(format!("t{i}"));
        }
        assert_eq!(state.task_list_offset(), 0);

        state.resize(Rect::new(0, 0, 80, 30));
        let visible = state.layout().visible_task_rows();
        assert_eq!(state.task_list_offset(), 20 - visible);
    }

    #[test]
    fn test_shutdown_releases_ticker() {
        let mut state = state_with_tasks(&[]);
        state.start_timer(Instant::now());
        state.shutdown();
        assert!(!state.ticker.is_armed());
    }
}
