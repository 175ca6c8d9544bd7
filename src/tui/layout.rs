//! Screen regions and mouse hit testing.
//!
//! Rendering and mouse handling both derive their rectangles from
//! [`AppLayout::compute`], so a click always maps to what was drawn.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

/// Width of the start/pause and reset buttons.
pub const BUTTON_WIDTH: u16 = 12;

/// Columns at the right edge of a task row that act as the delete affordance.
pub const DELETE_WIDTH: u16 = 3;

/// Width of the dark/light toggle in the header.
pub const TOGGLE_WIDTH: u16 = 8;

/// Rectangles for every region of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar
    pub header: Rect,
    /// Dark/light toggle inside the header
    pub theme_toggle: Rect,
    /// Timer panel (outer, with border)
    pub timer: Rect,
    /// `MM:SS` readout
    pub countdown: Rect,
    /// `Cycle N / Running` readout
    pub status_line: Rect,
    /// Interval progress gauge
    pub gauge: Rect,
    /// Start/pause button
    pub start_button: Rect,
    /// Reset button
    pub reset_button: Rect,
    /// Task panel (outer, with border)
    pub tasks: Rect,
    /// Area holding one task per line
    pub task_rows: Rect,
    /// New-task input field
    pub input: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

/// What a mouse position points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Dark/light toggle
    ThemeToggle,
    /// Start/pause button
    StartPause,
    /// Reset button
    Reset,
    /// Body of the task row at this index
    TaskRow(usize),
    /// Delete affordance of the task row at this index
    DeleteTask(usize),
    /// New-task input
    Input,
}

impl AppLayout {
    /// Splits the terminal area into regions.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(8), // Timer panel
                Constraint::Min(5),    // Task panel
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        let header = chunks[0];
        let timer = chunks[1];
        let tasks = chunks[2];
        let status_bar = chunks[3];

        let header_inner = Block::default().borders(Borders::ALL).inner(header);
        let toggle_width = TOGGLE_WIDTH.min(header_inner.width);
        let theme_toggle = Rect {
            x: header_inner.right().saturating_sub(toggle_width),
            y: header_inner.y,
            width: toggle_width,
            height: header_inner.height.min(1),
        };

        let timer_inner = Block::default().borders(Borders::ALL).inner(timer);
        let timer_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Countdown
                Constraint::Length(1), // Cycle / state
                Constraint::Length(1), // Gauge
                Constraint::Length(3), // Buttons
            ])
            .split(timer_inner);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(2),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .flex(Flex::Center)
            .split(timer_rows[3]);

        let tasks_inner = Block::default().borders(Borders::ALL).inner(tasks);
        let task_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(tasks_inner);

        Self {
            header,
            theme_toggle,
            timer,
            countdown: timer_rows[0],
            status_line: timer_rows[1],
            gauge: timer_rows[2],
            start_button: buttons[0],
            reset_button: buttons[2],
            tasks,
            task_rows: task_chunks[0],
            input: task_chunks[1],
            status_bar,
        }
    }

    /// Number of task rows that fit on screen.
    #[must_use]
    pub const fn visible_task_rows(&self) -> usize {
        self.task_rows.height as usize
    }

    /// Resolves a mouse position to a target.
    ///
    /// `offset` is the index of the first visible task and `task_count` the
    /// length of the list.
    #[must_use]
    pub fn hit_test(
        &self,
        column: u16,
        row: u16,
        task_count: usize,
        offset: usize,
    ) -> Option<HitTarget> {
        let pos = Position::new(column, row);

        if self.theme_toggle.contains(pos) {
            return Some(HitTarget::ThemeToggle);
        }
        if self.start_button.contains(pos) {
            return Some(HitTarget::StartPause);
        }
        if self.reset_button.contains(pos) {
            return Some(HitTarget::Reset);
        }
        if self.input.contains(pos) {
            return Some(HitTarget::Input);
        }
        if self.task_rows.contains(pos) {
            let index = offset + usize::from(row - self.task_rows.y);
            if index >= task_count {
                return None;
            }
            let delete_start = self.task_rows.right().saturating_sub(DELETE_WIDTH);
            return Some(if column >= delete_start {
                HitTarget::DeleteTask(index)
            } else {
                HitTarget::TaskRow(index)
            });
        }

        None
    }

    /// Task index under `row` for drop targeting, ignoring the column.
    ///
    /// Rows below the last task resolve to the last task.
    #[must_use]
    pub fn task_index_at_row(&self, row: u16, task_count: usize, offset: usize) -> Option<usize> {
        if task_count == 0
            || row < self.task_rows.y
            || row >= self.task_rows.bottom()
        {
            return None;
        }
        let index = offset + usize::from(row - self.task_rows.y);
        Some(index.min(task_count - 1))
    }
}

/// Adjusts a list scroll position so `focus` stays on screen.
///
/// The position only moves when the focused row would fall outside the
/// window, and never leaves blank rows below the last task.
#[must_use]
pub fn scroll_to_keep_visible(
    scroll: usize,
    focus: Option<usize>,
    visible_rows: usize,
    task_count: usize,
) -> usize {
    if visible_rows == 0 {
        return scroll;
    }
    let scroll = scroll.min(task_count.saturating_sub(visible_rows));
    match focus {
        Some(index) if index < scroll => index,
        Some(index) if index >= scroll + visible_rows => index + 1 - visible_rows,
        _ => scroll,
    }
}
