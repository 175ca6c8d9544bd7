//! Data models for the Pomodoro widget.
//!
//! These types hold all widget state and are independent of the terminal UI.

pub mod display_mode;
pub mod task_list;
pub mod timer;

pub use display_mode::DisplayMode;
pub use task_list::TaskList;
pub use timer::{format_time, IntervalKind, TickOutcome, Timer, TimerDurations, TimerState};
