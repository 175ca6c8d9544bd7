//! Pomodoro Timer Library
//!
//! A terminal Pomodoro timer: a countdown that cycles through focus and
//! break intervals, an ordered task list that can be reordered by
//! dragging, and a dark/light display toggle.

// Module declarations
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
