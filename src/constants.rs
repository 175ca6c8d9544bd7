//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed interval lengths.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Pomodoro Timer";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "pomodoro";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "PomodoroTui";

/// Length of a focus interval in seconds (25 minutes).
pub const WORK_SECONDS: u32 = 25 * 60;

/// Length of a short break in seconds (5 minutes).
pub const SHORT_BREAK_SECONDS: u32 = 5 * 60;

/// Length of a long break in seconds (15 minutes).
pub const LONG_BREAK_SECONDS: u32 = 15 * 60;

/// Every n-th cycle boundary selects a long break instead of a short one.
pub const LONG_BREAK_EVERY: u32 = 4;

/// Period of the countdown tick in milliseconds.
pub const TICK_MILLIS: u64 = 1000;
