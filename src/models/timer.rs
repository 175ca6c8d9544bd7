//! Countdown state machine for focus and break intervals.
//!
//! The timer is a plain value driven from outside: the UI loop calls
//! [`Timer::tick`] once per second while the timer is running. When the
//! countdown reaches zero the next interval is selected immediately and the
//! timer keeps running.

use std::fmt;

use crate::constants::{LONG_BREAK_EVERY, LONG_BREAK_SECONDS, SHORT_BREAK_SECONDS, WORK_SECONDS};

/// Interval lengths used by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDurations {
    /// Focus interval length in seconds
    pub work_seconds: u32,
    /// Short break length in seconds
    pub short_break_seconds: u32,
    /// Long break length in seconds
    pub long_break_seconds: u32,
    /// Every n-th cycle boundary selects a long break
    pub long_break_every: u32,
}

impl Default for TimerDurations {
    fn default() -> Self {
        Self {
            work_seconds: WORK_SECONDS,
            short_break_seconds: SHORT_BREAK_SECONDS,
            long_break_seconds: LONG_BREAK_SECONDS,
            long_break_every: LONG_BREAK_EVERY,
        }
    }
}

/// Kind of interval currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    /// Focus interval (only after reset)
    Work,
    /// Short break
    ShortBreak,
    /// Long break
    LongBreak,
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Work => write!(f, "Focus"),
            Self::ShortBreak => write!(f, "Short break"),
            Self::LongBreak => write!(f, "Long break"),
        }
    }
}

/// Observable timer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds left in the current interval
    pub remaining_seconds: u32,
    /// Whether the countdown is advancing
    pub running: bool,
    /// Current cycle, starting at 1
    pub cycle: u32,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was stopped; nothing changed
    Idle,
    /// One second was counted down
    Counted,
    /// Countdown hit zero and the next interval started
    RolledOver {
        /// Cycle number after the rollover
        cycle: u32,
        /// Interval that was started
        next: IntervalKind,
    },
}

/// Pomodoro countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    remaining: u32,
    running: bool,
    cycle: u32,
    interval: IntervalKind,
    durations: TimerDurations,
}

impl Timer {
    /// Creates a stopped timer at the start of cycle 1 with the default durations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_durations(TimerDurations::default())
    }

    /// Creates a stopped timer at the start of cycle 1.
    #[must_use]
    pub fn with_durations(durations: TimerDurations) -> Self {
        Self {
            remaining: durations.work_seconds,
            running: false,
            cycle: 1,
            interval: IntervalKind::Work,
            durations,
        }
    }

    /// Snapshot of the observable values.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        TimerState {
            remaining_seconds: self.remaining,
            running: self.running,
            cycle: self.cycle,
        }
    }

    /// Seconds left in the current interval.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown is advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Current cycle number.
    #[must_use]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Interval currently counting down.
    #[must_use]
    pub const fn interval(&self) -> IntervalKind {
        self.interval
    }

    /// Durations this timer was built with.
    #[must_use]
    pub const fn durations(&self) -> TimerDurations {
        self.durations
    }

    /// Full length of the current interval in seconds.
    #[must_use]
    pub const fn interval_seconds(&self) -> u32 {
        self.length_of(self.interval)
    }

    /// Fraction of the current interval already elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.interval_seconds();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining);
        (f64::from(elapsed) / f64::from(total)).clamp(0.0, 1.0)
    }

    /// Starts the countdown. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stops the countdown. Returns `false` if it was already stopped.
    pub fn pause(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    /// Stops the countdown and returns to the first focus interval.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.durations.work_seconds;
        self.cycle = 1;
        self.interval = IntervalKind::Work;
    }

    /// Counts down one second.
    ///
    /// Does nothing while stopped. Reaching zero rolls over into the next
    /// interval within the same call, so `remaining_seconds` is never observed
    /// at zero between ticks.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            let next = self.roll_over();
            return TickOutcome::RolledOver {
                cycle: self.cycle,
                next,
            };
        }

        TickOutcome::Counted
    }

    fn roll_over(&mut self) -> IntervalKind {
        let next = if self.is_long_break_boundary() {
            IntervalKind::LongBreak
        } else {
            IntervalKind::ShortBreak
        };

        self.remaining = self.length_of(next);
        self.cycle = self.cycle.saturating_add(1);
        self.interval = next;
        self.running = true;
        next
    }

    fn is_long_break_boundary(&self) -> bool {
        self.cycle
            .checked_rem(self.durations.long_break_every)
            .is_some_and(|rem| rem == 0)
    }

    const fn length_of(&self, kind: IntervalKind) -> u32 {
        match kind {
            IntervalKind::Work => self.durations.work_seconds,
            IntervalKind::ShortBreak => self.durations.short_break_seconds,
            IntervalKind::LongBreak => self.durations.long_break_seconds,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}
