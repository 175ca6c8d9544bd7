//! Periodic one-second tick source for the countdown.
//!
//! The ticker is the only recurring callback in the application. It is armed
//! when the timer starts and must be disarmed whenever the timer stops, so a
//! stopped timer never receives a tick.

use std::time::{Duration, Instant};

use crate::constants::TICK_MILLIS;

/// Interval-based tick scheduler.
///
/// Each fire schedules the next one a full period after the moment it was
/// observed; there is no catch-up for late polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Creates a disarmed ticker with the default one-second period.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_period(Duration::from_millis(TICK_MILLIS))
    }

    /// Creates a disarmed ticker with a custom period.
    #[must_use]
    pub const fn with_period(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedules the first tick one period after `now`. No-op if already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Cancels any scheduled tick.
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Returns true if a tick is due at `now`, scheduling the next one.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// How long the event loop may block before the next tick, capped at `max`.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next_due
            .map_or(max, |due| due.saturating_duration_since(now).min(max))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticker_is_disarmed() {
        let mut ticker = Ticker::new();
        assert!(!ticker.is_armed());
        assert!(!ticker.fire_if_due(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn test_fires_after_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        ticker.arm(start);

        assert!(!ticker.fire_if_due(start + Duration::from_millis(999)));
        assert!(ticker.fire_if_due(start + Duration::from_millis(1000)));
        // Next tick is one period after the observed fire
        assert!(!ticker.fire_if_due(start + Duration::from_millis(1500)));
        assert!(ticker.fire_if_due(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_arm_twice_keeps_schedule() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        ticker.arm(start);
        ticker.arm(start + Duration::from_millis(900));
        assert!(ticker.fire_if_due(start + Duration::from_millis(1000)));
    }

    #[test]
    fn test_disarm_cancels_pending_tick() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        ticker.arm(start);
        ticker.disarm();
        assert!(!ticker.is_armed());
        assert!(!ticker.fire_if_due(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_poll_timeout() {
        let start = Instant::now();
        let max = Duration::from_millis(250);
        let mut ticker = Ticker::new();
        assert_eq!(ticker.poll_timeout(start, max), max);

        ticker.arm(start);
        assert_eq!(
            ticker.poll_timeout(start + Duration::from_millis(900), max),
            Duration::from_millis(100)
        );
        assert_eq!(
            ticker.poll_timeout(start + Duration::from_millis(2000), max),
            Duration::ZERO
        );
    }
}
