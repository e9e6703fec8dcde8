//! Wall-clock ticker for the header display
//!
//! A self-rescheduling task driven by the UI frame loop. It never reads or
//! writes game state. Once cancelled it stays cancelled.

use chrono::Local;
use std::time::{Duration, Instant};
use tracing::debug;

pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Repeating, cancellable clock
#[derive(Debug, Clone)]
pub struct Clock {
    interval: Duration,
    next_tick: Option<Instant>,
    text: String,
}

impl Clock {
    /// Create a running clock. The first tick is due immediately.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: Some(now),
            text: String::new(),
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Last rendered text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Refresh the text if a tick is due.
    ///
    /// Returns how long until the next tick, or `None` once cancelled.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let due = self.next_tick?;
        if now >= due {
            self.text = current_time_text();
            // Skip missed ticks instead of firing a burst
            let mut next = due + self.interval;
            while next <= now && !self.interval.is_zero() {
                next += self.interval;
            }
            self.next_tick = Some(next);
        }
        self.next_tick.map(|next| next.saturating_duration_since(now))
    }

    /// Stop ticking
    pub fn cancel(&mut self) {
        if self.next_tick.take().is_some() {
            debug!("clock cancelled");
        }
    }
}

/// "Current Time: YYYY-MM-DD HH:MM:SS" in local time
pub fn current_time_text() -> String {
    format!("Current Time: {}", Local::now().format(CLOCK_FORMAT))
}
