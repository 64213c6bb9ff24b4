//! Fixed-interval frame pacing
//!
//! The bounce demo advances its simulation at most once per interval,
//! regardless of how often the window is redrawn. Missed intervals are not
//! made up: a late frame still ticks only once.

use std::time::{Duration, Instant};

/// Decides when the next simulation tick is due
pub struct FramePacer {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FramePacer {
    /// Create a pacer that ticks every `interval`
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Create a pacer from a millisecond interval
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Interval between ticks
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick is due at `now`; the first call is always due
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Record that a tick happened at `now`
    pub fn mark(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    /// If a tick is due at `now`, record it and return true
    pub fn try_tick(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.mark(now);
            true
        } else {
            false
        }
    }

    /// When the next tick becomes due, or `None` before the first tick
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_tick.map(|last| last + self.interval)
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::from_millis(10)
    }
}
