use std::time::{Duration, Instant};

/// Fixed-timestep accumulator that decouples ticks from frame rate.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    last: Instant,
}

impl FixedStep {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            last: now,
        }
    }

    /// Adds the time elapsed since the previous call and returns how many
    /// whole ticks are now due.
    pub fn advance(&mut self, now: Instant) -> u32 {
        self.accumulator += now.saturating_duration_since(self.last);
        self.last = now;

        let mut due = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            due += 1;
        }
        due
    }

    /// Drops accumulated time, e.g. after a reset or while paused.
    pub fn restart(&mut self, now: Instant) {
        self.accumulator = Duration::ZERO;
        self.last = now;
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}
