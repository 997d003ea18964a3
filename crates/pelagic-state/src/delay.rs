//! One-shot deferred transitions.
//!
//! A [`Delay`] stands in for the site's `setTimeout`: armed with a fixed
//! duration, it fires exactly once when the accumulated tick time reaches
//! that duration. There is no thread behind it - the owner advances it from
//! its own clock - so dropping the owner cancels the pending transition
//! with no cleanup protocol.

use std::time::Duration;

/// A single-fire, tick-driven timer.
#[derive(Debug, Clone)]
pub struct Delay {
    duration: Duration,
    elapsed: Duration,
    fired: bool,
    cancelled: bool,
}

impl Delay {
    /// Arm a delay that fires after `duration` of accumulated ticks.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            fired: false,
            cancelled: false,
        }
    }

    /// Advance the delay. Returns `true` exactly once, on the tick where the
    /// accumulated time reaches the duration.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.fired || self.cancelled {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.duration {
            self.fired = true;
            true
        } else {
            false
        }
    }

    /// Cancel the delay; it will never fire.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the delay is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        !self.fired && !self.cancelled
    }

    /// Whether the delay has fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Time left before firing; zero once fired or cancelled.
    pub fn remaining(&self) -> Duration {
        if self.is_pending() {
            self.duration.saturating_sub(self.elapsed)
        } else {
            Duration::ZERO
        }
    }
}
