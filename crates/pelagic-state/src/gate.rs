//! Overlay visibility gate.
//!
//! The CTA overlay is a two-state machine: `Closed` at mount, transitioning
//! to `Open` when a one-shot delay fires, and back to `Closed` on backdrop
//! click, explicit close, or "don't show again". Closing writes a persisted
//! "seen" marker; dismissing writes a stronger "dismissed" marker. Whether
//! the dismissed marker suppresses future auto-opens is deliberately a
//! configuration choice ([`GateConfig::suppress_on_dismiss`]): the two
//! shipped revisions of the overlay disagreed, so the integrator decides.
//!
//! While open, the gate holds a scroll lock acquired from an injected
//! [`ScrollLock`] surface (the site adds a class to the document root to
//! freeze background scrolling). The lock is released on every close path,
//! including drop, so navigating away mid-open cannot leak it.

use std::fmt;
use std::time::Duration;

use crate::delay::Delay;
use crate::prefs::PrefStore;

/// Persisted marker: the visitor has closed the overlay at least once.
pub const SEEN_KEY: &str = "cta-seen";
/// Persisted marker: the visitor asked not to see the overlay again.
pub const DISMISSED_KEY: &str = "cta-dismissed";

/// Gate state. No terminal state: a fresh mount can reopen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Closed,
    Open,
}

/// Gate policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct GateConfig {
    /// Delay between mount and automatic open.
    pub auto_open_delay: Duration,
    /// Whether persisted markers suppress the automatic open on later
    /// mounts. `false` reproduces the revision that re-shows the overlay
    /// every visit regardless of "don't show again".
    pub suppress_on_dismiss: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            auto_open_delay: Duration::from_secs(2),
            suppress_on_dismiss: true,
        }
    }
}

/// Surface that can freeze and unfreeze background scrolling.
///
/// The production surface toggles a class on the document root; tests use a
/// counting spy. Lock/unlock must be idempotent-safe in pairs: the gate
/// guarantees every `lock` is matched by exactly one `unlock`.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// No-op surface for sections that do not freeze scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
    fn lock(&self) {}
    fn unlock(&self) {}
}

/// The overlay visibility state machine.
pub struct VisibilityGate {
    config: GateConfig,
    state: GateState,
    delay: Option<Delay>,
    locked: bool,
    surface: Box<dyn ScrollLock>,
}

impl fmt::Debug for VisibilityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityGate")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("delay", &self.delay)
            .field("locked", &self.locked)
            .finish_non_exhaustive()
    }
}

impl VisibilityGate {
    /// A gate that has not been mounted yet; state is `Closed`, no timer.
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            state: GateState::Closed,
            delay: None,
            locked: false,
            surface: Box::new(NoScrollLock),
        }
    }

    /// Replace the scroll-lock surface.
    pub fn with_scroll_lock(mut self, surface: Box<dyn ScrollLock>) -> Self {
        self.surface = surface;
        self
    }

    /// Mount the gate: consult the persisted markers and, unless suppressed,
    /// arm the one-shot auto-open delay.
    pub fn mount(&mut self, prefs: &dyn PrefStore) {
        let marked = prefs.get(SEEN_KEY) || prefs.get(DISMISSED_KEY);
        if marked && self.config.suppress_on_dismiss {
            tracing::debug!("overlay auto-open suppressed by persisted marker");
            self.delay = None;
            return;
        }
        self.delay = Some(Delay::new(self.config.auto_open_delay));
    }

    /// Advance the auto-open timer. Returns `true` on the tick where the
    /// gate transitions to `Open`.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let fired = match self.delay.as_mut() {
            Some(delay) => delay.tick(delta),
            None => false,
        };
        if fired && self.state == GateState::Closed {
            self.state = GateState::Open;
            self.acquire_lock();
            tracing::debug!("overlay opened");
            return true;
        }
        false
    }

    /// Close the overlay and remember that the visitor has seen it.
    /// Calling from `Closed` is a no-op.
    pub fn close(&mut self, prefs: &mut dyn PrefStore) {
        if self.state == GateState::Closed {
            return;
        }
        self.state = GateState::Closed;
        self.release_lock();
        prefs.set(SEEN_KEY);
        tracing::debug!("overlay closed");
    }

    /// Close the overlay and write the stronger "don't show again" marker.
    /// Calling from `Closed` is a no-op.
    pub fn dismiss(&mut self, prefs: &mut dyn PrefStore) {
        if self.state == GateState::Closed {
            return;
        }
        self.state = GateState::Closed;
        self.release_lock();
        prefs.set(SEEN_KEY);
        prefs.set(DISMISSED_KEY);
        tracing::debug!("overlay dismissed permanently");
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }

    /// Whether the auto-open timer is armed and counting.
    pub fn is_armed(&self) -> bool {
        self.delay.as_ref().is_some_and(Delay::is_pending)
    }

    fn acquire_lock(&mut self) {
        if !self.locked {
            self.surface.lock();
            self.locked = true;
        }
    }

    fn release_lock(&mut self) {
        if self.locked {
            self.surface.unlock();
            self.locked = false;
        }
    }
}

impl Drop for VisibilityGate {
    fn drop(&mut self) {
        // Unmount while open must still release the scroll lock.
        self.release_lock();
    }
}
