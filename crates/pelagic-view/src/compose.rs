//! The composer seam between state and view.

use std::time::Duration;

use crate::node::ViewNode;

/// A page section that can rebuild its subtree on demand.
///
/// `build` must be a pure function of the composer's current state: calling
/// it twice without an interaction in between yields the same tree. Sections
/// that carry timers override `tick`; for the rest the default no-op keeps
/// the page's tick fan-out uniform.
pub trait SectionComposer {
    /// Stable navigation anchor, unique within a page.
    fn anchor(&self) -> &'static str;

    /// Human-readable section title.
    fn title(&self) -> &'static str;

    /// Build the section's view subtree from current state.
    fn build(&self) -> ViewNode;

    /// Advance any internal timers.
    fn tick(&mut self, delta: Duration) {
        let _ = delta;
    }
}
