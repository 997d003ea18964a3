//! Data-insights dashboard section.

use pelagic_content::series::dashboards;

use crate::compose::SectionComposer;
use crate::node::{ChartSlot, ViewNode};

/// The six dashboard charts. The only state is the live-mode flag, which
/// tells the charting surface whether to animate periodic refreshes.
#[derive(Debug, Clone, Copy)]
pub struct InsightsSection {
    live: bool,
}

impl InsightsSection {
    pub fn new() -> Self {
        Self { live: true }
    }

    /// Flip live mode on or off.
    pub fn toggle_live(&mut self) {
        self.live = !self.live;
        tracing::debug!(live = self.live, "insights live mode toggled");
    }

    pub fn is_live(&self) -> bool {
        self.live
    }
}

impl Default for InsightsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionComposer for InsightsSection {
    fn anchor(&self) -> &'static str {
        "insights"
    }

    fn title(&self) -> &'static str {
        "Data Insights"
    }

    fn build(&self) -> ViewNode {
        let mut children = vec![ViewNode::Badge {
            label: if self.live { "Live" } else { "Paused" }.to_owned(),
            tone: if self.live { "success" } else { "muted" },
        }];
        children.extend(dashboards().into_iter().map(|feed| {
            ViewNode::Chart(ChartSlot {
                feed,
                live: self.live,
            })
        }));
        ViewNode::Section {
            anchor: self.anchor(),
            title: self.title(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_six_dashboards_present() {
        let tree = InsightsSection::new().build();
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Chart(_))), 6);
    }

    #[test]
    fn toggle_propagates_to_slots() {
        let mut section = InsightsSection::new();
        section.toggle_live();
        let tree = section.build();
        tree.walk(&mut |node| {
            if let ViewNode::Chart(slot) = node {
                assert!(!slot.live);
            }
        });
        section.toggle_live();
        assert!(section.is_live());
    }
}
