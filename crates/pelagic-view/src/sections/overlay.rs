//! The DeepSeaGuard call-to-action overlay.

use std::time::Duration;

use pelagic_content::products;
use pelagic_state::{GateConfig, PrefStore, ScrollLock, VisibilityGate};

use crate::node::ViewNode;

/// The promoted product behind the overlay.
const PROMOTED: &str = "deepseaguard";

/// Gate-driven CTA overlay. Not a page section: the page composes it above
/// the section flow, and its tree is `None` while the gate is closed.
#[derive(Debug)]
pub struct OverlaySection {
    gate: VisibilityGate,
}

impl OverlaySection {
    pub fn new(config: GateConfig) -> Self {
        Self {
            gate: VisibilityGate::new(config),
        }
    }

    pub fn with_scroll_lock(mut self, surface: Box<dyn ScrollLock>) -> Self {
        self.gate = self.gate.with_scroll_lock(surface);
        self
    }

    /// Mount: consult persisted markers, arm the auto-open timer.
    pub fn mount(&mut self, prefs: &dyn PrefStore) {
        self.gate.mount(prefs);
    }

    /// Advance the auto-open timer. Returns `true` on the opening tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.gate.tick(delta)
    }

    /// Backdrop click or close button.
    pub fn close(&mut self, prefs: &mut dyn PrefStore) {
        self.gate.close(prefs);
    }

    /// "Don't show this again".
    pub fn dismiss(&mut self, prefs: &mut dyn PrefStore) {
        self.gate.dismiss(prefs);
    }

    pub fn is_open(&self) -> bool {
        self.gate.is_open()
    }

    /// The overlay subtree, `None` while closed.
    pub fn build(&self) -> Option<ViewNode> {
        if !self.gate.is_open() {
            return None;
        }
        let product = products::by_key(PROMOTED)?;
        let mut children = vec![
            ViewNode::Badge {
                label: product.status.label().to_owned(),
                tone: product.accent.name(),
            },
            ViewNode::text(product.blurb),
        ];
        children.extend(product.gauges.iter().map(|m| ViewNode::Gauge {
            label: m.label.to_owned(),
            value: m.value.to_owned(),
            percent: m.percent.unwrap_or(0.0),
        }));
        children.push(ViewNode::Group {
            title: "Why it matters",
            children: product
                .features
                .iter()
                .map(|f| ViewNode::text(*f))
                .collect(),
        });
        children.push(ViewNode::Link {
            label: "Explore the dashboard",
            target: "#ecosystem",
        });
        children.push(ViewNode::Link {
            label: "Don't show this again",
            target: "#dismiss",
        });
        Some(ViewNode::Modal {
            title: format!("Introducing {}", product.name),
            children,
        })
    }
}

impl Default for OverlaySection {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}
