//! The declarative view-node tree.
//!
//! Composers emit [`ViewNode`] values; the rendering surface walks the tree
//! and draws it. Charts, maps, and forms are not expanded into primitive
//! nodes - they stay as typed slots carrying references to the underlying
//! fixtures and state snapshots, so the specialised surfaces (charting
//! library, map widget, form renderer) receive their data intact.

use pelagic_content::fleet::{AuvUnit, GeoBounds, GeoPoint, PlumeRegion};
use pelagic_content::series::ChartFeed;
use pelagic_state::Phase;

/// A chart placement: which feed, and whether the host should animate it as
/// a live dashboard.
#[derive(Debug, Clone, Copy)]
pub struct ChartSlot {
    pub feed: &'static ChartFeed,
    pub live: bool,
}

/// A map placement with its fixtures and the currently selected marker.
#[derive(Debug, Clone, Copy)]
pub struct MapSlot {
    pub center: GeoPoint,
    pub bounds: GeoBounds,
    pub units: &'static [AuvUnit],
    pub plumes: &'static [PlumeRegion],
    pub selected: Option<&'static str>,
}

/// A form placement: lifecycle phase plus a snapshot of the field values.
#[derive(Debug, Clone)]
pub struct FormSlot {
    pub phase: Phase,
    pub fields: Vec<(&'static str, String)>,
    /// Status line shown instead of (or above) the fields, when any.
    pub banner: Option<&'static str>,
}

/// One node in the view tree.
#[derive(Debug, Clone)]
pub enum ViewNode {
    /// A top-level page section with a navigation anchor.
    Section {
        anchor: &'static str,
        title: &'static str,
        children: Vec<ViewNode>,
    },
    /// Sub-heading inside a section.
    Heading(String),
    /// Body copy.
    Text(String),
    /// Short status chip. `tone` is a palette token, not a color.
    Badge { label: String, tone: &'static str },
    /// External link.
    Link {
        label: &'static str,
        target: &'static str,
    },
    /// Label/value rows (spec sheets, contact details).
    KeyValue(Vec<(String, String)>),
    /// A percentage readout with its display string.
    Gauge {
        label: String,
        value: String,
        percent: f32,
    },
    /// A selectable card. `id` is the record id the host reports back on
    /// click; `selected` mirrors the section's selection pointer.
    Card {
        id: &'static str,
        title: String,
        selected: bool,
        children: Vec<ViewNode>,
    },
    /// A titled run of cards (a classifier bucket, a filter result).
    Group {
        title: &'static str,
        children: Vec<ViewNode>,
    },
    /// The filter bar above a catalog grid.
    FilterBar {
        tokens: &'static [&'static str],
        active: &'static str,
    },
    Chart(ChartSlot),
    Map(MapSlot),
    Form(FormSlot),
    /// A modal overlay. The host draws it above everything and freezes
    /// background scrolling for as long as it is in the tree.
    Modal {
        title: String,
        children: Vec<ViewNode>,
    },
}

impl ViewNode {
    /// Convenience constructor for a text node.
    pub fn text(s: impl Into<String>) -> Self {
        ViewNode::Text(s.into())
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Section { children, .. }
            | ViewNode::Card { children, .. }
            | ViewNode::Group { children, .. }
            | ViewNode::Modal { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first walk over the node and everything below it.
    pub fn walk(&self, f: &mut impl FnMut(&ViewNode)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Count nodes matching a predicate, self included.
    pub fn count(&self, pred: impl Fn(&ViewNode) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |node| {
            if pred(node) {
                n += 1;
            }
        });
        n
    }

    /// Ids of all cards under this node, tree order.
    pub fn card_ids(&self) -> Vec<&'static str> {
        let mut ids = Vec::new();
        self.walk(&mut |node| {
            if let ViewNode::Card { id, .. } = node {
                ids.push(*id);
            }
        });
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_nested_cards() {
        let tree = ViewNode::Section {
            anchor: "demo",
            title: "Demo",
            children: vec![ViewNode::Group {
                title: "bucket",
                children: vec![
                    ViewNode::Card {
                        id: "a",
                        title: "A".into(),
                        selected: false,
                        children: vec![ViewNode::text("body")],
                    },
                    ViewNode::Card {
                        id: "b",
                        title: "B".into(),
                        selected: true,
                        children: vec![],
                    },
                ],
            }],
        };
        assert_eq!(tree.card_ids(), vec!["a", "b"]);
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Text(_))), 1);
    }
}
