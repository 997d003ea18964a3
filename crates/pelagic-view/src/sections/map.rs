//! Interactive operations map.

use pelagic_content::fleet::{AuvUnit, CCZ_BOUNDS, CCZ_CENTER, FLEET, PLUMES};
use pelagic_content::record::Record;
use pelagic_state::{Catalog, SelectMode, Selection};

use crate::compose::SectionComposer;
use crate::node::{MapSlot, ViewNode};

static MARKER_TOKENS: &[&str] = &["all", "active", "maintenance"];

/// The Clarion-Clipperton Zone map with AUV markers and plume overlays.
/// Marker selection toggles: clicking the selected marker closes its
/// telemetry popup.
#[derive(Debug)]
pub struct MapSection {
    catalog: Catalog<AuvUnit>,
    selection: Selection,
}

impl MapSection {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(&FLEET, MARKER_TOKENS),
            selection: Selection::new(SelectMode::Toggle),
        }
    }

    /// Click a marker. Clicking the selected marker deselects it.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a fleet unit id.
    pub fn select(&mut self, id: &str) {
        self.selection.select(id, &self.catalog);
    }

    /// Close the telemetry popup.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&'static AuvUnit> {
        self.selection.resolve(&self.catalog)
    }

    fn popup(&self, unit: &'static AuvUnit) -> ViewNode {
        let mut children = vec![
            ViewNode::Badge {
                label: unit.status.token().to_owned(),
                tone: unit.status.token(),
            },
            ViewNode::text(unit.mission),
        ];
        children.extend(unit.telemetry().iter().map(|m| match m.percent {
            Some(pct) => ViewNode::Gauge {
                label: m.label.to_owned(),
                value: m.value.to_owned(),
                percent: pct,
            },
            None => ViewNode::Text(format!("{}: {}", m.label, m.value)),
        }));
        children.push(ViewNode::text(format!("Updated {}", unit.last_update)));
        ViewNode::Card {
            id: unit.id(),
            title: unit.name.to_owned(),
            selected: true,
            children,
        }
    }
}

impl Default for MapSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionComposer for MapSection {
    fn anchor(&self) -> &'static str {
        "map"
    }

    fn title(&self) -> &'static str {
        "Live Operations Map"
    }

    fn build(&self) -> ViewNode {
        let mut children = vec![ViewNode::Map(MapSlot {
            center: CCZ_CENTER,
            bounds: CCZ_BOUNDS,
            units: &FLEET,
            plumes: &PLUMES,
            selected: self.selection.selected(),
        })];
        if let Some(unit) = self.selected() {
            children.push(self.popup(unit));
        }
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
    fn map_slot_carries_fleet_and_plumes() {
        let tree = MapSection::new().build();
        let mut seen = false;
        tree.walk(&mut |node| {
            if let ViewNode::Map(slot) = node {
                seen = true;
                assert_eq!(slot.units.len(), 4);
                assert_eq!(slot.plumes.len(), 2);
                assert!(slot.selected.is_none());
            }
        });
        assert!(seen);
    }

    #[test]
    fn marker_selection_toggles() {
        let mut section = MapSection::new();
        section.select("auv-002");
        assert_eq!(section.selected().map(|u| u.id), Some("auv-002"));
        assert_eq!(
            section.build().count(|n| matches!(n, ViewNode::Card { .. })),
            1
        );

        // Second click on the same marker closes the popup.
        section.select("auv-002");
        assert!(section.selected().is_none());
    }

    #[test]
    fn maintenance_unit_telemetry_has_no_depth_gauge() {
        let mut section = MapSection::new();
        section.select("auv-003");
        let tree = section.build();
        // Battery and efficiency gauges; depth is a plain spec row.
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Gauge { .. })), 2);
    }
}
