//! Technology ecosystem grid and product dossier modal.

use pelagic_content::products::{PRODUCTS, Product};
use pelagic_content::record::Record;
use pelagic_state::{Catalog, SelectMode, Selection};

use crate::compose::SectionComposer;
use crate::node::ViewNode;

// The ecosystem grid shows every product; the catalog exists for selection
// containment, so only the sentinel token is declared.
static GRID_TOKENS: &[&str] = &["all"];

/// Product grid with a detail-modal selection pointer. Clicking a card opens
/// its dossier; clicking another card swaps the dossier in place.
#[derive(Debug)]
pub struct EcosystemSection {
    catalog: Catalog<Product>,
    selection: Selection,
}

impl EcosystemSection {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(&PRODUCTS, GRID_TOKENS),
            selection: Selection::new(SelectMode::Replace),
        }
    }

    /// Open the dossier modal for a product.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a product key.
    pub fn select(&mut self, key: &str) {
        self.selection.select(key, &self.catalog);
    }

    /// Close the dossier modal.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&'static Product> {
        self.selection.resolve(&self.catalog)
    }

    fn card(&self, product: &'static Product) -> ViewNode {
        ViewNode::Card {
            id: product.id(),
            title: product.name.to_owned(),
            selected: self.selection.is_selected(product.id()),
            children: vec![
                ViewNode::Badge {
                    label: product.status.label().to_owned(),
                    tone: product.accent.name(),
                },
                ViewNode::text(product.blurb),
            ],
        }
    }

    fn dossier(&self, product: &'static Product) -> ViewNode {
        let mut children = vec![
            ViewNode::Badge {
                label: product.status.label().to_owned(),
                tone: product.accent.name(),
            },
            ViewNode::text(product.description),
            ViewNode::Group {
                title: "Key Features",
                children: product
                    .features
                    .iter()
                    .map(|f| ViewNode::text(*f))
                    .collect(),
            },
            ViewNode::KeyValue(
                product
                    .specs
                    .iter()
                    .map(|m| (m.label.to_owned(), m.value.to_owned()))
                    .collect(),
            ),
        ];
        children.extend(product.gauges.iter().map(|m| ViewNode::Gauge {
            label: m.label.to_owned(),
            value: m.value.to_owned(),
            percent: m.percent.unwrap_or(0.0),
        }));
        children.extend(product.info.iter().map(|section| ViewNode::Group {
            title: section.title,
            children: vec![ViewNode::text(section.body)],
        }));
        children.push(ViewNode::text(format!("Last updated {}", product.updated)));
        ViewNode::Modal {
            title: product.name.to_owned(),
            children,
        }
    }
}

impl Default for EcosystemSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionComposer for EcosystemSection {
    fn anchor(&self) -> &'static str {
        "ecosystem"
    }

    fn title(&self) -> &'static str {
        "Technology Ecosystem"
    }

    fn build(&self) -> ViewNode {
        let mut children: Vec<ViewNode> = self
            .catalog
            .all()
            .iter()
            .map(|p| self.card(p))
            .collect();
        if let Some(product) = self.selected() {
            children.push(self.dossier(product));
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
    fn grid_shows_all_nine_products() {
        let section = EcosystemSection::new();
        let tree = section.build();
        assert_eq!(tree.card_ids().len(), 9);
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Modal { .. })), 0);
    }

    #[test]
    fn selecting_opens_the_dossier() {
        let mut section = EcosystemSection::new();
        section.select("deepseaguard");
        let tree = section.build();
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Modal { .. })), 1);

        // Replace semantics: re-selecting keeps the dossier open.
        section.select("deepseaguard");
        assert!(section.selected().is_some());

        section.clear_selection();
        assert!(section.selected().is_none());
    }

    #[test]
    fn selected_card_is_flagged() {
        let mut section = EcosystemSection::new();
        section.select("sealink");
        let tree = section.build();
        let mut flagged = Vec::new();
        tree.walk(&mut |node| {
            if let ViewNode::Card { id, selected: true, .. } = node {
                flagged.push(*id);
            }
        });
        assert_eq!(flagged, vec!["sealink"]);
    }
}
