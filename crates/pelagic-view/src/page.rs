//! The full page: sections in fixed order plus the CTA overlay.

use std::time::Duration;

use pelagic_state::{FormConfig, GateConfig, PrefStore};

use crate::compose::SectionComposer;
use crate::node::ViewNode;
use crate::sections::{
    ArticlesSection, ComplianceSection, ContactSection, EcosystemSection, FooterSection,
    HeroSection, InsightsSection, MapSection, OverlaySection, TeamSection,
};

/// The complete page model.
///
/// Section order is part of the product: hero, ecosystem, map, insights,
/// compliance, team, articles, contact, footer, with the CTA overlay
/// appended on top whenever its gate is open. Interaction goes through the
/// public section fields; [`Page::tick`] fans the clock out to the two timed
/// sections.
#[derive(Debug)]
pub struct Page {
    pub hero: HeroSection,
    pub ecosystem: EcosystemSection,
    pub map: MapSection,
    pub insights: InsightsSection,
    pub compliance: ComplianceSection,
    pub team: TeamSection,
    pub articles: ArticlesSection,
    pub contact: ContactSection,
    pub footer: FooterSection,
    pub overlay: OverlaySection,
}

impl Page {
    /// Build the page and mount the overlay gate against the pref store.
    pub fn mount(prefs: &dyn PrefStore) -> Self {
        Self::mount_with(prefs, GateConfig::default(), FormConfig::default())
    }

    /// Build with explicit gate and form configuration.
    pub fn mount_with(prefs: &dyn PrefStore, gate: GateConfig, form: FormConfig) -> Self {
        let mut overlay = OverlaySection::new(gate);
        overlay.mount(prefs);
        Self {
            hero: HeroSection,
            ecosystem: EcosystemSection::new(),
            map: MapSection::new(),
            insights: InsightsSection::new(),
            compliance: ComplianceSection,
            team: TeamSection::new(),
            articles: ArticlesSection::new(),
            contact: ContactSection::new(form),
            footer: FooterSection,
            overlay,
        }
    }

    /// Advance every timer on the page. Returns `true` on the tick where
    /// the overlay opens.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let opened = self.overlay.tick(delta);
        self.contact.tick(delta);
        opened
    }

    fn sections(&self) -> [&dyn SectionComposer; 9] {
        [
            &self.hero,
            &self.ecosystem,
            &self.map,
            &self.insights,
            &self.compliance,
            &self.team,
            &self.articles,
            &self.contact,
            &self.footer,
        ]
    }

    /// Navigation anchors in page order.
    pub fn anchors(&self) -> [&'static str; 9] {
        self.sections().map(|s| s.anchor())
    }

    /// Compose the whole page. The overlay, when open, comes last so the
    /// host draws it above the section flow.
    pub fn view(&self) -> Vec<ViewNode> {
        let mut nodes: Vec<ViewNode> = self.sections().iter().map(|s| s.build()).collect();
        if let Some(modal) = self.overlay.build() {
            nodes.push(modal);
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelagic_state::MemoryPrefs;

    #[test]
    fn anchors_follow_page_order() {
        let prefs = MemoryPrefs::new();
        let page = Page::mount(&prefs);
        assert_eq!(
            page.anchors(),
            [
                "hero",
                "ecosystem",
                "map",
                "insights",
                "compliance",
                "team",
                "articles",
                "contact",
                "footer"
            ]
        );
    }

    #[test]
    fn view_has_nine_sections_until_the_overlay_opens() {
        let prefs = MemoryPrefs::new();
        let mut page = Page::mount(&prefs);
        assert_eq!(page.view().len(), 9);

        page.tick(Duration::from_millis(2000));
        assert_eq!(page.view().len(), 10);
        assert!(matches!(page.view()[9], ViewNode::Modal { .. }));
    }
}
