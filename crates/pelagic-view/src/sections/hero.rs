//! Hero banner.

use pelagic_content::copy::HERO;

use crate::compose::SectionComposer;
use crate::node::ViewNode;

/// Stateless hero banner built from the static copy fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroSection;

impl SectionComposer for HeroSection {
    fn anchor(&self) -> &'static str {
        "hero"
    }

    fn title(&self) -> &'static str {
        HERO.headline
    }

    fn build(&self) -> ViewNode {
        let mut children = vec![
            ViewNode::Heading(HERO.subheadline.to_owned()),
            ViewNode::text(HERO.lede),
        ];
        children.extend(HERO.pillars.iter().map(|p| ViewNode::Badge {
            label: (*p).to_owned(),
            tone: "pillar",
        }));
        children.push(ViewNode::KeyValue(
            HERO.stats
                .iter()
                .map(|(value, label)| ((*label).to_owned(), (*value).to_owned()))
                .collect(),
        ));
        ViewNode::Section {
            anchor: self.anchor(),
            title: HERO.headline,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_carries_pillars_and_stats() {
        let tree = HeroSection.build();
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Badge { .. })), 4);
        assert_eq!(tree.count(|n| matches!(n, ViewNode::KeyValue(_))), 1);
    }
}
