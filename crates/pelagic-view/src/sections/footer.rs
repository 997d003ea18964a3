//! Page footer.

use pelagic_content::copy::{COPYRIGHT, FOOTER_COLUMNS};

use crate::compose::SectionComposer;
use crate::node::ViewNode;

/// Stateless footer: link columns and the copyright line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterSection;

impl SectionComposer for FooterSection {
    fn anchor(&self) -> &'static str {
        "footer"
    }

    fn title(&self) -> &'static str {
        "Triton Mining Co."
    }

    fn build(&self) -> ViewNode {
        let mut children: Vec<ViewNode> = FOOTER_COLUMNS
            .iter()
            .map(|col| ViewNode::Group {
                title: col.title,
                children: col
                    .links
                    .iter()
                    .map(|&(label, target)| ViewNode::Link { label, target })
                    .collect(),
            })
            .collect();
        children.push(ViewNode::text(COPYRIGHT));
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
    fn footer_has_four_link_columns() {
        let tree = FooterSection.build();
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Group { .. })), 4);
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Link { .. })), 16);
    }
}
