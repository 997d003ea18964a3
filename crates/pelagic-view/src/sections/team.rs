//! Team roster grid: expertise filter, role grouping, member modal.

use pelagic_content::classify::Classifier;
use pelagic_content::record::Record;
use pelagic_content::team::{FILTER_TOKENS, TEAM, TeamMember, stats};
use pelagic_state::{Catalog, SelectMode, Selection};

use crate::compose::SectionComposer;
use crate::node::ViewNode;

/// The team grid. Members are filtered by expertise token, then grouped
/// into role buckets by the first-match classifier; group order follows the
/// rule table, with the fallback bucket last.
#[derive(Debug)]
pub struct TeamSection {
    catalog: Catalog<TeamMember>,
    classifier: Classifier,
    selection: Selection,
}

impl TeamSection {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(&TEAM, FILTER_TOKENS),
            classifier: Classifier::team(),
            selection: Selection::new(SelectMode::Replace),
        }
    }

    /// Switch the expertise filter.
    ///
    /// # Panics
    ///
    /// Panics on a token outside the declared filter set.
    pub fn set_filter(&mut self, token: &str) {
        self.catalog.set_filter(token);
    }

    pub fn active_filter(&self) -> &'static str {
        self.catalog.active_filter()
    }

    /// Open the profile modal for a member.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a roster id.
    pub fn select(&mut self, id: &str) {
        self.selection.select(id, &self.catalog);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&'static TeamMember> {
        self.selection.resolve(&self.catalog)
    }

    fn member_card(&self, member: &'static TeamMember) -> ViewNode {
        let mut children = vec![ViewNode::Badge {
            label: member.role.to_owned(),
            tone: "role",
        }];
        children.extend(member.expertise.iter().map(|tag| ViewNode::Badge {
            label: (*tag).to_owned(),
            tone: "expertise",
        }));
        ViewNode::Card {
            id: member.id(),
            title: member.name.to_owned(),
            selected: self.selection.is_selected(member.id()),
            children,
        }
    }

    fn profile(&self, member: &'static TeamMember) -> ViewNode {
        let mut children = vec![
            ViewNode::Heading(member.role.to_owned()),
            ViewNode::text(member.bio),
            ViewNode::KeyValue(vec![(
                "Country".to_owned(),
                member.country.to_owned(),
            )]),
        ];
        for (label, link) in [
            ("GitHub", member.links.github),
            ("LinkedIn", member.links.linkedin),
            ("Website", member.links.website),
        ] {
            if let Some(target) = link {
                children.push(ViewNode::Link { label, target });
            }
        }
        ViewNode::Modal {
            title: member.name.to_owned(),
            children,
        }
    }
}

impl Default for TeamSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionComposer for TeamSection {
    fn anchor(&self) -> &'static str {
        "team"
    }

    fn title(&self) -> &'static str {
        "Meet the Team"
    }

    fn build(&self) -> ViewNode {
        let team_stats = stats();
        let mut children = vec![
            ViewNode::FilterBar {
                tokens: self.catalog.tokens(),
                active: self.catalog.active_filter(),
            },
            ViewNode::KeyValue(vec![
                ("Members".to_owned(), team_stats.members.to_string()),
                ("Countries".to_owned(), team_stats.countries.to_string()),
                (
                    "Expertise Areas".to_owned(),
                    team_stats.expertise_areas.to_string(),
                ),
            ]),
        ];
        children.extend(self.catalog.grouped(&self.classifier).into_iter().map(
            |(bucket, members)| ViewNode::Group {
                title: bucket,
                children: members.into_iter().map(|m| self.member_card(m)).collect(),
            },
        ));
        if let Some(member) = self.selected() {
            children.push(self.profile(member));
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
    fn default_filter_shows_full_roster() {
        let tree = TeamSection::new().build();
        assert_eq!(tree.card_ids().len(), TEAM.len());
    }

    #[test]
    fn groups_follow_rule_table_order() {
        let section = TeamSection::new();
        let tree = section.build();
        let mut groups = Vec::new();
        tree.walk(&mut |node| {
            if let ViewNode::Group { title, .. } = node {
                groups.push(*title);
            }
        });
        let expected: Vec<_> = Classifier::team()
            .buckets()
            .filter(|b| groups.contains(b))
            .collect();
        assert_eq!(groups, expected);
    }

    #[test]
    fn filter_narrows_the_grid() {
        let mut section = TeamSection::new();
        section.set_filter("marine");
        let tree = section.build();
        let shown = tree.card_ids();
        assert!(!shown.is_empty());
        assert!(shown.len() < TEAM.len());
        for id in shown {
            let member = TEAM.iter().find(|m| m.id == id).unwrap();
            assert!(member.matches("marine"));
        }
    }

    #[test]
    fn profile_modal_links_only_existing_profiles() {
        let mut section = TeamSection::new();
        section.select("r-ellison");
        let tree = section.build();
        // Rachel has LinkedIn and a website, no GitHub.
        let mut labels = Vec::new();
        tree.walk(&mut |node| {
            if let ViewNode::Link { label, .. } = node {
                labels.push(*label);
            }
        });
        assert_eq!(labels, vec!["LinkedIn", "Website"]);
    }

    #[test]
    fn filter_does_not_invalidate_selection() {
        // Selection points into the full catalog; narrowing the grid keeps
        // the modal open.
        let mut section = TeamSection::new();
        section.select("r-ellison");
        section.set_filter("robotics");
        assert!(section.selected().is_some());
    }
}
