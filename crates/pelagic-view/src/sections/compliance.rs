//! Compliance dashboard section.

use pelagic_content::compliance::{ALERTS, Alert, CAPABILITIES, STANDARDS};
use pelagic_content::record::Record;

use crate::compose::SectionComposer;
use crate::node::ViewNode;

/// Standards board, live alert feed, and capability blurbs. Stateless: the
/// fixtures are snapshots and the "live" cadence belongs to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceSection;

fn standard_cards() -> Vec<ViewNode> {
    STANDARDS
        .iter()
        .map(|s| {
            let gauge = &s.score_metric;
            ViewNode::Card {
                id: s.id(),
                title: s.name.to_owned(),
                selected: false,
                children: vec![
                    ViewNode::Badge {
                        label: s.standing.label().to_owned(),
                        tone: s.standing.token(),
                    },
                    ViewNode::Gauge {
                        label: gauge.label.to_owned(),
                        value: gauge.value.to_owned(),
                        percent: gauge.percent.unwrap_or(0.0),
                    },
                    ViewNode::text(format!("Last checked {}", s.last_check)),
                ],
            }
        })
        .collect()
}

fn alert_row(alert: &Alert) -> ViewNode {
    let tone = match alert.kind {
        pelagic_content::compliance::AlertKind::Info => "info",
        pelagic_content::compliance::AlertKind::Warning => "warning",
        pelagic_content::compliance::AlertKind::Critical => "critical",
        pelagic_content::compliance::AlertKind::Success => "success",
    };
    ViewNode::Card {
        id: alert.id,
        title: alert.title.to_owned(),
        selected: false,
        children: vec![
            ViewNode::Badge {
                label: if alert.resolved {
                    "Resolved".to_owned()
                } else {
                    "Active".to_owned()
                },
                tone,
            },
            ViewNode::text(alert.message),
            ViewNode::text(alert.timestamp),
        ],
    }
}

impl SectionComposer for ComplianceSection {
    fn anchor(&self) -> &'static str {
        "compliance"
    }

    fn title(&self) -> &'static str {
        "Compliance & Transparency"
    }

    fn build(&self) -> ViewNode {
        let children = vec![
            ViewNode::Group {
                title: "Monitored Standards",
                children: standard_cards(),
            },
            ViewNode::Group {
                title: "Alert Feed",
                children: ALERTS.iter().map(alert_row).collect(),
            },
            ViewNode::Group {
                title: "Capabilities",
                children: CAPABILITIES
                    .iter()
                    .map(|c| ViewNode::Card {
                        id: c.title,
                        title: c.title.to_owned(),
                        selected: false,
                        children: vec![ViewNode::text(c.blurb)],
                    })
                    .collect(),
            },
        ];
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
    fn every_standard_gets_a_gauge() {
        let tree = ComplianceSection.build();
        assert_eq!(
            tree.count(|n| matches!(n, ViewNode::Gauge { .. })),
            STANDARDS.len()
        );
    }

    #[test]
    fn alert_feed_preserves_order() {
        let tree = ComplianceSection.build();
        let ids = tree.card_ids();
        let alert_ids: Vec<_> = ids
            .iter()
            .copied()
            .filter(|id| ALERTS.iter().any(|a| a.id == *id))
            .collect();
        let expected: Vec<_> = ALERTS.iter().map(|a| a.id).collect();
        assert_eq!(alert_ids, expected);
    }
}
