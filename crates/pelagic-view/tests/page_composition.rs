//! Page-level composition scenarios.

use std::time::Duration;

use pelagic_state::{Field, FormConfig, GateConfig, MemoryPrefs, Phase, SubmitOutcome};
use pelagic_view::{Page, ViewNode};

fn section_anchors(nodes: &[ViewNode]) -> Vec<&'static str> {
    nodes
        .iter()
        .filter_map(|n| match n {
            ViewNode::Section { anchor, .. } => Some(*anchor),
            _ => None,
        })
        .collect()
}

#[test]
fn sections_compose_in_fixed_order() {
    let prefs = MemoryPrefs::new();
    let page = Page::mount(&prefs);
    assert_eq!(
        section_anchors(&page.view()),
        vec![
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
fn overlay_opens_at_the_configured_delay() {
    let prefs = MemoryPrefs::new();
    let mut page = Page::mount(&prefs);

    assert!(!page.tick(Duration::from_millis(999)));
    assert!(!page.view().iter().any(|n| matches!(n, ViewNode::Modal { .. })));

    // 999ms + 1002ms crosses the 2s mark.
    assert!(page.tick(Duration::from_millis(1002)));
    assert!(page.view().iter().any(|n| matches!(n, ViewNode::Modal { .. })));
}

#[test]
fn dismissed_overlay_stays_closed_on_remount() {
    let mut prefs = MemoryPrefs::new();
    let mut page = Page::mount(&prefs);
    page.tick(Duration::from_secs(2));
    page.overlay.dismiss(&mut prefs);
    drop(page);

    let mut revisit = Page::mount(&prefs);
    assert!(!revisit.tick(Duration::from_secs(60)));
    assert_eq!(revisit.view().len(), 9);
}

#[test]
fn suppression_off_reopens_for_dismissed_visitors() {
    let mut prefs = MemoryPrefs::new();
    let mut first = Page::mount(&prefs);
    first.tick(Duration::from_secs(2));
    first.overlay.dismiss(&mut prefs);
    drop(first);

    let gate = GateConfig {
        suppress_on_dismiss: false,
        ..GateConfig::default()
    };
    let mut revisit = Page::mount_with(&prefs, gate, FormConfig::default());
    assert!(revisit.tick(Duration::from_secs(2)));
}

#[test]
fn form_walks_its_lifecycle_through_page_ticks() {
    let prefs = MemoryPrefs::new();
    let mut page = Page::mount(&prefs);

    page.contact.set_field(Field::Name, "Jane");
    page.contact.set_field(Field::Email, "j@x.com");
    page.contact.set_field(Field::Message, "hi");
    assert!(page.contact.submit());
    assert_eq!(page.contact.form().phase(), Phase::Submitting);

    page.tick(Duration::from_secs(2));
    assert_eq!(page.contact.form().phase(), Phase::Submitted);
    assert_eq!(page.contact.form().get(Field::Name), "Jane");

    page.tick(Duration::from_secs(3));
    assert_eq!(page.contact.form().phase(), Phase::Editing);
    assert!(page.contact.form().is_empty());
}

#[test]
fn rejected_submission_surfaces_retry_banner() {
    let prefs = MemoryPrefs::new();
    let form = FormConfig {
        outcome: SubmitOutcome::Rejected,
        ..FormConfig::default()
    };
    let mut page = Page::mount_with(&prefs, GateConfig::default(), form);

    page.contact.set_field(Field::Message, "hi");
    page.contact.submit();
    page.tick(Duration::from_secs(2));
    assert_eq!(page.contact.form().phase(), Phase::Failed);
    assert_eq!(page.contact.form().get(Field::Message), "hi");
    assert!(page.contact.submit());
}

#[test]
fn section_interactions_are_independent() {
    let prefs = MemoryPrefs::new();
    let mut page = Page::mount(&prefs);

    page.team.set_filter("ai");
    page.articles.set_filter("sustainability");
    page.ecosystem.select("crabbots");
    page.map.select("auv-001");

    assert_eq!(page.team.active_filter(), "ai");
    assert_eq!(page.articles.active_filter(), "sustainability");
    assert_eq!(page.ecosystem.selected().map(|p| p.key), Some("crabbots"));
    assert_eq!(page.map.selected().map(|u| u.id), Some("auv-001"));

    // Clearing one selection leaves the others alone.
    page.ecosystem.clear_selection();
    assert!(page.ecosystem.selected().is_none());
    assert_eq!(page.map.selected().map(|u| u.id), Some("auv-001"));
}

#[test]
fn view_is_stable_between_interactions() {
    let prefs = MemoryPrefs::new();
    let page = Page::mount(&prefs);
    let first = page.view();
    let second = page.view();
    assert_eq!(section_anchors(&first), section_anchors(&second));
    assert_eq!(first.len(), second.len());
}
