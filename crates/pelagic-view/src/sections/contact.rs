//! Contact section: the form, contact channels, and quick actions.

use std::time::Duration;

use pelagic_content::copy::{CONTACT_CHANNELS, QUICK_ACTIONS};
use pelagic_state::{ContactForm, Field, FormConfig, Phase};

use crate::compose::SectionComposer;
use crate::node::{FormSlot, ViewNode};

/// Banner shown while the success phase holds.
const SENT_BANNER: &str = "Message sent successfully! We'll get back to you soon.";
/// Banner shown after a rejected submission.
const FAILED_BANNER: &str = "Something went wrong. Please try again.";

/// The contact form plus the static channel and quick-action cards. The only
/// timed state on the page besides the overlay gate.
#[derive(Debug)]
pub struct ContactSection {
    form: ContactForm,
}

impl ContactSection {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: ContactForm::new(config),
        }
    }

    /// Type into a field. Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Press the submit button. Returns `false` when the form is not
    /// editable.
    pub fn submit(&mut self) -> bool {
        self.form.submit()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    fn banner(&self) -> Option<&'static str> {
        match self.form.phase() {
            Phase::Submitted => Some(SENT_BANNER),
            Phase::Failed => Some(FAILED_BANNER),
            Phase::Editing | Phase::Submitting => None,
        }
    }
}

impl Default for ContactSection {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl SectionComposer for ContactSection {
    fn anchor(&self) -> &'static str {
        "contact"
    }

    fn title(&self) -> &'static str {
        "Get in Touch"
    }

    fn build(&self) -> ViewNode {
        let mut children = vec![ViewNode::Form(FormSlot {
            phase: self.form.phase(),
            fields: Field::ALL
                .iter()
                .map(|f| (f.label(), self.form.get(*f).to_owned()))
                .collect(),
            banner: self.banner(),
        })];
        children.push(ViewNode::Group {
            title: "Contact Channels",
            children: CONTACT_CHANNELS
                .iter()
                .map(|ch| ViewNode::Card {
                    id: ch.title,
                    title: ch.title.to_owned(),
                    selected: false,
                    children: ch
                        .lines
                        .iter()
                        .map(|line| ViewNode::text(*line))
                        .chain(std::iter::once(ViewNode::Link {
                            label: ch.title,
                            target: ch.action,
                        }))
                        .collect(),
                })
                .collect(),
        });
        children.push(ViewNode::Group {
            title: "Quick Actions",
            children: QUICK_ACTIONS
                .iter()
                .map(|qa| ViewNode::Card {
                    id: qa.title,
                    title: qa.title.to_owned(),
                    selected: false,
                    children: vec![
                        ViewNode::text(qa.blurb),
                        ViewNode::Link {
                            label: qa.title,
                            target: qa.action,
                        },
                    ],
                })
                .collect(),
        });
        ViewNode::Section {
            anchor: self.anchor(),
            title: self.title(),
            children,
        }
    }

    fn tick(&mut self, delta: Duration) {
        self.form.tick(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSection {
        let mut section = ContactSection::default();
        section.set_field(Field::Name, "Jane");
        section.set_field(Field::Email, "j@x.com");
        section.set_field(Field::Message, "hi");
        section
    }

    fn form_slot(tree: &ViewNode) -> FormSlot {
        let mut slot = None;
        tree.walk(&mut |node| {
            if let ViewNode::Form(s) = node {
                slot = Some(s.clone());
            }
        });
        slot.unwrap()
    }

    #[test]
    fn editing_slot_has_no_banner() {
        let section = filled();
        let slot = form_slot(&section.build());
        assert_eq!(slot.phase, Phase::Editing);
        assert!(slot.banner.is_none());
        assert_eq!(slot.fields.len(), 4);
    }

    #[test]
    fn submit_lands_and_resets_through_ticks() {
        let mut section = filled();
        assert!(section.submit());

        section.tick(Duration::from_millis(2000));
        let slot = form_slot(&section.build());
        assert_eq!(slot.phase, Phase::Submitted);
        assert_eq!(slot.banner, Some(SENT_BANNER));

        section.tick(Duration::from_millis(3000));
        let slot = form_slot(&section.build());
        assert_eq!(slot.phase, Phase::Editing);
        assert!(slot.fields.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn channels_and_actions_render_as_cards() {
        let tree = ContactSection::default().build();
        // 4 channels + 3 quick actions.
        assert_eq!(tree.count(|n| matches!(n, ViewNode::Card { .. })), 7);
    }
}
