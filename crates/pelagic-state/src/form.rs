//! Contact form state machine.
//!
//! The form walks `Editing -> Submitting -> Submitted -> Editing`: submit
//! flips to `Submitting`, a simulated delay later the submission "lands" and
//! the success banner shows, and after a display window the fields clear and
//! the form is editable again. There is no real network call; the optional
//! `Rejected` outcome exists for hosts that want a retry affordance, and
//! re-enables the form with the fields intact.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::delay::Delay;

/// Closed set of form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    /// All fields, form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Message => "Message",
        }
    }
}

/// Where a submission ends up once the simulated delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitOutcome {
    /// The submission lands; success banner, then auto-reset.
    #[default]
    Accepted,
    /// The submission fails; the form re-enables with fields intact.
    Rejected,
}

/// Form lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
    Failed,
}

/// Timing and outcome knobs.
#[derive(Debug, Clone, Copy)]
pub struct FormConfig {
    /// Simulated round-trip before the submission lands.
    pub submit_delay: Duration,
    /// How long the success banner shows before the form resets.
    pub reset_delay: Duration,
    /// Scripted outcome of the next submission.
    pub outcome: SubmitOutcome,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_secs(2),
            reset_delay: Duration::from_secs(3),
            outcome: SubmitOutcome::Accepted,
        }
    }
}

/// The contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    values: BTreeMap<Field, String>,
    phase: Phase,
    timer: Option<Delay>,
}

impl ContactForm {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            values: BTreeMap::new(),
            phase: Phase::Editing,
            timer: None,
        }
    }

    /// Set a field value. Ignored while a submission is in flight.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if matches!(self.phase, Phase::Submitting | Phase::Submitted) {
            tracing::debug!(?field, "input ignored while submission in flight");
            return;
        }
        self.values.insert(field, value.into());
    }

    /// Current value of a field; empty when never set.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Begin a submission. Returns `false` (and does nothing) unless the
    /// form is editable.
    pub fn submit(&mut self) -> bool {
        if !matches!(self.phase, Phase::Editing | Phase::Failed) {
            return false;
        }
        self.phase = Phase::Submitting;
        self.timer = Some(Delay::new(self.config.submit_delay));
        tracing::debug!("form submission started");
        true
    }

    /// Advance the simulated submission and reset timers.
    pub fn tick(&mut self, delta: Duration) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(delta),
            None => false,
        };
        if !fired {
            return;
        }
        match self.phase {
            Phase::Submitting => match self.config.outcome {
                SubmitOutcome::Accepted => {
                    self.phase = Phase::Submitted;
                    self.timer = Some(Delay::new(self.config.reset_delay));
                    tracing::debug!("form submission landed");
                }
                SubmitOutcome::Rejected => {
                    self.phase = Phase::Failed;
                    self.timer = None;
                    tracing::debug!("form submission failed, retry available");
                }
            },
            Phase::Submitted => {
                self.values.clear();
                self.phase = Phase::Editing;
                self.timer = None;
                tracing::debug!("form reset after display window");
            }
            Phase::Editing | Phase::Failed => {}
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config(outcome: SubmitOutcome) -> FormConfig {
        FormConfig {
            submit_delay: Duration::from_millis(2000),
            reset_delay: Duration::from_millis(3000),
            outcome,
        }
    }

    fn filled_form(outcome: SubmitOutcome) -> ContactForm {
        let mut form = ContactForm::new(fast_config(outcome));
        form.set(Field::Name, "Jane");
        form.set(Field::Email, "j@x.com");
        form.set(Field::Message, "hi");
        form
    }

    #[test]
    fn full_submission_lifecycle() {
        let mut form = filled_form(SubmitOutcome::Accepted);

        assert!(form.submit());
        assert!(form.is_submitting());

        // Simulated round-trip.
        form.tick(Duration::from_millis(1999));
        assert!(form.is_submitting());
        form.tick(Duration::from_millis(1));
        assert!(!form.is_submitting());
        assert!(form.is_submitted());
        assert_eq!(form.get(Field::Name), "Jane");

        // Display window, then auto-reset.
        form.tick(Duration::from_millis(3000));
        assert_eq!(form.phase(), Phase::Editing);
        assert!(!form.is_submitted());
        assert!(form.is_empty());
    }

    #[test]
    fn submit_requires_editable_phase() {
        let mut form = filled_form(SubmitOutcome::Accepted);
        assert!(form.submit());
        assert!(!form.submit());
        form.tick(Duration::from_millis(2000));
        assert!(!form.submit()); // Submitted phase
    }

    #[test]
    fn input_ignored_while_in_flight() {
        let mut form = filled_form(SubmitOutcome::Accepted);
        form.submit();
        form.set(Field::Name, "Mallory");
        assert_eq!(form.get(Field::Name), "Jane");
    }

    #[test]
    fn rejected_submission_keeps_fields_for_retry() {
        let mut form = filled_form(SubmitOutcome::Rejected);
        form.submit();
        form.tick(Duration::from_millis(2000));
        assert_eq!(form.phase(), Phase::Failed);
        assert_eq!(form.get(Field::Message), "hi");

        // Retry is allowed from Failed.
        assert!(form.submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn editing_ticks_are_inert() {
        let mut form = filled_form(SubmitOutcome::Accepted);
        form.tick(Duration::from_secs(60));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.get(Field::Name), "Jane");
    }

    #[test]
    fn unset_field_reads_empty() {
        let form = ContactForm::default();
        assert_eq!(form.get(Field::Company), "");
        assert!(form.is_empty());
    }
}
