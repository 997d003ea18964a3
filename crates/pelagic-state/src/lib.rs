#![forbid(unsafe_code)]

//! View-state machines for the Pelagic showcase.
//!
//! Every interactive page section composes the same few primitives:
//!
//! - [`Delay`] - a one-shot, tick-driven deferred transition
//! - [`VisibilityGate`] - the Closed/Open overlay state machine with a
//!   persisted "seen" marker and scoped scroll locking
//! - [`Catalog`] - an ordered, immutable record list with a single active
//!   filter and a grouped-by-category view
//! - [`Selection`] - a nullable pointer to the currently selected record
//! - [`ContactForm`] - the simulated-submission form machine
//! - [`PrefStore`] - the injected preference service backing the gate's
//!   persisted markers
//!
//! # Concurrency model
//!
//! Single-threaded and cooperative: all mutation happens in user-interaction
//! callbacks or through `tick(delta)` calls driven by the host's frame clock.
//! Nothing here spawns threads or blocks; dropping an owner cancels any
//! pending deferred transition for free.

pub mod catalog;
pub mod delay;
pub mod form;
pub mod gate;
pub mod prefs;
pub mod selection;

pub use catalog::Catalog;
pub use delay::Delay;
pub use form::{ContactForm, Field, FormConfig, Phase, SubmitOutcome};
pub use gate::{GateConfig, GateState, ScrollLock, VisibilityGate};
pub use prefs::{FilePrefs, MemoryPrefs, PrefStore};
pub use selection::{SelectMode, Selection};
