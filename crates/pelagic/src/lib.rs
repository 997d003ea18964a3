#![forbid(unsafe_code)]

//! Pelagic public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Content re-exports ----------------------------------------------------

pub use pelagic_content::accent::Accent;
pub use pelagic_content::classify::Classifier;
pub use pelagic_content::record::{ALL_TOKEN, Metric, Record};
pub use pelagic_content::series::{ChartFeed, ChartKind, Series, SeriesRole};

// --- State re-exports ------------------------------------------------------

pub use pelagic_state::{
    Catalog, ContactForm, Delay, Field, FilePrefs, FormConfig, GateConfig, GateState, MemoryPrefs,
    Phase, PrefStore, ScrollLock, SelectMode, Selection, SubmitOutcome, VisibilityGate,
};

// --- View re-exports -------------------------------------------------------

pub use pelagic_view::{ChartSlot, FormSlot, MapSlot, Page, SectionComposer, ViewNode};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Catalog, ContactForm, Field, FormConfig, GateConfig, MemoryPrefs, Page, Phase, PrefStore,
        Record, SectionComposer, Selection, ViewNode,
    };

    pub use crate::{content, state, view};
}

pub use pelagic_content as content;
pub use pelagic_state as state;
pub use pelagic_view as view;
