#![forbid(unsafe_code)]

//! Content fixtures for the Pelagic showcase site.
//!
//! Everything in this crate is compiled-in, immutable `&'static` data: the
//! product dossiers, article index, team roster, compliance fixtures, AUV
//! fleet, chart feeds, and page copy. Records live for the whole session and
//! are never mutated; the state layer (`pelagic-state`) builds filterable
//! views over them without copying.
//!
//! # Key types
//!
//! - [`Record`] - uniform read-only interface over every catalog record
//! - [`Classifier`] - ordered first-match role classifier
//! - [`Accent`] - closed set of named accent variants
//! - [`ChartFeed`] - static numeric series for the dashboard surface

pub mod accent;
pub mod articles;
pub mod classify;
pub mod compliance;
pub mod copy;
pub mod fleet;
pub mod products;
pub mod record;
pub mod series;
pub mod team;

pub use accent::Accent;
pub use classify::{Classifier, Rule};
pub use record::{Metric, Record};
pub use series::{ChartFeed, ChartKind, Series, SeriesRole};
