#![forbid(unsafe_code)]

//! Section composition for the Pelagic showcase.
//!
//! A page is a fixed ordered sequence of section composers. Each composer
//! independently combines static copy with zero or more small state machines
//! (catalog filter, selection pointer, visibility gate, form) and emits a
//! [`ViewNode`] tree. The tree is plain data: an external rendering surface
//! draws it, an external charting surface receives the chart feeds, and an
//! external map surface receives the geo fixtures. Nothing feeds back into
//! this layer except user-interaction calls on the composers themselves.

pub mod compose;
pub mod node;
pub mod page;
pub mod sections;

pub use compose::SectionComposer;
pub use node::{ChartSlot, FormSlot, MapSlot, ViewNode};
pub use page::Page;
