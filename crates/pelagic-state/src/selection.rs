//! Selection pointer.
//!
//! A nullable reference to "the currently selected record", driving a detail
//! panel or modal. Sections differ on what clicking the already-selected
//! record does - some close the panel, some keep it - so the semantics are a
//! per-section [`SelectMode`], not a universal contract.

use crate::catalog::Catalog;
use pelagic_content::record::Record;

/// What selecting the already-selected record does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Re-selecting the current record is a no-op; the panel stays open.
    Replace,
    /// Re-selecting the current record clears the selection (closes the
    /// panel).
    Toggle,
}

/// Nullable pointer to the selected record id.
#[derive(Debug, Clone)]
pub struct Selection {
    selected: Option<&'static str>,
    mode: SelectMode,
}

impl Selection {
    pub fn new(mode: SelectMode) -> Self {
        Self {
            selected: None,
            mode,
        }
    }

    /// Select a record by id.
    ///
    /// # Panics
    ///
    /// Panics if the id is not present in the catalog - selecting an
    /// out-of-catalog record is a programmer error.
    pub fn select<R: Record + 'static>(&mut self, id: &str, catalog: &Catalog<R>) {
        let record = catalog
            .get(id)
            .unwrap_or_else(|| panic!("selected record `{id}` is not in the catalog"));
        match self.mode {
            SelectMode::Toggle if self.selected == Some(record.id()) => {
                self.selected = None;
            }
            _ => self.selected = Some(record.id()),
        }
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected record id, if any.
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Whether the given id is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.is_some_and(|s| s == id)
    }

    /// Resolve the selected record against its catalog.
    pub fn resolve<'c, R: Record + 'static>(&self, catalog: &'c Catalog<R>) -> Option<&'static R> {
        self.selected.and_then(|id| catalog.get(id))
    }
}
