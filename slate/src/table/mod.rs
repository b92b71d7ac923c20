//! Sortable, selectable data table.
//!
//! The table owns two pieces of interaction state — the active sort and
//! the selected-row key set — and derives the rendered row order from
//! them on every change. Host-supplied rows are never mutated or
//! reordered; the derived order is an index projection.

mod events;
mod render;
mod state;

use std::hash::Hash;

pub use state::DataTable;

use crate::value::CellValue;

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator glyph.
    pub const fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    /// Value for the assistive `aria-sort` contract.
    pub const fn aria(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// The active sort: which field, which way.
///
/// Identity is the field (`data_index`), not the column, so two columns
/// showing the same field share sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub data_index: String,
    pub direction: SortDirection,
}

/// A table column definition.
#[derive(Debug, Clone)]
pub struct Column {
    /// Render identity, unique within the column list.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Record field this column reads and sorts by.
    pub data_index: String,
    /// Whether header activation toggles sorting.
    pub sortable: bool,
    /// Render width in terminal columns.
    pub width: u16,
}

impl Column {
    /// Create a column whose `data_index` defaults to `key`.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
            width: 16,
        }
    }

    /// Read a different record field than the column key.
    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }
}

/// Trait for records displayable as table rows.
///
/// The key must be unique and stable; it is the identity used for
/// selection across re-sorts and row replacements. Field access goes
/// exclusively through [`value`](TableRow::value), keyed by a column's
/// `data_index`; unknown fields return [`CellValue::Missing`].
pub trait TableRow: Clone + 'static {
    /// Unique row identifier.
    type Key: Clone + Eq + Hash + ToString;

    fn key(&self) -> Self::Key;

    fn value(&self, data_index: &str) -> CellValue;
}

/// Width of the leading checkbox column when the table is selectable.
pub(crate) const SELECT_COL_WIDTH: u16 = 8;

pub(crate) const LOADING_TEXT: &str = "Loading data...";
pub(crate) const EMPTY_TEXT: &str = "No data available.";
