use tuigrid::Rect;

use crate::selection::Selection;
use crate::value::CellValue;

use super::{Column, Sort, SortDirection, TableRow, EMPTY_TEXT, LOADING_TEXT};

/// Callback invoked with the materialized selected records.
type RowSelectFn<T> = Box<dyn FnMut(Vec<T>)>;

/// A sortable, selectable data table.
///
/// Rows and columns are host configuration and may be replaced at any
/// time; sort and selection are interaction state owned by this
/// instance and survive such replacements. The rendered row order is a
/// derived index projection, rebuilt whenever rows or sort change.
pub struct DataTable<T: TableRow> {
    pub(super) columns: Vec<Column>,
    pub(super) rows: Vec<T>,
    pub(super) sort: Option<Sort>,
    pub(super) selection: Selection<T::Key>,
    pub(super) loading: bool,
    pub(super) selectable: bool,
    pub(super) on_row_select: Option<RowSelectFn<T>>,
    /// Derived row order (indices into `rows`).
    pub(super) view: Vec<usize>,
    /// Screen rect from the last render, for hit testing.
    pub(super) area: Option<Rect>,
}

impl<T: TableRow> DataTable<T> {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            sort: None,
            selection: Selection::new(),
            loading: false,
            selectable: false,
            on_row_select: None,
            view: Vec::new(),
            area: None,
        }
    }

    pub fn with_rows(columns: Vec<Column>, rows: Vec<T>) -> Self {
        let mut table = Self::new(columns);
        table.set_rows(rows);
        table
    }

    /// Render a leading checkbox column and accept selection toggles.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Called with the selected records (in input order) after every
    /// selection change.
    pub fn on_row_select(mut self, callback: impl FnMut(Vec<T>) + 'static) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------
    // Host configuration
    // -------------------------------------------------------------------

    /// Replace the rows. Sort and selection state are preserved;
    /// selection keys that no longer match any row are kept untouched
    /// rather than pruned, so a host-side row swap never silently edits
    /// the user's selection.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.rebuild_view();
    }

    /// Replace the column definitions. The active sort is keyed by
    /// field, not column, so it survives column changes.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    // -------------------------------------------------------------------
    // Status region
    // -------------------------------------------------------------------

    /// Placeholder text currently replacing the table, if any.
    /// Loading wins over empty.
    pub fn status_text(&self) -> Option<&'static str> {
        if self.loading {
            Some(LOADING_TEXT)
        } else if self.rows.is_empty() {
            Some(EMPTY_TEXT)
        } else {
            None
        }
    }

    // -------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Sort direction a column header should expose to assistive
    /// technology: the active direction for the sorting column, `None`
    /// ("none") for every other column.
    pub fn aria_sort(&self, column_key: &str) -> Option<SortDirection> {
        let col = self.columns.iter().find(|c| c.key == column_key)?;
        match &self.sort {
            Some(sort) if sort.data_index == col.data_index => Some(sort.direction),
            _ => None,
        }
    }

    /// Toggle sorting for the column with the given key.
    ///
    /// First activation of a field sorts ascending; re-activating the
    /// same field flips direction. There is no third "unsorted" state:
    /// once sorted, the table toggles between the two directions.
    /// Activating a non-sortable (or unknown) column is a no-op.
    pub fn toggle_sort(&mut self, column_key: &str) -> Option<&Sort> {
        let col = self
            .columns
            .iter()
            .find(|c| c.key == column_key && c.sortable)?;

        let direction = match &self.sort {
            Some(sort)
                if sort.data_index == col.data_index
                    && sort.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };

        let data_index = col.data_index.clone();
        log::debug!("sort toggled: {} {}", data_index, direction.aria());
        self.sort = Some(Sort {
            data_index,
            direction,
        });
        self.rebuild_view();
        self.sort.as_ref()
    }

    /// Rebuild the derived row order from rows + sort state.
    ///
    /// Pure and idempotent: no sort means input order, otherwise a
    /// stable sort over an index vector. `rows` itself is never
    /// reordered.
    pub(super) fn rebuild_view(&mut self) {
        self.view = (0..self.rows.len()).collect();
        if let Some(sort) = &self.sort {
            let rows = &self.rows;
            let data_index = sort.data_index.as_str();
            let descending = sort.direction == SortDirection::Descending;
            self.view.sort_by(|&a, &b| {
                let ordering = rows[a].value(data_index).compare(&rows[b].value(data_index));
                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
    }

    /// The derived row order as indices into [`rows`](Self::rows).
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    /// Rows in derived (rendered) order.
    pub fn view_rows(&self) -> impl Iterator<Item = &T> {
        self.view.iter().map(move |&i| &self.rows[i])
    }

    // -------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------

    /// Toggle selection of the row with the given key, then report the
    /// full selection to the `on_row_select` callback.
    ///
    /// The callback payload is materialized from the rows in input
    /// order, independent of the current sort.
    pub fn toggle_select(&mut self, key: T::Key) {
        let selected = self.selection.toggle(key.clone());
        let id = key.to_string();
        log::debug!("row {id} {}", if selected { "selected" } else { "deselected" });
        if let Some(callback) = self.on_row_select.as_mut() {
            let selected_rows: Vec<T> = self
                .rows
                .iter()
                .filter(|row| self.selection.is_selected(&row.key()))
                .cloned()
                .collect();
            callback(selected_rows);
        }
    }

    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.selection.is_selected(key)
    }

    /// Selected records in input order. Stale keys with no matching row
    /// contribute nothing.
    pub fn selected_rows(&self) -> Vec<T> {
        self.rows
            .iter()
            .filter(|row| self.selection.is_selected(&row.key()))
            .cloned()
            .collect()
    }

    pub fn selection(&self) -> &Selection<T::Key> {
        &self.selection
    }

    /// Accessible label for a row's selection checkbox.
    pub fn select_label(key: &T::Key) -> String {
        let id = key.to_string();
        format!("Select row {id}")
    }

    /// Screen rect from the last render, if the table has been drawn.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Value a given column shows for a given row.
    pub fn cell(&self, row: &T, column: &Column) -> CellValue {
        row.value(&column.data_index)
    }
}
