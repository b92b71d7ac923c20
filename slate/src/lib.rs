//! Terminal UI widgets: a sortable/selectable data table and a labeled
//! text input, rendering into a [`tuigrid::Buffer`].

pub mod input;
pub mod prelude;
pub mod selection;
pub mod table;
pub mod theme;
pub mod value;

pub use input::{InputField, InputKind, InputSize, Variant};
pub use selection::Selection;
pub use table::{Column, DataTable, Sort, SortDirection, TableRow};
pub use theme::Theme;
pub use value::CellValue;
