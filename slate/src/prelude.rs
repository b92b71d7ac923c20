//! Convenience re-exports for widget consumers.

pub use crate::input::{InputField, InputKind, InputSize, Variant};
pub use crate::table::{Column, DataTable, Sort, SortDirection, TableRow};
pub use crate::theme::Theme;
pub use crate::value::CellValue;

pub use tuigrid::{Buffer, Event, Key, Modifiers, MouseButton, Rect};
