pub mod buffer;
pub mod event;
pub mod rect;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use rect::Rect;
pub use terminal::Terminal;
pub use types::{Border, Color, Rgb, TextStyle};
