//! Labeled single-line text input.
//!
//! The field owns its text and cursor state and reports edits through
//! `on_change`/`on_submit` callbacks. Password fields keep a local
//! reveal flag toggled by clicking the indicator at the right edge of
//! the field.

mod editor;
mod events;
mod render;

use tuigrid::Rect;

pub use editor::{EditResult, TextEditor};

/// Visual treatment of the field body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Solid surface background with an underline rule.
    #[default]
    Filled,
    /// Rounded box border.
    Outlined,
    /// Underline rule only.
    Ghost,
}

/// Horizontal padding preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    pub(super) const fn padding(&self) -> u16 {
        match self {
            InputSize::Sm => 1,
            InputSize::Md => 2,
            InputSize::Lg => 3,
        }
    }
}

/// What the field accepts and how it echoes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Masked echo with a reveal toggle.
    Password,
}

type TextFn = Box<dyn FnMut(&str)>;

/// A labeled text input with helper and error lines.
pub struct InputField {
    pub(super) label: Option<String>,
    pub(super) placeholder: Option<String>,
    pub(super) helper_text: Option<String>,
    pub(super) error: Option<String>,
    pub(super) disabled: bool,
    pub(super) invalid: bool,
    pub(super) loading: bool,
    pub(super) variant: Variant,
    pub(super) size: InputSize,
    pub(super) kind: InputKind,
    /// Local reveal state for password fields.
    pub(super) show_password: bool,
    pub(super) editor: TextEditor,
    pub(super) focused: bool,
    pub(super) on_change: Option<TextFn>,
    pub(super) on_submit: Option<TextFn>,
    /// Screen rect from the last render, for hit testing.
    pub(super) area: Option<Rect>,
    /// Rect of the password reveal toggle, when drawn.
    pub(super) toggle_area: Option<Rect>,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            helper_text: None,
            error: None,
            disabled: false,
            invalid: false,
            loading: false,
            variant: Variant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            show_password: false,
            editor: TextEditor::new(""),
            focused: false,
            on_change: None,
            on_submit: None,
            area: None,
            toggle_area: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.editor = TextEditor::new(value);
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_submit(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------
    // Runtime state
    // -------------------------------------------------------------------

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.editor = TextEditor::new(text);
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Editing is blocked while disabled or loading.
    pub(super) fn editing_blocked(&self) -> bool {
        self.disabled || self.loading
    }

    /// Whether typed text is echoed as mask characters.
    pub fn masked(&self) -> bool {
        self.kind == InputKind::Password && !self.show_password
    }

    /// The field is drawn in the error color when an error message is
    /// set or it is flagged invalid.
    pub fn has_error(&self) -> bool {
        self.error.is_some() || self.invalid
    }

    /// Footer line under the field: the error message wins over the
    /// helper text.
    pub fn footer_text(&self) -> Option<&str> {
        self.error.as_deref().or(self.helper_text.as_deref())
    }

    /// Screen rect from the last render, if the field has been drawn.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Rect of the password reveal toggle, when one was drawn.
    pub fn toggle_area(&self) -> Option<Rect> {
        self.toggle_area
    }

    /// Rows this field occupies: optional label, the body, optional
    /// footer. Lets hosts stack fields without knowing the variant.
    pub fn height(&self) -> u16 {
        let body = match self.variant {
            Variant::Outlined => 3,
            Variant::Filled | Variant::Ghost => 2,
        };
        let label = u16::from(self.label.is_some());
        let footer = u16::from(self.footer_text().is_some());
        label + body + footer
    }
}
