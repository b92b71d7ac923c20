/// Per-cell text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// Box border variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Double,
    Rounded,
    Thick,
}

impl Border {
    /// Border character set: (top-left, top, top-right, left/right,
    /// bottom-left, bottom-right).
    pub const fn chars(&self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Single => Some(('┌', '─', '┐', '│', '└', '┘')),
            Border::Double => Some(('╔', '═', '╗', '║', '╚', '╝')),
            Border::Rounded => Some(('╭', '─', '╮', '│', '╰', '╯')),
            Border::Thick => Some(('┏', '━', '┓', '┃', '┗', '┛')),
        }
    }
}
