//! Fixed widget color palette.

use tuigrid::Color;

/// Named colors the widgets draw with.
///
/// Colors are authored in Oklch and resolved to sRGB at draw time.
/// There is deliberately no theming system here; hosts that want a
/// different look construct their own `Theme` value.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_inverted: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub border: Color,
    pub header_bg: Color,
    pub row_selected: Color,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            background: Color::oklch(0.15, 0.01, 250.0),
            surface: Color::oklch(0.22, 0.015, 250.0),
            text: Color::oklch(0.92, 0.01, 250.0),
            text_inverted: Color::oklch(0.15, 0.01, 250.0),
            muted: Color::oklch(0.6, 0.01, 250.0),
            accent: Color::oklch(0.7, 0.15, 295.0),
            error: Color::oklch(0.6, 0.2, 25.0),
            border: Color::oklch(0.45, 0.01, 250.0),
            header_bg: Color::oklch(0.3, 0.02, 250.0),
            row_selected: Color::oklch(0.5, 0.12, 295.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
