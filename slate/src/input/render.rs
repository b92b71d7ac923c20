use tuigrid::text::truncate_to_width;
use tuigrid::{Border, Buffer, Cell, Rect, Rgb, TextStyle};

use crate::theme::Theme;

use super::{InputField, InputKind, Variant};

const MASK_CHAR: char = '•';
const SPINNER_CHAR: char = '⟳';
const EYE_SHOWN: char = '◉';
const EYE_HIDDEN: char = '◎';

impl InputField {
    /// Draw the field into `area` and remember the rects for hit
    /// testing.
    ///
    /// Layout, top to bottom: optional label row, the body (one text
    /// row plus border or underline rule, depending on variant), and an
    /// optional footer carrying the error or helper text.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        self.area = Some(area);
        self.toggle_area = None;
        if area.is_empty() {
            return;
        }

        let bg = theme.background.to_rgb();
        let mut y = area.y;

        if let Some(label) = &self.label {
            let fg = if self.disabled {
                theme.muted.to_rgb()
            } else {
                theme.text.to_rgb()
            };
            buf.set_string(area.x, y, label, fg, bg, TextStyle::new().bold(), area.width);
            y += 1;
        }

        let accent = self.accent_color(theme);
        match self.variant {
            Variant::Outlined => {
                let body = Rect::new(area.x, y, area.width, 3.min(area.bottom() - y));
                buf.draw_border(body, Border::Rounded, accent, bg);
                let inner = body.shrink(1, 1, 1, 1);
                if !inner.is_empty() {
                    let pad = self.size.padding().min(inner.width / 2);
                    self.render_text_row(
                        buf,
                        inner.x + pad,
                        inner.y,
                        inner.width.saturating_sub(pad * 2),
                        theme,
                        bg,
                    );
                }
                y += 3;
            }
            Variant::Filled => {
                let surface = theme.surface.to_rgb();
                buf.fill(Rect::new(area.x, y, area.width, 1), theme.text.to_rgb(), surface);
                let pad = self.size.padding().min(area.width / 2);
                self.render_text_row(
                    buf,
                    area.x + pad,
                    y,
                    area.width.saturating_sub(pad * 2),
                    theme,
                    surface,
                );
                y += 1;
                self.render_rule(buf, area.x, y, area.width, accent, bg);
                y += 1;
            }
            Variant::Ghost => {
                let pad = self.size.padding().min(area.width / 2);
                self.render_text_row(
                    buf,
                    area.x + pad,
                    y,
                    area.width.saturating_sub(pad * 2),
                    theme,
                    bg,
                );
                y += 1;
                self.render_rule(buf, area.x, y, area.width, accent, bg);
                y += 1;
            }
        }

        if let Some(footer) = self.footer_text() {
            if y < area.bottom() {
                let fg = if self.error.is_some() {
                    theme.error.to_rgb()
                } else {
                    theme.muted.to_rgb()
                };
                buf.set_string(area.x, y, footer, fg, bg, TextStyle::new(), area.width);
            }
        }
    }

    /// Border and rule color: error state wins, then focus, then the
    /// resting border color.
    fn accent_color(&self, theme: &Theme) -> Rgb {
        if self.has_error() {
            theme.error.to_rgb()
        } else if self.focused && !self.disabled {
            theme.accent.to_rgb()
        } else {
            theme.border.to_rgb()
        }
    }

    fn render_rule(&self, buf: &mut Buffer, x: u16, y: u16, width: u16, fg: Rgb, bg: Rgb) {
        let rule: String = "─".repeat(width as usize);
        buf.set_string(x, y, &rule, fg, bg, TextStyle::new(), width);
    }

    fn render_text_row(
        &mut self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        width: u16,
        theme: &Theme,
        bg: Rgb,
    ) {
        if width == 0 {
            return;
        }

        // Right-edge indicator: spinner while loading, reveal toggle
        // for password fields otherwise.
        let mut text_width = width;
        let indicator = if self.loading {
            Some((SPINNER_CHAR, false))
        } else if self.kind == InputKind::Password {
            let glyph = if self.show_password { EYE_SHOWN } else { EYE_HIDDEN };
            Some((glyph, true))
        } else {
            None
        };
        if let Some((glyph, clickable)) = indicator {
            if width >= 2 {
                let gx = x + width - 1;
                buf.set_string(
                    gx,
                    y,
                    glyph.encode_utf8(&mut [0; 4]),
                    theme.muted.to_rgb(),
                    bg,
                    TextStyle::new(),
                    1,
                );
                if clickable {
                    self.toggle_area = Some(Rect::new(gx, y, 1, 1));
                }
                text_width = width - 2;
            }
        }
        if text_width == 0 {
            return;
        }

        let text_fg = if self.disabled {
            theme.muted.to_rgb()
        } else {
            theme.text.to_rgb()
        };

        if self.editor.text().is_empty() {
            if let Some(placeholder) = &self.placeholder {
                let shown = truncate_to_width(placeholder, text_width as usize);
                buf.set_string(
                    x,
                    y,
                    &shown,
                    theme.muted.to_rgb(),
                    bg,
                    TextStyle::new().dim(),
                    text_width,
                );
            }
            self.render_cursor(buf, x, y, x, text_width, theme);
            return;
        }

        let display: String = if self.masked() {
            MASK_CHAR.to_string().repeat(self.editor.text().chars().count())
        } else {
            self.editor.text().to_string()
        };
        let shown = truncate_to_width(&display, text_width as usize);
        buf.set_string(x, y, &shown, text_fg, bg, TextStyle::new(), text_width);

        // Selection highlight over the drawn span.
        if let Some((start, end)) = self.editor.selection() {
            let sel_bg = theme.accent.to_rgb();
            let sel_fg = theme.text_inverted.to_rgb();
            for i in start..end.min(text_width as usize) {
                let cx = x + i as u16;
                if let Some(cell) = buf.get(cx, y) {
                    let ch = cell.ch;
                    buf.set(
                        cx,
                        y,
                        Cell {
                            ch,
                            fg: sel_fg,
                            bg: sel_bg,
                            style: TextStyle::new(),
                            wide_continuation: false,
                        },
                    );
                }
            }
        }

        let cursor_x = x + (self.editor.cursor() as u16).min(text_width.saturating_sub(1));
        self.render_cursor(buf, cursor_x, y, x, text_width, theme);
    }

    /// Invert the cell under the cursor when focused and editable.
    fn render_cursor(
        &self,
        buf: &mut Buffer,
        cursor_x: u16,
        y: u16,
        text_x: u16,
        text_width: u16,
        theme: &Theme,
    ) {
        if !self.focused || self.editing_blocked() {
            return;
        }
        if cursor_x < text_x || cursor_x >= text_x + text_width {
            return;
        }
        if let Some(cell) = buf.get(cursor_x, y) {
            let mut inverted = *cell;
            inverted.fg = cell.bg;
            inverted.bg = theme.text.to_rgb();
            buf.set(cursor_x, y, inverted);
        }
    }
}
