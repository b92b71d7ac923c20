use super::Cell;
use crate::rect::Rect;
use crate::text::char_width;
use crate::types::{Border, Rgb, TextStyle};

/// A grid of cells covering the terminal.
///
/// Widgets draw into a `Buffer`; the `Terminal` diffs consecutive
/// buffers and writes only changed cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write a string starting at (x, y), clipped to `max_width` display
    /// columns and the buffer edge. Double-width characters occupy two
    /// cells; the second is marked as a continuation.
    /// Returns the number of columns written.
    pub fn set_string(
        &mut self,
        x: u16,
        y: u16,
        s: &str,
        fg: Rgb,
        bg: Rgb,
        style: TextStyle,
        max_width: u16,
    ) -> u16 {
        if y >= self.height {
            return 0;
        }
        let mut cx = x;
        let end = x.saturating_add(max_width).min(self.width);
        for ch in s.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx + w > end {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    ch,
                    fg,
                    bg,
                    style,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    cx + 1,
                    y,
                    Cell {
                        ch: ' ',
                        fg,
                        bg,
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cx += w;
        }
        cx - x
    }

    /// Fill a rect with spaces in the given colors.
    pub fn fill(&mut self, rect: Rect, fg: Rgb, bg: Rgb) {
        for y in rect.top()..rect.bottom().min(self.height) {
            for x in rect.left()..rect.right().min(self.width) {
                self.set(
                    x,
                    y,
                    Cell {
                        ch: ' ',
                        fg,
                        bg,
                        style: TextStyle::new(),
                        wide_continuation: false,
                    },
                );
            }
        }
    }

    /// Draw a border along the edges of `rect`.
    pub fn draw_border(&mut self, rect: Rect, border: Border, fg: Rgb, bg: Rgb) {
        let Some((tl, top, tr, side, bl, br)) = border.chars() else {
            return;
        };
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let style = TextStyle::new();
        let cell = |ch| Cell {
            ch,
            fg,
            bg,
            style,
            wide_continuation: false,
        };

        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        self.set(rect.x, rect.y, cell(tl));
        self.set(right, rect.y, cell(tr));
        self.set(rect.x, bottom, cell(bl));
        self.set(right, bottom, cell(br));
        for x in rect.x + 1..right {
            self.set(x, rect.y, cell(top));
            self.set(x, bottom, cell(top));
        }
        for y in rect.y + 1..bottom {
            self.set(rect.x, y, cell(side));
            self.set(right, y, cell(side));
        }
    }

    /// Cells that differ from `other`, with their positions.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
