use tuigrid::text::{center_offset, display_width, pad_to_width};
use tuigrid::{Buffer, Rect, TextStyle};

use crate::theme::Theme;

use super::state::DataTable;
use super::{TableRow, SELECT_COL_WIDTH};

impl<T: TableRow> DataTable<T> {
    /// Draw the table into `area` and remember the rect for hit
    /// testing.
    ///
    /// Loading and empty states replace the whole table with a centered
    /// status line; no header is drawn for them.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        self.area = Some(area);
        if area.is_empty() {
            return;
        }

        let bg = theme.background.to_rgb();
        let text = theme.text.to_rgb();
        buf.fill(area, text, bg);

        if let Some(status) = self.status_text() {
            let x = area.x + center_offset(display_width(status), area.width as usize) as u16;
            let y = area.y + area.height / 2;
            buf.set_string(x, y, status, theme.muted.to_rgb(), bg, TextStyle::new(), area.width);
            return;
        }

        self.render_header(buf, area, theme);
        self.render_rows(buf, area, theme);
    }

    fn render_header(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let header_bg = theme.header_bg.to_rgb();
        let text = theme.text.to_rgb();
        let style = TextStyle::new().bold();

        let header = Rect::new(area.x, area.y, area.width, 1);
        buf.fill(header, text, header_bg);

        let mut x = area.x;
        if self.selectable {
            buf.set_string(x + 1, area.y, "Select", text, header_bg, style, SELECT_COL_WIDTH);
            x += SELECT_COL_WIDTH;
        }

        for col in &self.columns {
            if x >= area.right() {
                break;
            }
            let mut title = col.title.clone();
            if let Some(direction) = self.aria_sort(&col.key) {
                title.push(' ');
                title.push_str(direction.indicator());
            }
            let max = col.width.min(area.right() - x).saturating_sub(1);
            buf.set_string(x + 1, area.y, &title, text, header_bg, style, max);
            x += col.width;
        }
    }

    fn render_rows(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let bg = theme.background.to_rgb();
        let plain = TextStyle::new();

        for (offset, &row_idx) in self.view.iter().enumerate() {
            let y = area.y + 1 + offset as u16;
            if y >= area.bottom() {
                break;
            }
            let row = &self.rows[row_idx];
            let selected = self.selection.is_selected(&row.key());

            let (fg, row_bg) = if selected {
                (theme.text_inverted.to_rgb(), theme.row_selected.to_rgb())
            } else {
                (theme.text.to_rgb(), bg)
            };
            buf.fill(Rect::new(area.x, y, area.width, 1), fg, row_bg);

            let mut x = area.x;
            if self.selectable {
                let mark = if selected { "■" } else { "□" };
                let cx = x + center_offset(1, SELECT_COL_WIDTH as usize) as u16;
                buf.set_string(cx, y, mark, fg, row_bg, plain, SELECT_COL_WIDTH);
                x += SELECT_COL_WIDTH;
            }

            for col in &self.columns {
                if x >= area.right() {
                    break;
                }
                let value = row.value(&col.data_index).to_string();
                let max = col.width.min(area.right() - x).saturating_sub(1);
                let padded = pad_to_width(&value, max as usize);
                buf.set_string(x + 1, y, &padded, fg, row_bg, plain, max);
                x += col.width;
            }
        }
    }
}
