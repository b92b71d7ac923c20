use tuigrid::{Event, MouseButton};

use super::state::DataTable;
use super::{TableRow, SELECT_COL_WIDTH};

impl<T: TableRow> DataTable<T> {
    /// Feed an input event to the table. Returns true if the event was
    /// consumed.
    ///
    /// A left click on a sortable header toggles its sort; a left click
    /// in a row's checkbox column toggles that row's selection. All
    /// geometry comes from the last render, so a table that has not
    /// been drawn yet ignores everything.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Click {
            x,
            y,
            button: MouseButton::Left,
        } = *event
        else {
            return false;
        };
        let Some(area) = self.area else {
            return false;
        };
        if !area.contains(x, y) || self.status_text().is_some() {
            return false;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        if rel_y == 0 {
            return self.header_click(rel_x);
        }
        self.row_click(rel_x, rel_y)
    }

    fn header_click(&mut self, rel_x: u16) -> bool {
        let mut x = if self.selectable { SELECT_COL_WIDTH } else { 0 };
        if rel_x < x {
            return false;
        }
        for i in 0..self.columns.len() {
            let col = &self.columns[i];
            if rel_x < x + col.width {
                if !col.sortable {
                    return false;
                }
                let key = col.key.clone();
                self.toggle_sort(&key);
                return true;
            }
            x += col.width;
        }
        false
    }

    fn row_click(&mut self, rel_x: u16, rel_y: u16) -> bool {
        if !self.selectable || rel_x >= SELECT_COL_WIDTH {
            return false;
        }
        let Some(&row_idx) = self.view.get(rel_y as usize - 1) else {
            return false;
        };
        let key = self.rows[row_idx].key();
        self.toggle_select(key);
        true
    }
}
