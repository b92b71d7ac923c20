use tuigrid::{Event, Key, Modifiers, MouseButton};

use super::editor::EditResult;
use super::{InputField, InputKind};

impl InputField {
    /// Feed an input event to the field. Returns true if the event was
    /// consumed.
    ///
    /// Keys only apply while the field is focused, and never while it
    /// is disabled or loading. A left click inside the field focuses
    /// it; a click on the reveal toggle flips password visibility
    /// without entering edit state.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::Key { key, modifiers } => {
                if !self.focused || self.editing_blocked() {
                    return false;
                }
                match self.apply_key(key, modifiers) {
                    EditResult::Changed => {
                        self.emit_change();
                        true
                    }
                    EditResult::Submitted => {
                        self.emit_submit();
                        true
                    }
                    EditResult::Handled => true,
                    EditResult::Ignored => false,
                }
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y),
            _ => false,
        }
    }

    fn apply_key(&mut self, key: Key, modifiers: Modifiers) -> EditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.editor.insert_char(c);
                EditResult::Changed
            }
            Key::Backspace if modifiers.none() => {
                if self.editor.delete_back() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }
            Key::Delete if modifiers.none() => {
                if self.editor.delete_forward() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }
            Key::Left if !modifiers.ctrl => {
                self.editor.move_cursor(-1, modifiers.shift);
                EditResult::Handled
            }
            Key::Right if !modifiers.ctrl => {
                self.editor.move_cursor(1, modifiers.shift);
                EditResult::Handled
            }
            Key::Home if !modifiers.ctrl => {
                self.editor.move_to_start(modifiers.shift);
                EditResult::Handled
            }
            Key::End if !modifiers.ctrl => {
                self.editor.move_to_end(modifiers.shift);
                EditResult::Handled
            }
            Key::Char('a') if modifiers.ctrl => {
                self.editor.select_all();
                EditResult::Handled
            }
            Key::Enter => EditResult::Submitted,
            _ => EditResult::Ignored,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) -> bool {
        if let Some(toggle) = self.toggle_area {
            if toggle.contains(x, y) && self.kind == InputKind::Password && !self.loading {
                self.show_password = !self.show_password;
                log::debug!(
                    "password visibility {}",
                    if self.show_password { "on" } else { "off" }
                );
                return true;
            }
        }
        if let Some(area) = self.area {
            if area.contains(x, y) && !self.disabled {
                self.focused = true;
                return true;
            }
        }
        false
    }

    fn emit_change(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.editor.text());
        }
    }

    fn emit_submit(&mut self) {
        if let Some(callback) = self.on_submit.as_mut() {
            callback(self.editor.text());
        }
    }
}
