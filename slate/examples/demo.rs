//! Interactive demo: a username input above a sortable, selectable
//! user table.
//!
//! Click a header to sort, click a checkbox to select, Tab to move
//! focus between widgets, Esc to quit. Debug logs go to demo.log.

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::rc::Rc;

use simplelog::{Config, LevelFilter, WriteLogger};
use slate::prelude::*;
use tuigrid::{Terminal, TextStyle};

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    role: String,
    status: String,
    join_date: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str, role: &str, status: &str, join_date: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status: status.to_string(),
            join_date: join_date.to_string(),
        }
    }
}

impl TableRow for User {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn value(&self, data_index: &str) -> CellValue {
        match data_index {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "status" => self.status.as_str().into(),
            "join_date" => self.join_date.as_str().into(),
            _ => CellValue::Missing,
        }
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Alice Johnson", "alice@example.com", "Admin", "active", "2023-01-15"),
        User::new(2, "Bob Smith", "bob@example.com", "Editor", "active", "2023-03-22"),
        User::new(3, "Charlie Brown", "charlie@example.com", "Viewer", "inactive", "2023-06-08"),
    ]
}

fn main() -> io::Result<()> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("demo.log")?,
    )
    .expect("logger init");

    let current_value = Rc::new(RefCell::new(String::new()));
    let selected_users: Rc<RefCell<Vec<User>>> = Rc::new(RefCell::new(Vec::new()));

    let mut input = InputField::new()
        .label("Username")
        .placeholder("Enter username")
        .helper_text("This is a reusable input field")
        .variant(Variant::Outlined)
        .size(InputSize::Md)
        .on_change({
            let current_value = Rc::clone(&current_value);
            move |text| {
                *current_value.borrow_mut() = text.to_string();
            }
        });
    input.set_focused(true);

    let columns = vec![
        Column::new("id", "ID").sortable().width(6),
        Column::new("name", "Name").sortable().width(18),
        Column::new("email", "Email").sortable().width(24),
        Column::new("role", "Role").width(10),
        Column::new("status", "Status").width(10),
        Column::new("join_date", "Join Date").width(12),
    ];
    let mut table = DataTable::with_rows(columns, sample_users())
        .selectable(true)
        .on_row_select({
            let selected_users = Rc::clone(&selected_users);
            move |rows| {
                *selected_users.borrow_mut() = rows;
            }
        });

    let theme = Theme::dark();
    let mut terminal = Terminal::new()?;

    loop {
        let buf = terminal.frame()?;
        let width = buf.width();
        let height = buf.height();
        let bg = theme.background.to_rgb();
        let fg = theme.text.to_rgb();
        buf.fill(Rect::from_size(width, height), fg, bg);

        buf.set_string(
            2,
            1,
            "Component Library Demo",
            fg,
            bg,
            TextStyle::new().bold(),
            width.saturating_sub(2),
        );

        let input_area = Rect::new(2, 3, 40.min(width.saturating_sub(4)), input.height());
        input.render(buf, input_area, &theme);

        let value_y = 3 + input.height() + 1;
        let value_line = format!("Current value: {}", current_value.borrow());
        buf.set_string(
            2,
            value_y,
            &value_line,
            theme.muted.to_rgb(),
            bg,
            TextStyle::new(),
            width.saturating_sub(2),
        );

        let table_y = value_y + 2;
        let table_height = height.saturating_sub(table_y + 2);
        let table_area = Rect::new(2, table_y, width.saturating_sub(4), table_height);
        table.render(buf, table_area, &theme);

        let selected_line = {
            let selected = selected_users.borrow();
            let names: Vec<&str> = selected.iter().map(|u| u.name.as_str()).collect();
            format!("Selected Users: {}", names.join(", "))
        };
        buf.set_string(
            2,
            height.saturating_sub(1),
            &selected_line,
            theme.accent.to_rgb(),
            bg,
            TextStyle::new(),
            width.saturating_sub(2),
        );

        terminal.flush()?;

        for event in terminal.poll(None)? {
            match event {
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key { key: Key::Tab, .. } => {
                    input.set_focused(!input.is_focused());
                }
                event => {
                    if !input.handle_event(&event) {
                        table.handle_event(&event);
                    }
                }
            }
        }
    }
}
