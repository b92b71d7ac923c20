use std::cell::RefCell;
use std::rc::Rc;

use slate::prelude::*;

fn key(k: Key) -> Event {
    Event::Key {
        key: k,
        modifiers: Modifiers::default(),
    }
}

fn chr(c: char) -> Event {
    key(Key::Char(c))
}

fn click(x: u16, y: u16) -> Event {
    Event::Click {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn type_str(field: &mut InputField, s: &str) {
    for c in s.chars() {
        field.handle_event(&chr(c));
    }
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.width())
        .filter_map(|x| buf.get(x, y))
        .filter(|c| !c.wide_continuation)
        .map(|c| c.ch)
        .collect()
}

// ---------------------------------------------------------------------
// Editing and callbacks
// ---------------------------------------------------------------------

#[test]
fn typing_updates_value_and_fires_on_change() {
    let changes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let mut field = InputField::new().on_change({
        let changes = Rc::clone(&changes);
        move |text| changes.borrow_mut().push(text.to_string())
    });
    field.set_focused(true);

    type_str(&mut field, "hi");
    assert_eq!(field.text(), "hi");
    assert_eq!(*changes.borrow(), vec!["h".to_string(), "hi".to_string()]);

    field.handle_event(&key(Key::Backspace));
    assert_eq!(field.text(), "h");
    assert_eq!(changes.borrow().last().map(String::as_str), Some("h"));
}

#[test]
fn enter_fires_on_submit_with_current_value() {
    let submitted: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let mut field = InputField::new().value("ready").on_submit({
        let submitted = Rc::clone(&submitted);
        move |text| *submitted.borrow_mut() = Some(text.to_string())
    });
    field.set_focused(true);

    assert!(field.handle_event(&key(Key::Enter)));
    assert_eq!(submitted.borrow().as_deref(), Some("ready"));
}

#[test]
fn unfocused_field_ignores_keys() {
    let mut field = InputField::new();
    assert!(!field.handle_event(&chr('x')));
    assert_eq!(field.text(), "");
}

#[test]
fn disabled_and_loading_block_editing() {
    let mut field = InputField::new().value("keep");
    field.set_focused(true);

    field.set_disabled(true);
    assert!(!field.handle_event(&chr('x')));
    field.set_disabled(false);

    field.set_loading(true);
    assert!(!field.handle_event(&key(Key::Backspace)));
    assert_eq!(field.text(), "keep");
}

#[test]
fn select_all_then_type_replaces_text() {
    let mut field = InputField::new().value("old text");
    field.set_focused(true);

    field.handle_event(&Event::Key {
        key: Key::Char('a'),
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
    });
    field.handle_event(&chr('n'));
    assert_eq!(field.text(), "n");
}

// ---------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------

#[test]
fn outlined_field_draws_label_border_and_helper() {
    let mut field = InputField::new()
        .label("Username")
        .placeholder("Enter username")
        .helper_text("This is a reusable input field")
        .variant(Variant::Outlined);
    let mut buf = Buffer::new(40, 6);
    field.render(&mut buf, Rect::from_size(40, 6), &Theme::dark());

    assert!(row_text(&buf, 0).contains("Username"));
    assert!(row_text(&buf, 1).starts_with('╭'));
    assert!(row_text(&buf, 2).contains("Enter username"));
    assert!(row_text(&buf, 3).starts_with('╰'));
    assert!(row_text(&buf, 4).contains("This is a reusable input field"));
    assert_eq!(field.height(), 5);
}

#[test]
fn filled_and_ghost_draw_underline_rule() {
    for variant in [Variant::Filled, Variant::Ghost] {
        let mut field = InputField::new().variant(variant).value("abc");
        let mut buf = Buffer::new(20, 3);
        field.render(&mut buf, Rect::from_size(20, 3), &Theme::dark());
        assert!(row_text(&buf, 0).contains("abc"));
        assert!(row_text(&buf, 1).starts_with('─'));
        assert_eq!(field.height(), 2);
    }
}

#[test]
fn error_wins_over_helper_in_footer() {
    let mut field = InputField::new()
        .helper_text("helper")
        .variant(Variant::Ghost);
    assert_eq!(field.footer_text(), Some("helper"));

    field.set_error(Some("required".to_string()));
    assert_eq!(field.footer_text(), Some("required"));
    assert!(field.has_error());

    let mut buf = Buffer::new(20, 4);
    field.render(&mut buf, Rect::from_size(20, 4), &Theme::dark());
    assert!(row_text(&buf, 2).contains("required"));
    assert!(!row_text(&buf, 2).contains("helper"));

    field.set_error(None);
    field.set_invalid(true);
    assert!(field.has_error());
    assert_eq!(field.footer_text(), Some("helper"));
}

// ---------------------------------------------------------------------
// Password fields
// ---------------------------------------------------------------------

#[test]
fn password_echo_is_masked_until_revealed() {
    let mut field = InputField::new()
        .kind(InputKind::Password)
        .variant(Variant::Ghost)
        .value("secret");
    assert!(field.masked());

    let mut buf = Buffer::new(24, 3);
    field.render(&mut buf, Rect::from_size(24, 3), &Theme::dark());
    let row = row_text(&buf, 0);
    assert!(row.contains("••••••"));
    assert!(!row.contains("secret"));

    let toggle = field.toggle_area().unwrap();
    assert!(field.handle_event(&click(toggle.x, toggle.y)));
    assert!(field.show_password());
    assert!(!field.masked());

    field.render(&mut buf, Rect::from_size(24, 3), &Theme::dark());
    assert!(row_text(&buf, 0).contains("secret"));
}

#[test]
fn loading_replaces_the_reveal_toggle() {
    let mut field = InputField::new()
        .kind(InputKind::Password)
        .variant(Variant::Ghost)
        .value("secret");
    let mut buf = Buffer::new(24, 3);

    field.render(&mut buf, Rect::from_size(24, 3), &Theme::dark());
    let toggle = field.toggle_area().unwrap();

    field.set_loading(true);
    field.render(&mut buf, Rect::from_size(24, 3), &Theme::dark());
    assert!(field.toggle_area().is_none());
    assert!(row_text(&buf, 0).contains('⟳'));

    // The old toggle position is inert while loading.
    field.handle_event(&click(toggle.x, toggle.y));
    assert!(!field.show_password());
}

// ---------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------

#[test]
fn click_inside_field_focuses_it() {
    let mut field = InputField::new().variant(Variant::Ghost);
    let mut buf = Buffer::new(20, 3);
    field.render(&mut buf, Rect::from_size(20, 3), &Theme::dark());

    assert!(!field.is_focused());
    assert!(field.handle_event(&click(5, 0)));
    assert!(field.is_focused());
}

#[test]
fn click_does_not_focus_disabled_field() {
    let mut field = InputField::new().variant(Variant::Ghost);
    field.set_disabled(true);
    let mut buf = Buffer::new(20, 3);
    field.render(&mut buf, Rect::from_size(20, 3), &Theme::dark());

    assert!(!field.handle_event(&click(5, 0)));
    assert!(!field.is_focused());
}
