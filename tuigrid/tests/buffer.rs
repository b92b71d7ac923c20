use tuigrid::{Border, Buffer, Cell, Rect, Rgb, TextStyle};

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.width())
        .filter_map(|x| buf.get(x, y))
        .filter(|c| !c.wide_continuation)
        .map(|c| c.ch)
        .collect()
}

#[test]
fn set_string_writes_and_clips() {
    let mut buf = Buffer::new(10, 2);
    let written = buf.set_string(
        2,
        0,
        "hello world",
        Rgb::new(255, 255, 255),
        Rgb::new(0, 0, 0),
        TextStyle::new(),
        5,
    );

    assert_eq!(written, 5);
    assert_eq!(row_text(&buf, 0), "  hello   ");
}

#[test]
fn set_string_out_of_bounds_is_ignored() {
    let mut buf = Buffer::new(5, 1);
    let written = buf.set_string(
        0,
        3,
        "x",
        Rgb::default(),
        Rgb::default(),
        TextStyle::new(),
        5,
    );
    assert_eq!(written, 0);
}

#[test]
fn wide_chars_mark_continuation_cells() {
    let mut buf = Buffer::new(6, 1);
    buf.set_string(
        0,
        0,
        "日本",
        Rgb::default(),
        Rgb::default(),
        TextStyle::new(),
        6,
    );

    assert_eq!(buf.get(0, 0).unwrap().ch, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().ch, '本');
    assert!(buf.get(3, 0).unwrap().wide_continuation);
}

#[test]
fn wide_char_does_not_straddle_clip_edge() {
    let mut buf = Buffer::new(6, 1);
    // Width budget of 3: one full-width char fits, the second does not.
    let written = buf.set_string(
        0,
        0,
        "日本",
        Rgb::default(),
        Rgb::default(),
        TextStyle::new(),
        3,
    );
    assert_eq!(written, 2);
    assert_eq!(buf.get(2, 0).unwrap().ch, ' ');
}

#[test]
fn fill_sets_background() {
    let mut buf = Buffer::new(4, 4);
    let bg = Rgb::new(10, 20, 30);
    buf.fill(Rect::new(1, 1, 2, 2), Rgb::default(), bg);

    assert_eq!(buf.get(1, 1).unwrap().bg, bg);
    assert_eq!(buf.get(2, 2).unwrap().bg, bg);
    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(0, 0, 0));
    assert_eq!(buf.get(3, 3).unwrap().bg, Rgb::new(0, 0, 0));
}

#[test]
fn border_corners_and_edges() {
    let mut buf = Buffer::new(5, 3);
    buf.draw_border(
        Rect::new(0, 0, 5, 3),
        Border::Rounded,
        Rgb::default(),
        Rgb::default(),
    );

    assert_eq!(row_text(&buf, 0), "╭───╮");
    assert_eq!(row_text(&buf, 1), "│   │");
    assert_eq!(row_text(&buf, 2), "╰───╯");
}

#[test]
fn diff_reports_only_changed_cells() {
    let a = Buffer::new(4, 2);
    let mut b = Buffer::new(4, 2);
    b.set(2, 1, Cell::new('x'));

    let changes: Vec<_> = b.diff(&a).collect();
    assert_eq!(changes.len(), 1);
    let (x, y, cell) = changes[0];
    assert_eq!((x, y), (2, 1));
    assert_eq!(cell.ch, 'x');
}

#[test]
fn clear_resets_to_default() {
    let mut buf = Buffer::new(3, 1);
    buf.set(0, 0, Cell::new('z'));
    buf.clear();
    assert_eq!(buf.get(0, 0).unwrap(), &Cell::default());
}
