use tuigrid::text::{center_offset, display_width, pad_to_width, truncate_to_width};

#[test]
fn display_width_counts_columns() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width(""), 0);
}

#[test]
fn truncate_short_string_unchanged() {
    assert_eq!(truncate_to_width("abc", 5), "abc");
    assert_eq!(truncate_to_width("abc", 3), "abc");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("abcdef", 4), "abc…");
}

#[test]
fn truncate_to_zero_is_empty() {
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn truncate_respects_wide_chars() {
    // "日" is 2 columns; with budget 3 only the ellipsis and one narrow
    // column of slack remain.
    assert_eq!(truncate_to_width("日本語", 3), "日…");
}

#[test]
fn pad_fills_with_spaces() {
    assert_eq!(pad_to_width("ab", 5), "ab   ");
    assert_eq!(pad_to_width("abcdef", 4), "abc…");
}

#[test]
fn center_offset_splits_remainder_left() {
    assert_eq!(center_offset(4, 10), 3);
    assert_eq!(center_offset(10, 4), 0);
    assert_eq!(center_offset(3, 10), 3);
}
