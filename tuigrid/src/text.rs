use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to `max_width` display columns, appending an ellipsis when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Pad with trailing spaces up to `width` display columns, truncating
/// first if the string is too long.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let mut w = display_width(&out);
    while w < width {
        out.push(' ');
        w += 1;
    }
    out
}

/// Leading offset that centers `text_width` inside `available_width`.
pub fn center_offset(text_width: usize, available_width: usize) -> usize {
    if text_width >= available_width {
        0
    } else {
        (available_width - text_width) / 2
    }
}
