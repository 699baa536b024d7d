use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    // One column is reserved for the ellipsis
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let end = s
        .char_indices()
        .find_map(|(i, ch)| {
            used += char_width(ch);
            (used > budget).then_some(i)
        })
        .unwrap_or(s.len());

    format!("{}…", &s[..end])
}

/// Truncate or right-pad `s` with spaces to exactly `width` columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut line = truncate_to_width(s, width);
    let used = display_width(&line);
    line.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    line
}
