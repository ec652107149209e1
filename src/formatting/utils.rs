use ratatui::text::Span;

/// Terminal column width of `s`, counting wide glyphs such as emoji as two.
/// Same measure the dashboard uses for layout.
pub fn display_width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Shorten to at most `max_width` columns, ending in `...` when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = display_width(ch.encode_utf8(&mut [0u8; 4]));
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// Left-align `s` in a field of `width` columns, truncating if needed.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let fitted = truncate(s, width);
    let pad = width.saturating_sub(display_width(&fitted));
    format!("{}{}", fitted, " ".repeat(pad))
}
