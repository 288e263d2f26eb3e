use super::range::TextRange;

/// Extracts the text for a range from the source.
///
/// Panics if the range is out of bounds or splits a character; ranges
/// produced by the parser never do.
pub fn slice(source: &str, r: TextRange) -> &str {
    &source[r.start..r.end]
}

/// Extracts text for a range, truncating to `max` chars with "..." suffix if needed.
///
/// Used for human-readable snapshot output.
pub fn preview(source: &str, r: TextRange, max: usize) -> String {
    let s = slice(source, r);
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Largest char boundary in `s` that is `<= max`.
pub fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
