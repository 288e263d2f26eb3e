use super::range::TextRange;

/// A reference to a single source line with its byte range.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte range of this line in the source (includes the `\n` if present).
    pub range: TextRange,
    /// The line text without its `\n`. A `\r` from CRLF input is kept.
    pub text: &'a str,
}

impl LineRef<'_> {
    /// Byte offset where [`LineRef::text`] starts.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Byte range of the line text, excluding the `\n`.
    pub fn text_range(&self) -> TextRange {
        TextRange::new(self.range.start, self.range.start + self.text.len())
    }

    /// The line with surrounding whitespace removed, together with its range.
    pub fn trimmed(&self) -> (&str, TextRange) {
        let lead = self.text.len() - self.text.trim_start().len();
        let trimmed = self.text.trim();
        let start = self.range.start + lead;
        (trimmed, TextRange::new(start, start + trimmed.len()))
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Returns an iterator over the lines of `text` with their byte ranges.
///
/// Splits on `\n` only and keeps the separator inside each line's range, so
/// the ranges of all lines tile the input exactly. Empty input yields no
/// lines; a trailing `\n` does not produce an extra empty line.
pub fn lines_with_ranges(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n')
        .map(move |raw| {
            let start = offset;
            offset += raw.len();
            LineRef {
                range: TextRange::new(start, offset),
                text: raw.strip_suffix('\n').unwrap_or(raw),
            }
        })
}
