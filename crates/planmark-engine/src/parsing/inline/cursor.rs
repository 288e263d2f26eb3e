use crate::parsing::source::TextRange;

/// A byte cursor for inline scanning with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the original source (via `base` offset). Every delimiter the scanner
/// looks for is ASCII, so any index the cursor stops at next to one is a
/// char boundary.
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the source (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current one.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Byte at local index `i`, independent of the cursor position.
    pub fn byte_at(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(i).copied()
    }

    /// Local index of the next occurrence of `pat` at or after local index `from`.
    pub fn find_from(&self, from: usize, pat: &[u8]) -> Option<usize> {
        let hay = self.s.as_bytes().get(from..)?;
        if pat.is_empty() || hay.len() < pat.len() {
            return None;
        }
        hay.windows(pat.len())
            .position(|w| w == pat)
            .map(|p| from + p)
    }

    /// Local index of the first byte at or after `from` that is in `set`.
    pub fn find_any_from(&self, from: usize, set: &[u8]) -> Option<usize> {
        let hay = self.s.as_bytes().get(from..)?;
        hay.iter().position(|b| set.contains(b)).map(|p| from + p)
    }

    /// Slice between two local indices.
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.s[from..to]
    }

    /// Absolute range between two local indices.
    pub fn range(&self, from: usize, to: usize) -> TextRange {
        TextRange::new(from, to).offset(self.base)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves to local index `i`.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }
}
