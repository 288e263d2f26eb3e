/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in classifier
/// code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips a single quote prefix from a trimmed line.
    ///
    /// Removes the `>` and at most one following space. Further `>`
    /// characters are content: quotes do not nest here.
    ///
    /// # Returns
    /// Byte offset into `s` where the quoted content begins, or `None` if
    /// the line is not quoted.
    pub fn strip_prefix(s: &str) -> Option<usize> {
        let rest = s.strip_prefix(Self::PREFIX)?;
        let skip = usize::from(rest.starts_with(' '));
        Some(Self::PREFIX.len_utf8() + skip)
    }
}
