/// Link delimiters: `[label](target)`.
///
/// Neither part may contain its own bracket pair; there is no nesting and
/// no whitespace is allowed between `]` and `(`.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
}
