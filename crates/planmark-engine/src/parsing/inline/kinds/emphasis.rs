/// Bold and italic delimiters.
///
/// Both `*` and `_` work, doubled for bold and single for italic. A span
/// only closes on the same character it opened with.
pub struct Emphasis;

impl Emphasis {
    pub const ASTERISK: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Whether `b` can open bold or italic.
    pub fn is_marker(b: u8) -> bool {
        b == Self::ASTERISK || b == Self::UNDERSCORE
    }

    /// The two-byte bold delimiter for marker byte `b`.
    pub fn strong(b: u8) -> [u8; 2] {
        [b, b]
    }
}
