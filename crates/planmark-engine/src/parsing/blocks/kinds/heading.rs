use std::sync::LazyLock;

use regex::Regex;

/// One to six `#`, at least one space, then non-empty text.
static ATX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) +(.+)$").expect("heading pattern compiles"));

/// ATX heading block type.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Matches a trimmed line, returning the level and the byte offset of
    /// the heading text within `trimmed`.
    pub fn parse(trimmed: &str) -> Option<(u8, usize)> {
        let caps = ATX.captures(trimmed)?;
        let level = caps.get(1)?.len() as u8;
        let text = caps.get(2)?;
        Some((level, text.start()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, 2)))]
    #[case("### Day 2", Some((3, 4)))]
    #[case("######   deep", Some((6, 9)))]
    #[case("#\tTabbed", None)]
    #[case("# # nested marker", Some((1, 2)))]
    #[case("#######  seven", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("text # not heading", None)]
    fn heading_cases(#[case] line: &str, #[case] expected: Option<(u8, usize)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
