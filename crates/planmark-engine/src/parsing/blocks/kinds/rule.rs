/// Horizontal rule (thematic break).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 2] = ['-', '*'];
    pub const MIN_LEN: usize = 3;

    /// Three or more of the same break character and nothing else.
    pub fn matches(trimmed: &str) -> bool {
        let Some(first) = trimmed.chars().next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && trimmed.len() >= Self::MIN_LEN
            && trimmed.chars().all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("----------", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("- - -", false)]
    #[case("___", false)]
    #[case("", false)]
    fn rule_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}
