use std::sync::LazyLock;

use regex::Regex;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*] +").expect("bullet pattern compiles"));

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\. +").expect("ordinal pattern compiles"));

/// Which marker family opened a list. Lists only continue with lines of the
/// same family; the family itself is not part of the output model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-` or `*`
    Bullet,
    /// digits followed by `.`
    Ordinal,
}

/// List item type.
pub struct ListItem;

impl ListItem {
    /// Matches a trimmed line, returning the marker family and the byte
    /// offset where the item text starts (after the marker and its spacing).
    ///
    /// A marker with nothing after it is not an item: the caller passes
    /// trimmed lines, so `"- "` arrives as `"-"` and fails the match.
    pub fn parse(trimmed: &str) -> Option<(ListMarker, usize)> {
        if let Some(m) = BULLET.find(trimmed) {
            return Some((ListMarker::Bullet, m.end()));
        }
        ORDINAL
            .find(trimmed)
            .map(|m| (ListMarker::Ordinal, m.end()))
    }
}
