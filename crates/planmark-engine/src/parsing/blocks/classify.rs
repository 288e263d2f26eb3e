use crate::parsing::source::{LineRef, TextRange};

use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, ListMarker, ThematicBreak};

/// What a single line looks like on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// Starts with a triple backtick. Opens a fence outside one, closes it inside.
    Fence { language: Option<String> },
    Heading { level: u8, text: TextRange },
    Rule,
    Quote { prefix: TextRange, content: TextRange },
    ListItem {
        marker: ListMarker,
        prefix: TextRange,
        content: TextRange,
    },
    /// Anything else: paragraph text.
    Text { content: TextRange },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a line is actually
/// consumed verbatim by an open fence is decided later by the builder.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    pub line: LineRef<'a>,
    pub kind: LineKind,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried against the whitespace-trimmed line in fixed
    /// precedence: blank, fence, heading, rule, quote, list item, text.
    pub fn classify<'a>(&self, line: LineRef<'a>) -> LineClass<'a> {
        let (trimmed, range) = line.trimmed();
        let at = |offset: usize| range.start + offset;

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some(tag) = CodeFence::sig(trimmed) {
            LineKind::Fence {
                language: CodeFence::language(tag),
            }
        } else if let Some((level, text_at)) = Heading::parse(trimmed) {
            LineKind::Heading {
                level,
                text: TextRange::new(at(text_at), range.end),
            }
        } else if ThematicBreak::matches(trimmed) {
            LineKind::Rule
        } else if let Some(content_at) = BlockQuote::strip_prefix(trimmed) {
            LineKind::Quote {
                prefix: TextRange::new(range.start, at(content_at)),
                content: TextRange::new(at(content_at), range.end),
            }
        } else if let Some((marker, content_at)) = ListItem::parse(trimmed) {
            LineKind::ListItem {
                marker,
                prefix: TextRange::new(range.start, at(content_at)),
                content: TextRange::new(at(content_at), range.end),
            }
        } else {
            LineKind::Text { content: range }
        };

        LineClass { line, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::lines_with_ranges;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<LineKind> {
        lines_with_ranges(text)
            .map(|l| LineClassifier.classify(l).kind)
            .collect()
    }

    #[test]
    fn classifies_each_rule() {
        let text = "\n```py\n## Day 1\n---\n> quoted\n- item\n3. third\nplain";
        assert_eq!(
            kinds(text),
            vec![
                LineKind::Blank,
                LineKind::Fence {
                    language: Some("py".into())
                },
                LineKind::Heading {
                    level: 2,
                    text: TextRange::new(10, 15)
                },
                LineKind::Rule,
                LineKind::Quote {
                    prefix: TextRange::new(20, 22),
                    content: TextRange::new(22, 28)
                },
                LineKind::ListItem {
                    marker: ListMarker::Bullet,
                    prefix: TextRange::new(29, 31),
                    content: TextRange::new(31, 35)
                },
                LineKind::ListItem {
                    marker: ListMarker::Ordinal,
                    prefix: TextRange::new(36, 39),
                    content: TextRange::new(39, 44)
                },
                LineKind::Text {
                    content: TextRange::new(45, 50)
                },
            ]
        );
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        assert_eq!(
            kinds("   # Title  "),
            vec![LineKind::Heading {
                level: 1,
                text: TextRange::new(5, 10)
            }]
        );
    }

    #[test]
    fn rule_beats_bullet() {
        assert_eq!(kinds("***"), vec![LineKind::Rule]);
        assert!(matches!(kinds("* * *")[0], LineKind::ListItem { .. }));
    }

    #[test]
    fn heading_without_space_is_text() {
        assert_eq!(
            kinds("#hashtag"),
            vec![LineKind::Text {
                content: TextRange::new(0, 8)
            }]
        );
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert_eq!(kinds(" \t \r"), vec![LineKind::Blank]);
    }
}
