use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::parsing::source::TextRange;

use super::content::ContentView;

/// A top-level structural unit of parsed text.
///
/// The variant set is closed: renderers match on it exhaustively, so a new
/// variant fails to compile until every consumer handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// An ATX heading, `level` in `1..=6`.
    Heading { level: u8, text: String },
    /// A single source line that matched no other rule.
    Paragraph { text: String },
    /// A run of list items. Ordered and unordered lists are not
    /// distinguished; markers are stripped.
    List { items: Vec<String> },
    /// A fenced code block. Content is verbatim and never inline-scanned.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
    /// Consecutive `>` lines, prefixes stripped, joined with `\n`.
    Blockquote { text: String },
    /// A horizontal divider.
    Rule,
}

impl Block {
    /// Short kind label; snapshot output prefixes its details with it.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::List { .. } => "List",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::Blockquote { .. } => "Blockquote",
            Block::Rule => "Rule",
        }
    }

    /// Whether the block's text units are inline-scanned by renderers.
    pub fn is_inline_eligible(&self) -> bool {
        matches!(self, Block::Paragraph { .. } | Block::List { .. })
    }
}

/// A parsed block together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    /// The block payload.
    pub block: Block,
    /// Byte range of every source line the block consumed, newlines included.
    pub span: TextRange,
    /// Zero-based indices of the consumed source lines.
    pub lines: Range<usize>,
    /// Projection of the block's payload text onto the source.
    pub content: ContentView,
}
