//! Content projection types for blocks built from prefixed lines.
//!
//! A list item or quote line is stored as an owned string in [`Block`], but
//! renderers and invariant checks also need to know which source bytes
//! that string came from and which bytes were marker syntax.
//!
//! [`Block`]: super::types::Block

use crate::parsing::source::{TextRange, slice};

/// A single line's content projection within a block.
///
/// Separates the line prefix (`> `, `- `, `12. `) from the meaningful
/// content.
///
/// # Invariants
///
/// - `prefix` and `content` are within `raw_line`
/// - `prefix.end <= content.start`
/// - `raw_line.start <= prefix.start`
/// - `content.end <= raw_line.end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line range in the source.
    pub raw_line: TextRange,
    /// Marker region on this line (empty for code lines).
    pub prefix: TextRange,
    /// Remainder after stripping the marker.
    pub content: TextRange,
}

/// How a block's meaningful content is represented.
///
/// - `Contiguous`: a single range (headings, paragraphs)
/// - `Lines`: one entry per consumed content line (lists, quotes, code);
///   empty for rules and for code blocks without content lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Contiguous(TextRange),
    Lines(Vec<ContentLine>),
}

impl ContentView {
    /// Content ranges in source order.
    pub fn ranges(&self) -> Vec<TextRange> {
        match self {
            ContentView::Contiguous(r) => vec![*r],
            ContentView::Lines(lines) => lines.iter().map(|l| l.content).collect(),
        }
    }

    /// Joins content slices into a single string, separated by newlines.
    ///
    /// This is the canonical "without-prefix" view of a block's content and
    /// reproduces the text payload of headings, paragraphs, quotes and code.
    #[must_use]
    pub fn join_content(&self, source: &str) -> String {
        match self {
            ContentView::Contiguous(r) => slice(source, *r).to_string(),
            ContentView::Lines(lines) => lines
                .iter()
                .map(|l| slice(source, l.content))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
