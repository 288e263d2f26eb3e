use serde::{Deserialize, Serialize};

use crate::parsing::source::TextRange;

/// An inline-formatted fragment of a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    Bold { text: String },
    Italic { text: String },
    /// A code span. This is a raw zone: nothing inside is parsed.
    InlineCode { text: String },
    /// `[label](target)`. The target is kept verbatim and never resolved.
    Link { label: String, target: String },
    Plain { text: String },
}

impl Span {
    /// The text a reader sees, with all syntax markers removed.
    pub fn visible_text(&self) -> &str {
        match self {
            Span::Bold { text }
            | Span::Italic { text }
            | Span::InlineCode { text }
            | Span::Plain { text } => text,
            Span::Link { label, .. } => label,
        }
    }
}

/// Concatenated visible text of a span sequence.
pub fn visible_text(spans: &[Span]) -> String {
    spans.iter().map(Span::visible_text).collect()
}

/// Which character delimited a bold or italic span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Asterisk,
    Underscore,
}

impl Marker {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Marker::Asterisk),
            b'_' => Some(Marker::Underscore),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Marker::Asterisk => '*',
            Marker::Underscore => '_',
        }
    }
}

/// A parsed inline span with its byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineNode {
    pub span: Span,
    /// Full range including delimiters.
    pub full: TextRange,
    /// Delimiter used by `Bold`/`Italic`; `None` for every other kind.
    pub marker: Option<Marker>,
}

impl InlineNode {
    /// Re-inserts the consumed delimiters around the span's text.
    ///
    /// For every node the parser produces this equals the source slice at
    /// [`InlineNode::full`].
    pub fn to_markdown(&self) -> String {
        let m = self.marker.map(Marker::as_char).unwrap_or('*');
        match &self.span {
            Span::Bold { text } => format!("{m}{m}{text}{m}{m}"),
            Span::Italic { text } => format!("{m}{text}{m}"),
            Span::InlineCode { text } => format!("`{text}`"),
            Span::Link { label, target } => format!("[{label}]({target})"),
            Span::Plain { text } => text.clone(),
        }
    }
}
