//! # planmark-engine
//!
//! Turns the restricted markdown of generated travel plans into typed
//! blocks and inline spans.
//!
//! - [`segment`] splits text into [`Block`]s: headings, paragraphs, lists,
//!   fenced code, blockquotes and rules.
//! - [`scan_inline`] splits a paragraph or list item into [`Span`]s: bold,
//!   italic, inline code, links and plain text.
//! - [`render`] drives any [`RenderAdapter`] over a block sequence.
//!
//! Both parsers are total: every input, however malformed, produces a valid
//! (possibly empty) result.

pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    Document,
    blocks::{Block, BlockNode, ContentLine, ContentView, to_markdown},
    inline::{InlineNode, Marker, Span, parse_inline, scan_inline, visible_text},
    limits::{OversizePolicy, ParseError, ParseOptions},
    parse_document, parse_document_with, parse_inline_for_block, segment,
    source::TextRange,
    spans_for_block,
};
pub use render::{HtmlRenderer, RenderAdapter, render};
