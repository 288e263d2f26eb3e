//! # Rendering
//!
//! The engine does not draw anything itself. A presentation layer provides a
//! [`RenderAdapter`] with one method per block variant, and [`render`] walks
//! a block sequence and calls it. Paragraph text and list items are
//! inline-scanned on the way; heading, quote and code text are handed over
//! as-is.

mod html;

pub use html::HtmlRenderer;

use crate::parsing::{
    blocks::Block,
    inline::{Span, scan_inline},
    spans_for_block,
};

/// Maps every block variant to a presentation primitive.
pub trait RenderAdapter {
    type Output;

    fn heading(&mut self, level: u8, text: &str);
    fn paragraph(&mut self, spans: &[Span]);
    /// One span sequence per item, in order.
    fn list(&mut self, items: &[Vec<Span>]);
    fn code_block(&mut self, language: Option<&str>, text: &str);
    fn blockquote(&mut self, text: &str);
    fn rule(&mut self);

    fn finish(self) -> Self::Output;
}

/// Renders `blocks` in order through `renderer`.
pub fn render<R: RenderAdapter>(blocks: &[Block], mut renderer: R) -> R::Output {
    for block in blocks {
        match block {
            Block::Heading { level, text } => renderer.heading(*level, text),
            Block::Paragraph { text } => renderer.paragraph(&scan_inline(text)),
            Block::List { .. } => renderer.list(&spans_for_block(block)),
            Block::CodeBlock { language, text } => renderer.code_block(language.as_deref(), text),
            Block::Blockquote { text } => renderer.blockquote(text),
            Block::Rule => renderer.rule(),
        }
    }
    renderer.finish()
}
