pub mod blocks;
pub mod inline;
pub mod limits;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, BlockNode};
use inline::{InlineNode, Span};
use limits::{OversizePolicy, ParseError, ParseOptions};
use source::slice::floor_char_boundary;

/// The result of segmenting a source text.
///
/// Ranges inside the nodes refer to the text passed to the parse call. A
/// truncated parse only covers the prefix up to `truncated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
    /// Byte length of the prefix that was parsed when the input was cut.
    pub truncated_at: Option<usize>,
}

impl Document {
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().map(|n| &n.block)
    }

    /// Drops positions, keeping only the block payloads.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks.into_iter().map(|n| n.block).collect()
    }

    /// Code block contents whose language tag equals `language`
    /// (ASCII case-insensitive), in source order.
    ///
    /// Generated plan text ends with a fenced `json` payload; this is how
    /// callers pull it out without a second parser.
    pub fn code_blocks<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter_map(move |b| match b {
            Block::CodeBlock {
                language: Some(lang),
                text,
            } if lang.eq_ignore_ascii_case(language) => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Segments `text` into blocks with source positions. Never fails.
pub fn parse_document(text: &str) -> Document {
    let builder = BlockBuilder::new(text);
    let blocks = builder.build();
    log::debug!(
        "segmented {} lines ({} bytes) into {} blocks",
        builder.line_count(),
        text.len(),
        blocks.len()
    );
    Document {
        blocks,
        truncated_at: None,
    }
}

/// Like [`parse_document`] but enforces the size limit in `options`.
pub fn parse_document_with(text: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let Some(max) = options.max_input_bytes else {
        return Ok(parse_document(text));
    };
    if text.len() <= max {
        return Ok(parse_document(text));
    }

    match options.oversize {
        OversizePolicy::Reject => Err(ParseError::InputTooLarge {
            len: text.len(),
            max,
        }),
        OversizePolicy::Truncate => {
            let cut = floor_char_boundary(text, max);
            log::warn!(
                "input of {} bytes truncated to {} bytes before parsing",
                text.len(),
                cut
            );
            let mut doc = parse_document(&text[..cut]);
            doc.truncated_at = Some(cut);
            Ok(doc)
        }
    }
}

/// Segments `text` into blocks. Never fails; unrecognised lines become
/// paragraphs.
pub fn segment(text: &str) -> Vec<Block> {
    parse_document(text).into_blocks()
}

/// Inline nodes for each inline-eligible text unit of a block: one unit for
/// a paragraph, one per item for a list, none for any other kind.
pub fn parse_inline_for_block(source: &str, b: &BlockNode) -> Vec<Vec<InlineNode>> {
    if !b.block.is_inline_eligible() {
        return vec![];
    }
    b.content
        .ranges()
        .into_iter()
        .map(|r| inline::parse_inline(r.start, source::slice(source, r)))
        .collect()
}

/// Span sequences for the inline-eligible units of a block, without
/// positions. Works on the owned payload, so no source is needed.
pub fn spans_for_block(block: &Block) -> Vec<Vec<Span>> {
    match block {
        Block::Paragraph { text } => vec![inline::scan_inline(text)],
        Block::List { items } => items.iter().map(|i| inline::scan_inline(i)).collect(),
        Block::Heading { .. } | Block::CodeBlock { .. } | Block::Blockquote { .. } | Block::Rule => {
            vec![]
        }
    }
}
