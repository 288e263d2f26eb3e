use crate::parsing::{
    Document,
    blocks::{Block, BlockNode},
    inline::{InlineNode, Span},
    parse_inline_for_block,
};

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug)]
pub struct Snap {
    pub truncated_at: Option<usize>,
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug)]
pub struct BlockSnap {
    /// Kind plus the key payload detail, e.g. `Heading(2)` or `CodeBlock(json)`.
    pub kind: String,
    /// Consumed source lines as `first..next`.
    pub lines: String,
    /// Payload text; list items are joined with ` | `.
    pub text: String,
    /// One entry per inline-eligible unit, each a list of rendered spans.
    pub inline: Vec<Vec<String>>,
}

/// Converts a parsed document into a stable snapshot.
pub fn normalize(source: &str, doc: &Document) -> Snap {
    Snap {
        truncated_at: doc.truncated_at,
        blocks: doc.blocks.iter().map(|b| block_snap(source, b)).collect(),
    }
}

fn block_snap(source: &str, b: &BlockNode) -> BlockSnap {
    let name = b.block.kind_name();
    let (kind, text) = match &b.block {
        Block::Heading { level, text } => (format!("{name}({level})"), text.clone()),
        Block::List { items } => (format!("{name}({})", items.len()), items.join(" | ")),
        Block::CodeBlock { language, text } => (
            format!("{name}({})", language.as_deref().unwrap_or("-")),
            text.clone(),
        ),
        Block::Paragraph { text } | Block::Blockquote { text } => (name.to_string(), text.clone()),
        Block::Rule => (name.to_string(), String::new()),
    };

    let inline = parse_inline_for_block(source, b)
        .iter()
        .map(|unit| unit.iter().map(span_label).collect())
        .collect();

    BlockSnap {
        kind,
        lines: format!("{}..{}", b.lines.start, b.lines.end),
        text,
        inline,
    }
}

fn span_label(n: &InlineNode) -> String {
    match &n.span {
        Span::Bold { text } => format!("Bold({text})"),
        Span::Italic { text } => format!("Italic({text})"),
        Span::InlineCode { text } => format!("Code({text})"),
        Span::Link { label, target } => format!("Link({label} -> {target})"),
        Span::Plain { text } => format!("Plain({text})"),
    }
}
