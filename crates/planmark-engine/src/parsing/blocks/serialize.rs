use super::{
    kinds::{BlockQuote, CodeFence, Heading},
    types::Block,
};

/// Writes blocks back out as markdown text.
///
/// The output is deliberately naive: one canonical spelling per block kind,
/// `- ` for every list item, and a blank line between blocks so adjacent
/// lists or quotes cannot run together. Segmenting the result yields the
/// same block sequence.
pub fn to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_to_markdown)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block_to_markdown(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            let prefix = Heading::MARKER.to_string().repeat(usize::from(*level));
            format!("{prefix} {text}")
        }
        Block::Paragraph { text } => text.clone(),
        Block::List { items } => items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::CodeBlock { language, text } => {
            let fence = CodeFence::BACKTICKS;
            let lang = language.as_deref().unwrap_or("");
            if text.is_empty() {
                format!("{fence}{lang}\n{fence}")
            } else {
                format!("{fence}{lang}\n{text}\n{fence}")
            }
        }
        Block::Blockquote { text } => text
            .split('\n')
            .map(|line| format!("{} {line}", BlockQuote::PREFIX))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Rule => "---".to_string(),
    }
}
