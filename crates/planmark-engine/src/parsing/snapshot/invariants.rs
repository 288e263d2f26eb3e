use crate::parsing::{
    Document,
    blocks::{Block, BlockNode, ContentView},
    inline::InlineNode,
    parse_inline_for_block,
    source::{TextRange, lines_with_ranges, slice},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Blocks are in source order and consume disjoint line runs
/// - Every non-blank line (of the parsed prefix) belongs to exactly one block
/// - Block spans are within bounds and cover exactly their lines
/// - Content and prefix ranges sit inside their lines
/// - Each block's content projection reproduces its payload text
/// - Inline nodes tile each inline unit and re-serialize to it exactly
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, doc: &Document) {
    let parsed = &source[..doc.truncated_at.unwrap_or(source.len())];
    let lines: Vec<_> = lines_with_ranges(parsed).collect();
    let mut owner = vec![None; lines.len()];

    let mut prev_end = 0;
    for (bi, b) in doc.blocks.iter().enumerate() {
        assert!(
            b.lines.start >= prev_end && b.lines.start < b.lines.end,
            "block {bi} lines {:?} out of order (previous ended at {prev_end})",
            b.lines
        );
        assert!(
            b.lines.end <= lines.len(),
            "block {bi} lines {:?} past end ({} lines)",
            b.lines,
            lines.len()
        );
        prev_end = b.lines.end;

        for slot in &mut owner[b.lines.clone()] {
            *slot = Some(bi);
        }

        let expected_span = lines[b.lines.start].range.cover(lines[b.lines.end - 1].range);
        assert_eq!(b.span, expected_span, "block {bi} span does not cover its lines");

        check_content(parsed, bi, b);
        check_inline(parsed, b);
    }

    for (li, line) in lines.iter().enumerate() {
        if owner[li].is_none() {
            assert!(line.is_blank(), "non-blank line {li} {:?} belongs to no block", line.text);
        }
    }
}

fn check_content(source: &str, bi: usize, b: &BlockNode) {
    for r in b.content.ranges() {
        assert!(
            b.span.contains_range(r),
            "block {bi} content {r:?} not inside span {:?}",
            b.span
        );
    }
    if let ContentView::Lines(lines) = &b.content {
        for l in lines {
            assert!(
                l.raw_line.contains_range(l.prefix) && l.raw_line.contains_range(l.content),
                "block {bi} content line {l:?} escapes its raw line"
            );
            assert!(l.prefix.end <= l.content.start, "block {bi} prefix after content");
        }
    }

    match &b.block {
        Block::Heading { text, .. }
        | Block::Paragraph { text }
        | Block::Blockquote { text }
        | Block::CodeBlock { text, .. } => {
            assert_eq!(
                &b.content.join_content(source),
                text,
                "block {bi} content does not reproduce its text"
            );
        }
        Block::List { items } => {
            let projected: Vec<_> = b
                .content
                .ranges()
                .into_iter()
                .map(|r| slice(source, r).to_string())
                .collect();
            assert_eq!(&projected, items, "block {bi} content does not reproduce its items");
        }
        Block::Rule => assert!(b.content.ranges().is_empty(), "rule {bi} has content"),
    }
}

fn check_inline(source: &str, b: &BlockNode) {
    for (unit, nodes) in b.content.ranges().into_iter().zip(parse_inline_for_block(source, b)) {
        check_inline_unit(source, unit, &nodes);
    }
}

/// Inline nodes must tile `unit` without gaps and rebuild its text.
pub fn check_inline_unit(source: &str, unit: TextRange, nodes: &[InlineNode]) {
    let mut at = unit.start;
    for n in nodes {
        assert_eq!(n.full.start, at, "inline node {n:?} leaves a gap");
        assert!(!n.full.is_empty(), "inline node {n:?} is empty");
        assert_eq!(
            n.to_markdown(),
            slice(source, n.full),
            "inline node does not re-serialize to its source"
        );
        at = n.full.end;
    }
    assert_eq!(at, unit.end, "inline nodes stop short of the unit end");
}
