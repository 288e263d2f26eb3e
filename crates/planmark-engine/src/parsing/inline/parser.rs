use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, TRIGGERS},
    types::{InlineNode, Marker, Span},
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute ranges)
/// - `s`: The string content to scan (a paragraph's text or one list item)
///
/// # Precedence
/// At each trigger character the constructs are tried in a fixed order:
/// bold, italic, inline code, link. The first that closes wins and its
/// content is not scanned again. A doubled `**`/`__` that never closes does
/// not fall back to italic; its first character is taken as text.
///
/// # Returns
/// Nodes covering the entire input, in order. Text between constructs,
/// including trigger characters that matched nothing, is merged into a
/// single `Span::Plain` per gap.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a Plain node
    fn flush_text(cur: &Cursor<'_>, out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode {
                span: Span::Plain {
                    text: cur.slice(start, end).to_string(),
                },
                full: cur.range(start, end),
                marker: None,
            });
        }
    }

    while let Some(b) = cur.peek() {
        if !TRIGGERS.contains(&b) {
            let next = cur.find_any_from(cur.i, &TRIGGERS).unwrap_or(s.len());
            cur.jump_to(next);
            continue;
        }

        let start = cur.i;
        match try_parse_construct(&mut cur) {
            Some(node) => {
                flush_text(&cur, &mut out, text_start, start);
                out.push(node);
                text_start = cur.i;
            }
            None => {
                // Unmatched trigger stays in the pending text run.
                cur.bump();
            }
        }
    }

    flush_text(&cur, &mut out, text_start, cur.i);
    out
}

/// Scans `text` into spans, dropping positions.
pub fn scan_inline(text: &str) -> Vec<Span> {
    parse_inline(0, text).into_iter().map(|n| n.span).collect()
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    match cur.peek()? {
        b if Emphasis::is_marker(b) => {
            if cur.peek_at(1) == Some(b) {
                try_parse_bold(cur, b)
            } else {
                try_parse_italic(cur, b)
            }
        }
        CodeSpan::TICK => try_parse_code_span(cur),
        Link::LABEL_OPEN => try_parse_link(cur),
        _ => None,
    }
}

/// `**text**` or `__text__`, closed by the nearest matching pair.
///
/// The cursor only moves on success.
fn try_parse_bold(cur: &mut Cursor<'_>, b: u8) -> Option<InlineNode> {
    let open = cur.i;
    let close = cur.find_from(open + 2, &Emphasis::strong(b))?;
    let end = close + 2;

    let node = InlineNode {
        span: Span::Bold {
            text: cur.slice(open + 2, close).to_string(),
        },
        full: cur.range(open, end),
        marker: Marker::from_byte(b),
    };
    cur.jump_to(end);
    Some(node)
}

/// `*text*` or `_text_`, closed by the nearest same character.
fn try_parse_italic(cur: &mut Cursor<'_>, b: u8) -> Option<InlineNode> {
    let open = cur.i;
    let close = cur.find_from(open + 1, &[b])?;
    let end = close + 1;

    let node = InlineNode {
        span: Span::Italic {
            text: cur.slice(open + 1, close).to_string(),
        },
        full: cur.range(open, end),
        marker: Marker::from_byte(b),
    };
    cur.jump_to(end);
    Some(node)
}

/// `` `code` ``, closed by the nearest backtick.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let open = cur.i;
    let close = cur.find_from(open + 1, &[CodeSpan::TICK])?;
    let end = close + 1;

    let node = InlineNode {
        span: Span::InlineCode {
            text: cur.slice(open + 1, close).to_string(),
        },
        full: cur.range(open, end),
        marker: None,
    };
    cur.jump_to(end);
    Some(node)
}

/// `[label](target)` with no brackets inside the label and no parens inside
/// the target.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let open = cur.i;

    let label_end = cur.find_any_from(open + 1, &[Link::LABEL_OPEN, Link::LABEL_CLOSE])?;
    if cur.byte_at(label_end) != Some(Link::LABEL_CLOSE)
        || cur.byte_at(label_end + 1) != Some(Link::TARGET_OPEN)
    {
        return None;
    }

    let target_start = label_end + 2;
    let target_end =
        cur.find_any_from(target_start, &[Link::TARGET_OPEN, Link::TARGET_CLOSE])?;
    if cur.byte_at(target_end) != Some(Link::TARGET_CLOSE) {
        return None;
    }
    let end = target_end + 1;

    let node = InlineNode {
        span: Span::Link {
            label: cur.slice(open + 1, label_end).to_string(),
            target: cur.slice(target_start, target_end).to_string(),
        },
        full: cur.range(open, end),
        marker: None,
    };
    cur.jump_to(end);
    Some(node)
}
