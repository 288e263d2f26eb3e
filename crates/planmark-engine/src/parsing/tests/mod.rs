//! End-to-end tests for the parsing module: the documented behaviours of
//! `segment`, `scan_inline` and the `Document` API.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::Block,
    inline::{Span, scan_inline},
    limits::{OversizePolicy, ParseError, ParseOptions},
    parse_document, parse_document_with, parse_inline_for_block, segment, snapshot, spans_for_block,
};

fn para(t: &str) -> Block {
    Block::Paragraph { text: t.into() }
}

#[test]
fn fence_tolerance() {
    assert_eq!(
        segment("```py\nx=1\n```"),
        vec![Block::CodeBlock {
            language: Some("py".into()),
            text: "x=1".into()
        }]
    );
}

#[test]
fn unterminated_fence() {
    assert_eq!(
        segment("```\nfoo"),
        vec![Block::CodeBlock {
            language: None,
            text: "foo".into()
        }]
    );
}

#[test]
fn list_grouping() {
    assert_eq!(
        segment("- a\n- b\n\nc"),
        vec![
            Block::List {
                items: vec!["a".into(), "b".into()]
            },
            para("c"),
        ]
    );
}

#[test]
fn inline_precedence() {
    assert_eq!(
        scan_inline("**_x_**"),
        vec![Span::Bold { text: "_x_".into() }]
    );
}

/// Adjacent plain text is coalesced, so an unmatched trigger does not split
/// the run.
#[test]
fn unmatched_trigger_coalesces() {
    assert_eq!(
        scan_inline("a * b"),
        vec![Span::Plain {
            text: "a * b".into()
        }]
    );
}

#[test]
fn link_extraction() {
    assert_eq!(
        scan_inline("[home](https://x.io)"),
        vec![Span::Link {
            label: "home".into(),
            target: "https://x.io".into()
        }]
    );
}

#[rstest]
#[case("")]
#[case("   \n\t\n")]
#[case("***")]
#[case("[]()")]
#[case("```")]
#[case(">")]
#[case("#")]
#[case("- ")]
#[case("\u{0}\u{1}\u{fffd}")]
fn degenerate_inputs_are_total(#[case] input: &str) {
    let doc = parse_document(input);
    snapshot::invariants(input, &doc);
    let _ = scan_inline(input);
}

#[test]
fn malformed_markers_fall_through_to_paragraph() {
    assert_eq!(
        segment("#no-space\n-no-space\n1.no-space\n--\n```"),
        vec![
            para("#no-space"),
            para("-no-space"),
            para("1.no-space"),
            para("--"),
            Block::CodeBlock {
                language: None,
                text: String::new()
            },
        ]
    );
}

#[rstest]
#[case("#\tx")]
#[case("-\tx")]
#[case("*\tx")]
#[case("1.\tx")]
fn tab_after_marker_is_a_paragraph(#[case] input: &str) {
    assert_eq!(segment(input), vec![para(input)]);
}

#[test]
fn heading_levels_and_overflow() {
    assert_eq!(
        segment("# one\n###### six\n####### seven"),
        vec![
            Block::Heading {
                level: 1,
                text: "one".into()
            },
            Block::Heading {
                level: 6,
                text: "six".into()
            },
            para("####### seven"),
        ]
    );
}

#[test]
fn quote_ends_at_first_unprefixed_line() {
    assert_eq!(
        segment("> a\n> b\nc\n> d"),
        vec![
            Block::Blockquote {
                text: "a\nb".into()
            },
            para("c"),
            Block::Blockquote { text: "d".into() },
        ]
    );
}

#[test]
fn crlf_input() {
    let doc = parse_document("# T\r\n- a\r\n```\r\nx\r\n```\r\n");
    assert_eq!(
        doc.clone().into_blocks(),
        vec![
            Block::Heading {
                level: 1,
                text: "T".into()
            },
            Block::List {
                items: vec!["a".into()]
            },
            Block::CodeBlock {
                language: None,
                text: "x\r".into()
            },
        ]
    );
}

#[test]
fn inline_units_follow_block_kind() {
    let src = "## **not scanned**\n- *a*\n- b\n> `raw`\ntext **bold**";
    let doc = parse_document(src);

    let units: Vec<usize> = doc
        .blocks
        .iter()
        .map(|b| parse_inline_for_block(src, b).len())
        .collect();
    assert_eq!(units, vec![0, 2, 0, 1]);

    let spans = spans_for_block(&doc.blocks[3].block);
    assert_eq!(
        spans,
        vec![vec![
            Span::Plain {
                text: "text ".into()
            },
            Span::Bold {
                text: "bold".into()
            },
        ]]
    );
}

#[test]
fn code_blocks_by_language() {
    let src = "Plan\n```json\n{\"days\": 2}\n```\n```JSON\n[]\n```\n```py\nx\n```";
    let doc = parse_document(src);
    let payloads: Vec<_> = doc.code_blocks("json").collect();
    assert_eq!(payloads, vec!["{\"days\": 2}", "[]"]);
    assert_eq!(doc.code_blocks("yaml").count(), 0);
}

#[test]
fn unlimited_options_parse_everything() {
    let src = "a\nb";
    let doc = parse_document_with(src, &ParseOptions::default()).unwrap();
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.truncated_at, None);
}

#[test]
fn oversize_input_is_rejected() {
    let options = ParseOptions::with_limit(4, OversizePolicy::Reject);
    assert_eq!(
        parse_document_with("hello", &options),
        Err(ParseError::InputTooLarge { len: 5, max: 4 })
    );
    assert!(parse_document_with("hell", &options).is_ok());
}

#[test]
fn oversize_input_is_truncated_at_char_boundary() {
    let src = "ab\n上午";
    // limit falls inside the first CJK char (bytes 3..6)
    let options = ParseOptions::with_limit(4, OversizePolicy::Truncate);
    let doc = parse_document_with(src, &options).unwrap();
    assert_eq!(doc.truncated_at, Some(3));
    assert_eq!(doc.clone().into_blocks(), vec![para("ab")]);
    snapshot::invariants(src, &doc);
}
