//! Property-based tests for the segmenter and inline scanner.
//!
//! Inputs are drawn from an alphabet dense in marker characters so that
//! headings, fences, quotes, lists and every inline construct show up often,
//! alongside arbitrary strings for totality.

use planmark_engine::{
    Span, parse_document, parse_inline, parsing::snapshot, scan_inline, segment, to_markdown,
};
use proptest::prelude::*;

/// Lines built from marker-heavy fragments, joined with `\n` or `\r\n`.
fn markdownish() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("# ".to_string()),
        Just("### ".to_string()),
        Just("```".to_string()),
        Just("> ".to_string()),
        Just("- ".to_string()),
        Just("* ".to_string()),
        Just("1. ".to_string()),
        Just("---".to_string()),
        Just("**".to_string()),
        Just("__".to_string()),
        Just("[".to_string()),
        Just("](".to_string()),
        Just(")".to_string()),
        "[*_`#>a-z \t]{0,6}",
        "[上午🏯]{0,2}",
    ];
    let line = prop::collection::vec(fragment, 0..5).prop_map(|parts| parts.concat());
    (prop::collection::vec(line, 0..12), any::<bool>())
        .prop_map(|(lines, crlf)| lines.join(if crlf { "\r\n" } else { "\n" }))
}

proptest! {
    #[test]
    fn segment_is_total(input in any::<String>()) {
        let doc = parse_document(&input);
        snapshot::invariants(&input, &doc);
    }

    #[test]
    fn markdownish_input_keeps_invariants(input in markdownish()) {
        let doc = parse_document(&input);
        snapshot::invariants(&input, &doc);
    }

    #[test]
    fn inline_nodes_rebuild_their_input(input in "[*_`\\[\\]()a-z ]{0,40}") {
        let nodes = parse_inline(0, &input);
        let rebuilt: String = nodes.iter().map(|n| n.to_markdown()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn plain_spans_never_touch(input in "[*_`\\[\\]()a-z ]{0,40}") {
        let spans = scan_inline(&input);
        for pair in spans.windows(2) {
            let both_plain =
                matches!(pair[0], Span::Plain { .. }) && matches!(pair[1], Span::Plain { .. });
            prop_assert!(!both_plain, "adjacent plain spans in {:?}", spans);
        }
    }

    #[test]
    fn serialized_blocks_segment_the_same(input in markdownish()) {
        let blocks = segment(&input);
        prop_assert_eq!(segment(&to_markdown(&blocks)), blocks);
    }
}
