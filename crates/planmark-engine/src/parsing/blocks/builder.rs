use crate::parsing::source::{TextRange, lines_with_ranges, preview, slice};

use super::{
    classify::{LineClass, LineClassifier, LineKind},
    content::{ContentLine, ContentView},
    kinds::{CodeFence, ListMarker},
    types::{Block, BlockNode},
};

/// Phase 2 of block parsing: folds classified lines into [`BlockNode`]s.
///
/// Every rule takes the cursor index of the line it starts at and returns
/// the finished node together with the index of the first line it did not
/// consume. There is no other state between rules.
pub struct BlockBuilder<'a> {
    source: &'a str,
    lines: Vec<LineClass<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(source: &'a str) -> Self {
        let classifier = LineClassifier;
        let lines = lines_with_ranges(source)
            .map(|l| classifier.classify(l))
            .collect();
        Self { source, lines }
    }

    /// Number of source lines seen.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn build(&self) -> Vec<BlockNode> {
        let mut out = vec![];
        let mut i = 0;

        while i < self.lines.len() {
            let (node, next) = match &self.lines[i].kind {
                LineKind::Blank => {
                    i += 1;
                    continue;
                }
                LineKind::Fence { language } => self.fence(i, language.clone()),
                LineKind::Heading { level, text } => self.heading(i, *level, *text),
                LineKind::Rule => self.rule(i),
                LineKind::Quote { .. } => self.quote(i),
                LineKind::ListItem { marker, .. } => self.list(i, *marker),
                LineKind::Text { content } => self.paragraph(i, *content),
            };
            debug_assert!(next > i, "block rule must consume at least one line");
            out.push(node);
            i = next;
        }

        out
    }

    fn text(&self, r: TextRange) -> String {
        slice(self.source, r).to_string()
    }

    fn span(&self, first: usize, next: usize) -> TextRange {
        let start = self.lines[first].line.range;
        let end = self.lines[next - 1].line.range;
        start.cover(end)
    }

    fn single(&self, i: usize, block: Block, content: ContentView) -> (BlockNode, usize) {
        let node = BlockNode {
            block,
            span: self.lines[i].line.range,
            lines: i..i + 1,
            content,
        };
        (node, i + 1)
    }

    fn fence(&self, open: usize, language: Option<String>) -> (BlockNode, usize) {
        let mut content = vec![];
        let mut j = open + 1;
        let mut closed = false;

        while j < self.lines.len() {
            let line = self.lines[j].line;
            j += 1;
            if CodeFence::closes(line.text) {
                closed = true;
                break;
            }
            content.push(ContentLine {
                raw_line: line.range,
                prefix: TextRange::empty(line.start()),
                content: line.text_range(),
            });
        }

        if !closed {
            let opener = self.lines[open].line.text_range();
            log::debug!(
                "unterminated code fence {:?} opened on line {}",
                preview(self.source, opener, 20),
                open + 1
            );
        }

        let text = content
            .iter()
            .map(|l| slice(self.source, l.content))
            .collect::<Vec<_>>()
            .join("\n");

        let node = BlockNode {
            block: Block::CodeBlock { language, text },
            span: self.span(open, j),
            lines: open..j,
            content: ContentView::Lines(content),
        };
        (node, j)
    }

    fn heading(&self, i: usize, level: u8, text: TextRange) -> (BlockNode, usize) {
        let block = Block::Heading {
            level,
            text: self.text(text),
        };
        self.single(i, block, ContentView::Contiguous(text))
    }

    fn rule(&self, i: usize) -> (BlockNode, usize) {
        self.single(i, Block::Rule, ContentView::Lines(vec![]))
    }

    fn paragraph(&self, i: usize, content: TextRange) -> (BlockNode, usize) {
        let block = Block::Paragraph {
            text: self.text(content),
        };
        self.single(i, block, ContentView::Contiguous(content))
    }

    fn quote(&self, first: usize) -> (BlockNode, usize) {
        let mut lines = vec![];
        let mut j = first;

        while let Some(LineClass {
            line,
            kind: LineKind::Quote { prefix, content },
        }) = self.lines.get(j)
        {
            lines.push(ContentLine {
                raw_line: line.range,
                prefix: *prefix,
                content: *content,
            });
            j += 1;
        }

        let view = ContentView::Lines(lines);
        let node = BlockNode {
            block: Block::Blockquote {
                text: view.join_content(self.source),
            },
            span: self.span(first, j),
            lines: first..j,
            content: view,
        };
        (node, j)
    }

    fn list(&self, first: usize, family: ListMarker) -> (BlockNode, usize) {
        let mut lines = vec![];
        let mut j = first;

        while let Some(LineClass {
            line,
            kind:
                LineKind::ListItem {
                    marker,
                    prefix,
                    content,
                },
        }) = self.lines.get(j)
        {
            if *marker != family {
                break;
            }
            lines.push(ContentLine {
                raw_line: line.range,
                prefix: *prefix,
                content: *content,
            });
            j += 1;
        }

        let items = lines.iter().map(|l| self.text(l.content)).collect();
        let node = BlockNode {
            block: Block::List { items },
            span: self.span(first, j),
            lines: first..j,
            content: ContentView::Lines(lines),
        };
        (node, j)
    }
}
