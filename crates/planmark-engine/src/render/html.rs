use html_escape::{encode_double_quoted_attribute, encode_text};

use super::RenderAdapter;
use crate::parsing::inline::Span;

/// Renders blocks as an HTML fragment, one element per line.
///
/// Links render as emphasised labels; targets are not emitted.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    out: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_spans(&mut self, spans: &[Span]) {
        for span in spans {
            match span {
                Span::Bold { text } => self.wrap("strong", text),
                Span::Italic { text } => self.wrap("em", text),
                Span::InlineCode { text } => self.wrap("code", text),
                Span::Link { label, .. } => self.wrap("em", label),
                Span::Plain { text } => self.out.push_str(&encode_text(text)),
            }
        }
    }

    fn wrap(&mut self, tag: &str, text: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(&encode_text(text));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}

impl RenderAdapter for HtmlRenderer {
    type Output = String;

    fn heading(&mut self, level: u8, text: &str) {
        let tag = format!("h{}", level.clamp(1, 6));
        self.wrap(&tag, text);
        self.out.push('\n');
    }

    fn paragraph(&mut self, spans: &[Span]) {
        self.out.push_str("<p>");
        self.push_spans(spans);
        self.out.push_str("</p>\n");
    }

    fn list(&mut self, items: &[Vec<Span>]) {
        self.out.push_str("<ul>\n");
        for item in items {
            self.out.push_str("<li>");
            self.push_spans(item);
            self.out.push_str("</li>\n");
        }
        self.out.push_str("</ul>\n");
    }

    fn code_block(&mut self, language: Option<&str>, text: &str) {
        match language {
            Some(lang) => {
                self.out.push_str("<pre><code class=\"language-");
                self.out.push_str(&encode_double_quoted_attribute(lang));
                self.out.push_str("\">");
            }
            None => self.out.push_str("<pre><code>"),
        }
        self.out.push_str(&encode_text(text));
        self.out.push_str("</code></pre>\n");
    }

    fn blockquote(&mut self, text: &str) {
        self.wrap("blockquote", text);
        self.out.push('\n');
    }

    fn rule(&mut self) {
        self.out.push_str("<hr>\n");
    }

    fn finish(self) -> String {
        self.out
    }
}
