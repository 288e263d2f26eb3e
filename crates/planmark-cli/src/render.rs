use planmark_config::RenderConfig;
use planmark_engine::{RenderAdapter, Span};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span as StyledSpan},
};

/// Renders blocks as styled terminal lines, one blank line between blocks.
pub struct TerminalRenderer {
    bullet: String,
    rule_width: usize,
    lines: Vec<Line<'static>>,
}

impl TerminalRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            bullet: config.bullet.clone(),
            rule_width: usize::from(config.rule_width),
            lines: Vec::new(),
        }
    }

    fn start_block(&mut self) {
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn styled(spans: &[Span]) -> Vec<StyledSpan<'static>> {
        spans
            .iter()
            .map(|span| match span {
                Span::Bold { text } => {
                    StyledSpan::styled(text.clone(), Style::new().add_modifier(Modifier::BOLD))
                }
                Span::Italic { text } => {
                    StyledSpan::styled(text.clone(), Style::new().add_modifier(Modifier::ITALIC))
                }
                Span::InlineCode { text } => {
                    StyledSpan::styled(text.clone(), Style::new().fg(Color::Green))
                }
                Span::Link { label, .. } => StyledSpan::styled(
                    label.clone(),
                    Style::new().add_modifier(Modifier::UNDERLINED),
                ),
                Span::Plain { text } => StyledSpan::raw(text.clone()),
            })
            .collect()
    }
}

fn heading_style(level: u8) -> Style {
    match level {
        1 => Style::new()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        3 => Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
        _ => Style::new().add_modifier(Modifier::BOLD),
    }
}

impl RenderAdapter for TerminalRenderer {
    type Output = Vec<Line<'static>>;

    fn heading(&mut self, level: u8, text: &str) {
        self.start_block();
        self.lines
            .push(Line::from(StyledSpan::styled(text.to_string(), heading_style(level))));
    }

    fn paragraph(&mut self, spans: &[Span]) {
        self.start_block();
        self.lines.push(Line::from(Self::styled(spans)));
    }

    fn list(&mut self, items: &[Vec<Span>]) {
        self.start_block();
        for item in items {
            let mut spans = vec![StyledSpan::raw(format!("{} ", self.bullet))];
            spans.extend(Self::styled(item));
            self.lines.push(Line::from(spans));
        }
    }

    fn code_block(&mut self, language: Option<&str>, text: &str) {
        self.start_block();
        if let Some(lang) = language {
            self.lines.push(Line::from(StyledSpan::styled(
                lang.to_string(),
                Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }
        if text.is_empty() {
            return;
        }
        for line in text.split('\n') {
            self.lines.push(Line::from(StyledSpan::styled(
                format!("    {line}"),
                Style::new().fg(Color::Green),
            )));
        }
    }

    fn blockquote(&mut self, text: &str) {
        self.start_block();
        for line in text.split('\n') {
            self.lines.push(Line::from(vec![
                StyledSpan::styled("│ ", Style::new().fg(Color::DarkGray)),
                StyledSpan::styled(line.to_string(), Style::new().add_modifier(Modifier::ITALIC)),
            ]));
        }
    }

    fn rule(&mut self) {
        self.start_block();
        self.lines.push(Line::from(StyledSpan::styled(
            "─".repeat(self.rule_width),
            Style::new().fg(Color::DarkGray),
        )));
    }

    fn finish(self) -> Vec<Line<'static>> {
        self.lines
    }
}

/// The text of each line with styles dropped.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    let mut out = String::new();
    for line in lines {
        for span in &line.spans {
            out.push_str(&span.content);
        }
        out.push('\n');
    }
    out
}
