//! Markdown-to-styled-text conversion for terminal rendering.
//!
//! Converts markdown source into ratatui [`Text`] via pulldown-cmark.
//! Inline emphasis maps to style modifiers, code gets a distinct color,
//! and raw HTML (block and inline) is dropped entirely, so the output is
//! safe to write into a buffer without further sanitization. The
//! conversion is infallible: malformed markdown degrades to plain text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Trait for converting markdown source into displayable styled text.
///
/// Implementations own the trust boundary: whatever they return is written
/// into the terminal buffer as-is, so they must never emit raw markup.
pub trait MarkdownRenderer {
    /// Converts markdown source into styled text.
    fn render(&self, source: &str) -> Text<'static>;
}

/// The default [`MarkdownRenderer`], backed by pulldown-cmark.
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, source: &str) -> Text<'static> {
        let options = Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(source, options);

        let mut conv = Converter::default();
        for event in parser {
            conv.event(event);
        }
        conv.finish()
    }
}

/// Style applied to inline code and code block content.
fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Style applied to link text. The destination URL is not emitted.
fn link_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

/// Accumulates parser events into styled lines.
///
/// Inline state is tracked as nesting depths rather than booleans so that
/// nested emphasis (`**a _b_ c**`) unwinds correctly.
#[derive(Default)]
struct Converter {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    strike: usize,
    link: usize,
    heading: bool,
    in_code_block: bool,
    /// Stack of active lists; `Some(n)` carries the next ordered-item number.
    lists: Vec<Option<u64>>,
}

impl Converter {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    self.code_block_text(&text);
                } else {
                    self.push_text(&text, self.inline_style());
                }
            }
            Event::Code(code) => {
                self.push_text(&code, self.inline_style().patch(code_style()));
            }
            Event::SoftBreak => self.push_text(" ", self.inline_style()),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.start_block();
                self.spans.push(Span::styled(
                    "──────────",
                    Style::default().fg(Color::DarkGray),
                ));
                self.flush_line();
            }
            // Raw HTML never reaches the output buffer.
            Event::Html(_) | Event::InlineHtml(_) => {}
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.start_block(),
            Tag::Heading { .. } => {
                self.start_block();
                self.heading = true;
            }
            Tag::BlockQuote(_) => self.start_block(),
            Tag::CodeBlock(_) => {
                self.start_block();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.start_block();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{indent}{n}. ");
                        *n += 1;
                        m
                    }
                    _ => format!("{indent}• "),
                };
                self.spans
                    .push(Span::styled(marker, Style::default().fg(Color::DarkGray)));
            }
            Tag::Emphasis => self.italic += 1,
            Tag::Strong => self.bold += 1,
            Tag::Strikethrough => self.strike += 1,
            Tag::Link { .. } | Tag::Image { .. } => self.link += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush_line(),
            TagEnd::Heading(_) => {
                self.flush_line();
                self.heading = false;
            }
            TagEnd::CodeBlock => {
                self.flush_line();
                self.in_code_block = false;
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.lists.pop();
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis => self.italic = self.italic.saturating_sub(1),
            TagEnd::Strong => self.bold = self.bold.saturating_sub(1),
            TagEnd::Strikethrough => self.strike = self.strike.saturating_sub(1),
            TagEnd::Link | TagEnd::Image => self.link = self.link.saturating_sub(1),
            _ => {}
        }
    }

    /// Computes the style for inline text from the current nesting state.
    fn inline_style(&self) -> Style {
        let mut style = Style::default();
        if self.heading || self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strike > 0 {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.link > 0 {
            style = style.patch(link_style());
        }
        style
    }

    fn push_text(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        self.spans.push(Span::styled(text.to_string(), style));
    }

    /// Code block content keeps its own line structure.
    fn code_block_text(&mut self, text: &str) {
        let style = code_style();
        let mut first = true;
        for piece in text.split('\n') {
            if !first {
                self.flush_line();
            }
            first = false;
            self.push_text(piece, style);
        }
    }

    /// Pushes the pending spans as a completed line, if any.
    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        }
    }

    /// Starts a new block: flushes pending content and inserts one blank
    /// separator line between adjacent blocks.
    fn start_block(&mut self) {
        self.flush_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        while matches!(self.lines.last(), Some(line) if line.spans.is_empty()) {
            self.lines.pop();
        }
        Text::from(self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> Text<'static> {
        CmarkRenderer.render(source)
    }

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn plain_text_single_line() {
        let text = render("hello");
        assert_eq!(plain(&text), vec!["hello"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let text = render("");
        assert!(text.lines.is_empty());
    }

    #[test]
    fn strong_maps_to_bold() {
        let text = render("**bold** plain");
        let line = &text.lines[0];
        let bold_span = line
            .spans
            .iter()
            .find(|s| s.content.as_ref() == "bold")
            .unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
        let plain_span = line
            .spans
            .iter()
            .find(|s| s.content.as_ref() == " plain")
            .unwrap();
        assert!(!plain_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn emphasis_maps_to_italic() {
        let text = render("*lean*");
        let span = &text.lines[0].spans[0];
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn strikethrough_maps_to_crossed_out() {
        let text = render("~~gone~~");
        let span = &text.lines[0].spans[0];
        assert!(span.style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn inline_code_is_colored() {
        let text = render("run `cargo fix`");
        let code = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content.as_ref() == "cargo fix")
            .unwrap();
        assert_eq!(code.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn soft_break_joins_with_space() {
        let text = render("one\ntwo");
        assert_eq!(plain(&text), vec!["one two"]);
    }

    #[test]
    fn hard_break_starts_new_line() {
        let text = render("one  \ntwo");
        assert_eq!(plain(&text), vec!["one", "two"]);
    }

    #[test]
    fn paragraphs_separated_by_blank_line() {
        let text = render("first\n\nsecond");
        assert_eq!(plain(&text), vec!["first", "", "second"]);
    }

    #[test]
    fn heading_is_bold() {
        let text = render("# Title");
        let span = &text.lines[0].spans[0];
        assert_eq!(span.content.as_ref(), "Title");
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn list_items_get_bullets() {
        let text = render("- one\n- two");
        let lines = plain(&text);
        assert_eq!(lines, vec!["• one", "• two"]);
    }

    #[test]
    fn ordered_list_items_are_numbered() {
        let text = render("1. one\n2. two");
        let lines = plain(&text);
        assert_eq!(lines, vec!["1. one", "2. two"]);
    }

    #[test]
    fn link_text_kept_url_dropped() {
        let text = render("see [the docs](https://example.com/x)");
        let lines = plain(&text);
        assert_eq!(lines, vec!["see the docs"]);
        let link = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content.as_ref() == "the docs")
            .unwrap();
        assert!(link.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn raw_html_is_dropped() {
        let text = render("safe <b onclick=\"x()\">shown</b> text");
        let joined = plain(&text).join("\n");
        assert!(!joined.contains('<'));
        assert!(!joined.contains("onclick"));
        assert!(joined.contains("safe"));
        assert!(joined.contains("shown"));
    }

    #[test]
    fn html_block_is_dropped() {
        let text = render("<div>\nnope\n</div>");
        let joined = plain(&text).join("\n");
        assert!(!joined.contains("<div>"));
        assert!(!joined.contains("nope"));
    }

    #[test]
    fn code_block_preserves_lines() {
        let text = render("```\nlet x = 1;\nlet y = 2;\n```");
        let lines = plain(&text);
        assert_eq!(lines, vec!["let x = 1;", "let y = 2;"]);
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn rendering_is_pure() {
        let a = render("**x** and `y`");
        let b = render("**x** and `y`");
        assert_eq!(a, b);
    }
}
