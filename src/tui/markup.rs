//! Inline markup → styled `Line` renderer.
//!
//! Explanations and tips carry a restricted markup subset: `**bold**` and
//! `` `code` `` spans, nothing else. Rather than hand-rolling a scanner,
//! this walks pulldown-cmark's event stream and honors only the events
//! that subset can produce - Strong, Code, and plain text. Malformed
//! markup (an unclosed `**`) renders however the parser resolves it,
//! which in practice means literally.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::palette::Palette;

/// Render one explanation or tip into a single wrappable line of spans.
///
/// Returns owned spans (`'static`) so callers aren't constrained by input
/// lifetime.
pub fn render_inline(content: &str, palette: &Palette) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut bold_depth: u32 = 0;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Strong) => bold_depth += 1,
            Event::End(TagEnd::Strong) => bold_depth = bold_depth.saturating_sub(1),
            Event::Text(t) => {
                let style = if bold_depth > 0 {
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD)
                } else {
                    palette.text_style()
                };
                spans.push(Span::styled(t.to_string(), style));
            }
            Event::Code(c) => {
                spans.push(Span::styled(c.to_string(), palette.inline_code_style()));
            }
            // Content is single-paragraph; breaks collapse to a space.
            Event::SoftBreak | Event::HardBreak => {
                spans.push(Span::styled(" ".to_string(), palette.text_style()));
            }
            // Everything else the restricted subset can't produce: the
            // wrapper tags carry no text of their own, so skipping them
            // still renders all content through Event::Text above.
            _ => {}
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;

    fn palette() -> Palette {
        Palette::for_theme(Theme::Dark)
    }

    fn flatten(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn bold_spans_are_bold() {
        let line = render_inline("a **strong** word", &palette());
        let bold = line.spans.iter().find(|s| s.content == "strong").unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(flatten(&line), "a strong word");
    }

    #[test]
    fn code_spans_get_code_style() {
        let p = palette();
        let line = render_inline("use `let` here", &p);
        let code = line.spans.iter().find(|s| s.content == "let").unwrap();
        assert_eq!(code.style.bg, Some(p.inline_code_bg));
        assert_eq!(code.style.fg, Some(p.inline_code_fg));
    }

    #[test]
    fn plain_text_uses_text_color() {
        let p = palette();
        let line = render_inline("nothing fancy", &p);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(p.text));
    }

    #[test]
    fn surrounding_text_not_bold() {
        let line = render_inline("before **mid** after", &palette());
        let plain = line.spans.iter().find(|s| s.content == "before ").unwrap();
        assert!(!plain.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn bold_and_code_can_mix() {
        let line = render_inline("**bold** then `code` then text", &palette());
        assert_eq!(flatten(&line), "bold then code then text");
    }

    #[test]
    fn unclosed_bold_renders_literally() {
        // No panic, content preserved as written.
        let line = render_inline("oops **unclosed", &palette());
        assert_eq!(flatten(&line), "oops **unclosed");
    }

    #[test]
    fn rendering_is_deterministic() {
        let p = palette();
        let a = render_inline("mix of **b** and `c`", &p);
        let b = render_inline("mix of **b** and `c`", &p);
        assert_eq!(a, b);
    }
}
