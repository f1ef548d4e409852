//! Code example → styled `Text` renderer.
//!
//! Draws one snippet inside a light box frame with a caption, mirroring
//! the shape used for fenced blocks in chat-style TUIs:
//!
//! ```text
//! ╭── SwiftUI ──
//! │ struct Greeting: View {
//! │   ...
//! ╰──
//! ```
//!
//! Syntax highlighting comes from syntect; lines named in the example's
//! `highlight_lines` get a background emphasis so a comparison can point
//! at the one construct that differs.

use std::sync::LazyLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::catalog::CodeExample;
use crate::tui::palette::Palette;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Render a code example as a framed, highlighted block.
///
/// `syntax_token` picks the grammar (`"swift"` / `"ts"`); `caption` is the
/// frame title; `code_theme` names a syntect theme (an unknown name falls
/// back to plain text rather than failing the draw).
pub fn render_code(
    example: &CodeExample,
    syntax_token: &str,
    caption: &str,
    code_theme: &str,
    palette: &Palette,
) -> Text<'static> {
    let mut text = Text::default();
    let border = palette.border_style();

    // Top border: ╭── caption ──
    text.lines.push(Line::from(vec![
        Span::styled("╭── ", border),
        Span::styled(caption.to_owned(), border.add_modifier(Modifier::BOLD)),
        Span::styled(" ──", border),
    ]));

    let mut highlighter = SYNTAX_SET
        .find_syntax_by_token(syntax_token)
        .and_then(|syn| {
            THEME_SET
                .themes
                .get(code_theme)
                .map(|theme| HighlightLines::new(syn, theme))
        });

    for (index, line) in LinesWithEndings::from(example.code).enumerate() {
        let emphasized = example.highlight_lines.contains(&(index + 1));
        let mut spans = vec![Span::styled("│ ", border)];

        match highlighter.as_mut() {
            Some(hl) => match hl.highlight_line(line, &SYNTAX_SET) {
                Ok(ranges) => {
                    for (hl_style, frag) in ranges {
                        let content = frag.trim_end_matches('\n').replace('\t', "    ");
                        if content.is_empty() {
                            continue;
                        }
                        let fg = Color::Rgb(
                            hl_style.foreground.r,
                            hl_style.foreground.g,
                            hl_style.foreground.b,
                        );
                        let mut style = Style::default().fg(fg);
                        if emphasized {
                            style = style.bg(palette.highlight_line_bg);
                        }
                        spans.push(Span::styled(content, style));
                    }
                }
                Err(_) => spans.push(plain_span(line, emphasized, palette)),
            },
            None => spans.push(plain_span(line, emphasized, palette)),
        }

        text.lines.push(Line::from(spans));
    }

    // Bottom border
    text.lines.push(Line::from(Span::styled("╰──", border)));
    text
}

fn plain_span(line: &str, emphasized: bool, palette: &Palette) -> Span<'static> {
    let content = line.trim_end_matches('\n').replace('\t', "    ");
    let mut style = palette.text_style();
    if emphasized {
        style = style.bg(palette.highlight_line_bg);
    }
    Span::styled(content, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CodeExample;
    use crate::core::theme::Theme;

    fn palette() -> Palette {
        Palette::for_theme(Theme::Dark)
    }

    fn flatten(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn frame_structure_surrounds_code() {
        let example = CodeExample::new("let x = 1\nlet y = 2");
        let text = render_code(&example, "swift", "Swift", "base16-ocean.dark", &palette());
        let lines = flatten(&text);

        assert!(lines[0].starts_with('╭'), "top border, got {:?}", lines[0]);
        assert!(lines[0].contains("Swift"));
        assert!(lines[1].starts_with("│ "));
        assert!(lines[1].contains("let x = 1"));
        assert!(lines[2].contains("let y = 2"));
        assert!(lines.last().unwrap().starts_with('╰'));
    }

    #[test]
    fn unknown_theme_still_renders_plain() {
        let example = CodeExample::new("let x = 1");
        let text = render_code(&example, "swift", "Swift", "no-such-theme", &palette());
        let lines = flatten(&text);
        assert!(lines[1].contains("let x = 1"));
    }

    #[test]
    fn unknown_syntax_still_renders_plain() {
        let example = CodeExample::new("whatever this is");
        let text = render_code(&example, "klingon", "?", "base16-ocean.dark", &palette());
        let lines = flatten(&text);
        assert!(lines[1].contains("whatever this is"));
    }

    #[test]
    fn highlight_lines_get_background() {
        let p = palette();
        let example = CodeExample::highlighting("plain\nmarked", &[2]);
        let text = render_code(&example, "klingon", "?", "base16-ocean.dark", &p);

        // Line index 1 in the text is code line 1 ("plain"), index 2 is "marked"
        let plain_line = &text.lines[1];
        let marked_line = &text.lines[2];
        assert!(plain_line.spans[1].style.bg.is_none());
        assert_eq!(marked_line.spans[1].style.bg, Some(p.highlight_line_bg));
    }

    #[test]
    fn height_is_code_lines_plus_frame() {
        let example = CodeExample::new("a\nb\nc");
        let text = render_code(&example, "swift", "Swift", "base16-ocean.dark", &palette());
        assert_eq!(text.lines.len(), 5); // 3 code + 2 borders
    }
}
