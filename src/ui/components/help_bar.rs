//! Contextual help bar component.
//!
//! Displays context-sensitive keyboard shortcut hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::{Palette, Theme};

/// Render a one-line help bar with the key hints for `context`.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext, theme: Theme) {
    let hints = get_context_hints(context);

    let spans = parse_hints_to_spans(&hints, &theme.palette());
    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}

/// Parse hint text into styled spans.
///
/// Highlights the key portion (in brackets) differently from the description.
fn parse_hints_to_spans(hints: &str, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let chars = hints.chars().peekable();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in chars {
        match c {
            '[' => {
                // Flush any pending text
                if !current.is_empty() {
                    spans.push(Span::styled(
                        current.clone(),
                        Style::default().fg(palette.muted),
                    ));
                    current.clear();
                }
                in_bracket = true;
                current.push(c);
            }
            ']' => {
                current.push(c);
                if in_bracket {
                    // This is a key, style it differently
                    spans.push(Span::styled(
                        current.clone(),
                        Style::default().fg(palette.accent),
                    ));
                    current.clear();
                    in_bracket = false;
                }
            }
            _ => {
                current.push(c);
            }
        }
    }

    // Flush any remaining text
    if !current.is_empty() {
        spans.push(Span::styled(current, Style::default().fg(palette.muted)));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hints_to_spans_simple() {
        let hints = "[j/k] row";
        let spans = parse_hints_to_spans(hints, &Palette::default());
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_parse_hints_to_spans_multiple_keys() {
        let hints = "[j/k] row  [Enter] sort  [Space] select";
        let spans = parse_hints_to_spans(hints, &Palette::default());
        // [j/k], " row  ", [Enter], " sort  ", [Space], " select"
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn test_parse_hints_to_spans_empty() {
        let hints = "";
        let spans = parse_hints_to_spans(hints, &Palette::default());
        assert!(spans.is_empty());
    }

    #[test]
    fn test_key_spans_use_accent() {
        let palette = Palette::default();
        let spans = parse_hints_to_spans("[a] all", &palette);
        assert_eq!(spans[0].content, "[a]");
        assert_eq!(spans[0].style.fg, Some(palette.accent));
        assert_eq!(spans[1].style.fg, Some(palette.muted));
    }

    #[test]
    fn test_parse_hints_to_spans_no_brackets() {
        let hints = "just text";
        let spans = parse_hints_to_spans(hints, &Palette::default());
        assert_eq!(spans.len(), 1);
    }
}
