//! Showcase utility functions
//!
//! Contains helper functions used across showcase components

use crate::events::Source;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const PYTHON_KEYWORDS: [&str; 20] = [
    "and", "as", "class", "def", "elif", "else", "for", "from", "if", "import", "in", "is",
    "lambda", "not", "or", "pass", "return", "try", "while", "with",
];

/// Get a ratatui color for an activity log entry based on what raised it
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Navigation => Color::Cyan,
        Source::Widget(_) => Color::Yellow,
        Source::Host => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// A rectangle of the given size centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Style a code block line by line. Only Python gets keyword and string
/// colouring; other languages come back plain.
pub fn highlight_code(source: &str, language: &str) -> Vec<Line<'static>> {
    source
        .lines()
        .map(|line| {
            if language.eq_ignore_ascii_case("python") {
                highlight_python_line(line)
            } else {
                Line::from(line.to_string())
            }
        })
        .collect()
}

fn highlight_python_line(line: &str) -> Line<'static> {
    let keyword = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let string = Style::default().fg(Color::Green);

    let mut spans = Vec::new();
    let mut word = String::new();
    let mut chars = line.chars().peekable();

    let flush = |word: &mut String, spans: &mut Vec<Span<'static>>| {
        if word.is_empty() {
            return;
        }
        let text = std::mem::take(word);
        if PYTHON_KEYWORDS.contains(&text.as_str()) {
            spans.push(Span::styled(text, keyword));
        } else {
            spans.push(Span::raw(text));
        }
    };

    while let Some(c) = chars.next() {
        if c == '\'' || c == '"' {
            flush(&mut word, &mut spans);
            let mut literal = String::from(c);
            for next in chars.by_ref() {
                literal.push(next);
                if next == c {
                    break;
                }
            }
            spans.push(Span::styled(literal, string));
        } else if c == '#' {
            flush(&mut word, &mut spans);
            let comment: String = std::iter::once(c).chain(chars.by_ref()).collect();
            spans.push(Span::styled(comment, Style::default().fg(Color::DarkGray)));
        } else if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush(&mut word, &mut spans);
            spans.push(Span::raw(c.to_string()));
        }
    }
    flush(&mut word, &mut spans);
    Line::from(spans)
}

/// Pretty-print a JSON value with keys and scalar values coloured.
pub fn highlight_json(value: &serde_json::Value) -> Vec<Line<'static>> {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    pretty
        .lines()
        .map(|line| {
            let indent_len = line.len() - line.trim_start().len();
            let (indent, rest) = line.split_at(indent_len);
            match rest.split_once(": ") {
                Some((key, value)) => Line::from(vec![
                    Span::raw(indent.to_string()),
                    Span::styled(key.to_string(), Style::default().fg(Color::LightBlue)),
                    Span::raw(": "),
                    Span::styled(value.to_string(), Style::default().fg(Color::Green)),
                ]),
                None => Line::from(line.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2025-03-07 14:05:59"), "03-07 14:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }

    #[test]
    fn test_python_highlight_keeps_text_and_marks_keywords() {
        let lines = highlight_code("import streamlit as st\nst.write('Hello, world!')", "python");
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "import streamlit as st");
        assert_eq!(text(&lines[1]), "st.write('Hello, world!')");
        assert_eq!(lines[0].spans[0].content, "import");
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Magenta));
        assert!(
            lines[1]
                .spans
                .iter()
                .any(|span| span.content == "'Hello, world!'" && span.style.fg == Some(Color::Green))
        );
    }

    #[test]
    fn test_json_highlight_keeps_key_order() {
        let lines = highlight_json(&serde_json::json!({"key": "value", "foo": "bar"}));
        let rendered: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(rendered, vec!["{", "  \"key\": \"value\",", "  \"foo\": \"bar\"", "}"]);
    }
}
