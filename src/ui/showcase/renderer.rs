//! Showcase main renderer

use super::components::{celebration, content, footer, header, sidebar};
use super::state::ShowcaseState;
use super::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use std::time::Instant;

/// Width of the navigation sidebar in cells.
const SIDEBAR_WIDTH: u16 = 30;

pub fn render_showcase(f: &mut Frame, state: &mut ShowcaseState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
        .split(main_chunks[1]);

    sidebar::render_sidebar(f, body_chunks[0], state);
    content::render_content(f, body_chunks[1], state);
    footer::render_footer(f, main_chunks[2], state);

    if let Some(celebration) = &state.celebration {
        celebration::render_celebration(f, f.area(), celebration, Instant::now());
    }
    if let Some(path) = &state.upload_prompt {
        render_upload_prompt(f, f.area(), path);
    }
}

fn render_upload_prompt(f: &mut Frame, area: Rect, path: &str) {
    let popup = centered_rect(60, 5, area);
    let lines = vec![
        Line::from(Span::styled(
            "Path of the file to upload:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::LightCyan)),
            Span::raw(path.to_string()),
            Span::styled("▏", Style::default().fg(Color::LightCyan)),
        ]),
    ];
    let prompt = Paragraph::new(lines).block(
        Block::default()
            .title(" Upload a file ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    f.render_widget(Clear, popup);
    f.render_widget(prompt, popup);
}
