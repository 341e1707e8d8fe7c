//! Showcase sidebar component
//!
//! Renders the section radio, the info box and the activity log

use super::super::state::{Focus, ShowcaseState};
use super::super::utils::{format_compact_timestamp, get_source_color};
use super::content::{list_height, render_list};
use crate::catalog::Section;
use crate::consts::cli_consts::{NAV_HEADER, NAV_LABEL};
use crate::events::EventType;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the navigation sidebar.
pub fn render_sidebar(f: &mut Frame, area: Rect, state: &ShowcaseState) {
    let info = state.sidebar.elements();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Section::ALL.len() as u16 + 3),
            Constraint::Length(list_height(info, area.width)),
            Constraint::Fill(1),
        ])
        .split(area);

    render_navigation(f, chunks[0], state);
    render_list(f, chunks[1], info);
    render_activity_log(f, chunks[2], state);
}

fn render_navigation(f: &mut Frame, area: Rect, state: &ShowcaseState) {
    let active = state.session.section();
    let focused = state.focus == Focus::Sidebar;

    let mut lines = vec![Line::from(Span::styled(
        NAV_LABEL,
        Style::default().fg(Color::Gray),
    ))];
    lines.extend(Section::ALL.iter().enumerate().map(|(i, section)| {
        let selected = *section == active;
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} {}", marker, section.label()), style),
        ])
    }));

    let border_color = if focused { Color::LightCyan } else { Color::Cyan };
    let block = Block::default()
        .title(NAV_HEADER)
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_activity_log(f: &mut Frame, area: Rect, state: &ShowcaseState) {
    // Borders take two rows
    let log_count = (area.height.saturating_sub(2) as usize).max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.event_type {
                EventType::Error => "❌ ",
                EventType::Upload => "📎 ",
                EventType::Celebration => "🎈 ",
                EventType::Interaction | EventType::Render => "",
            };
            Line::from(vec![
                Span::raw(status_icon),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(get_source_color(&event.source)),
                ),
            ])
        })
        .collect();

    let paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Nothing yet...")])
    } else {
        Paragraph::new(log_lines)
    };

    let block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
