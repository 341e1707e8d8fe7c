//! Showcase header component
//!
//! Renders the page title and version

use super::super::state::ShowcaseState;
use crate::catalog::Element;
use crate::consts::cli_consts::PAGE_TITLE;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with the page title.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &ShowcaseState) {
    let title = state
        .view
        .elements()
        .iter()
        .find_map(|element| match element {
            Element::Title(text) => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or(PAGE_TITLE);

    let title_text = format!("{}  v{}", title, env!("CARGO_PKG_VERSION"));

    let header = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(header, area);
}
