//! Showcase footer component
//!
//! Renders key hints for the pane that has focus

use super::super::state::{Focus, ShowcaseState};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the key hint footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &ShowcaseState) {
    let footer_text = if state.upload_prompt.is_some() {
        "[Enter] Upload | [Esc] Cancel"
    } else if state.focus == Focus::Sidebar {
        "[↑↓/1-6] Section | [Enter/Tab] Page | [Q] Quit"
    } else {
        "[↑↓] Widget | [←→/Space/Enter] Change | [Tab/Esc] Sidebar | [Ctrl+C] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
