//! Table components
//!
//! The scrollable data grid and the static table.

use crate::catalog::{SampleDataset, format_cell};

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Row, Table};

/// Data rows the grid shows at once.
pub const GRID_WINDOW: usize = 6;

/// Rows the grid occupies on screen: borders, header and the row window.
pub fn grid_height(data: &SampleDataset) -> u16 {
    data.row_count().min(GRID_WINDOW) as u16 + 3
}

/// Rows the static table occupies on screen.
pub fn table_height(data: &SampleDataset) -> u16 {
    data.row_count() as u16 + 3
}

fn header_row(data: &SampleDataset) -> Row<'static> {
    let mut cells = vec![String::new()];
    cells.extend(data.columns().iter().cloned());
    Row::new(cells).style(
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn data_rows(data: &SampleDataset, skip: usize, take: usize) -> Vec<Row<'static>> {
    data.rows()
        .iter()
        .enumerate()
        .skip(skip)
        .take(take)
        .map(|(index, row)| {
            let mut cells = vec![index.to_string()];
            cells.extend(row.iter().map(|&value| format_cell(value)));
            Row::new(cells)
        })
        .collect()
}

fn widths(data: &SampleDataset) -> Vec<Constraint> {
    let mut widths = vec![Constraint::Length(3)];
    widths.extend(data.columns().iter().map(|_| Constraint::Length(10)));
    widths
}

/// Render the interactive grid, showing a window of rows from `offset`.
pub fn render_data_grid(
    f: &mut Frame,
    area: Rect,
    data: &SampleDataset,
    offset: usize,
    focused: bool,
) {
    let border = if focused { Color::LightCyan } else { Color::DarkGray };
    let last = (offset + GRID_WINDOW).min(data.row_count());
    let title = Line::from(format!(
        " rows {}-{} of {} ",
        offset.min(last),
        last.saturating_sub(1),
        data.row_count()
    ));

    let table = Table::new(data_rows(data, offset, GRID_WINDOW), widths(data))
        .header(header_row(data))
        .column_spacing(1)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(table, area);
}

/// Render every row of a table.
pub fn render_static_table(f: &mut Frame, area: Rect, data: &SampleDataset) {
    let table = Table::new(data_rows(data, 0, data.row_count()), widths(data))
        .header(header_row(data))
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_grid_shows_window_from_offset() {
        let mut rng = StdRng::seed_from_u64(8);
        let data = SampleDataset::standard_normal(&mut rng, 10, &["A", "B", "C", "D", "E"]);
        let mut terminal = Terminal::new(TestBackend::new(70, grid_height(&data))).unwrap();
        terminal
            .draw(|f| render_data_grid(f, f.area(), &data, 4, true))
            .unwrap();
        let text = screen(&terminal);
        assert!(text.contains("rows 4-9 of 10"));
        assert!(text.contains(&format_cell(data.rows()[4][0])));
        assert!(!text.contains(&format_cell(data.rows()[3][0])));
    }

    #[test]
    fn test_heights() {
        let mut rng = StdRng::seed_from_u64(8);
        let data = SampleDataset::standard_normal(&mut rng, 10, &["A"]);
        assert_eq!(grid_height(&data), 9);
        assert_eq!(table_height(&data.head(5)), 8);
    }
}
