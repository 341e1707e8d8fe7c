//! Chart components
//!
//! Line charts use the ratatui chart widget. Bar and area charts are drawn on
//! a braille canvas.

use crate::catalog::{ChartKind, SampleDataset};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

/// Series colours, one per column.
pub const SERIES_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::LightRed,
];

fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Value range padded so the zero line is always inside it.
fn value_bounds(data: &SampleDataset) -> [f64; 2] {
    let (lo, hi) = data.bounds();
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    if hi - lo < f64::EPSILON {
        [lo - 1.0, hi + 1.0]
    } else {
        [lo, hi]
    }
}

fn legend(kind: ChartKind, data: &SampleDataset) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(" {} ", kind))];
    for (i, column) in data.columns().iter().enumerate() {
        spans.push(Span::styled(
            format!("■ {} ", column),
            Style::default().fg(series_color(i)),
        ));
    }
    Line::from(spans)
}

fn chart_block(kind: ChartKind, data: &SampleDataset) -> Block<'static> {
    Block::default()
        .title(legend(kind, data))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Render one chart of the sample table.
pub fn render_chart(f: &mut Frame, area: Rect, kind: ChartKind, data: &SampleDataset) {
    match kind {
        ChartKind::Line => render_line_chart(f, area, data),
        ChartKind::Bar => render_bar_chart(f, area, data),
        ChartKind::Area => render_area_chart(f, area, data),
    }
}

fn render_line_chart(f: &mut Frame, area: Rect, data: &SampleDataset) {
    let points: Vec<Vec<(f64, f64)>> = (0..data.columns().len())
        .map(|c| {
            data.column(c)
                .into_iter()
                .enumerate()
                .map(|(row, value)| (row as f64, value))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = points
        .iter()
        .enumerate()
        .map(|(c, series)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(c)))
                .data(series)
        })
        .collect();

    let x_max = data.row_count().saturating_sub(1) as f64;
    let [lo, hi] = value_bounds(data);
    let chart = Chart::new(datasets)
        .block(chart_block(ChartKind::Line, data))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(vec!["0".to_string(), format!("{}", x_max as usize)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([lo, hi])
                .labels(vec![format!("{:.1}", lo), format!("{:.1}", hi)]),
        );
    f.render_widget(chart, area);
}

fn render_bar_chart(f: &mut Frame, area: Rect, data: &SampleDataset) {
    let columns = data.columns().len().max(1);
    let rows = data.row_count();
    let slot = 1.0 / (columns as f64 + 1.0);

    let canvas = Canvas::default()
        .block(chart_block(ChartKind::Bar, data))
        .marker(Marker::Braille)
        .x_bounds([0.0, rows as f64])
        .y_bounds(value_bounds(data))
        .paint(|ctx| {
            for (row, values) in data.rows().iter().enumerate() {
                for (c, &value) in values.iter().enumerate() {
                    let x = row as f64 + slot * (c as f64 + 0.5);
                    ctx.draw(&CanvasLine::new(x, 0.0, x, value, series_color(c)));
                }
            }
        });
    f.render_widget(canvas, area);
}

fn render_area_chart(f: &mut Frame, area: Rect, data: &SampleDataset) {
    let rows = data.row_count();
    // Columns per row step used to fill under each series
    let fill_steps = 4;

    let canvas = Canvas::default()
        .block(chart_block(ChartKind::Area, data))
        .marker(Marker::Braille)
        .x_bounds([0.0, rows.saturating_sub(1) as f64])
        .y_bounds(value_bounds(data))
        .paint(|ctx| {
            for c in 0..data.columns().len() {
                let color = series_color(c);
                let series = data.column(c);
                for (row, pair) in series.windows(2).enumerate() {
                    let (y1, y2) = (pair[0], pair[1]);
                    for step in 0..fill_steps {
                        let t = step as f64 / fill_steps as f64;
                        let x = row as f64 + t;
                        let y = y1 + (y2 - y1) * t;
                        ctx.draw(&CanvasLine::new(x, 0.0, x, y, color));
                    }
                    ctx.draw(&CanvasLine::new(row as f64, y1, row as f64 + 1.0, y2, color));
                }
                ctx.layer();
            }
        });
    f.render_widget(canvas, area);
}
