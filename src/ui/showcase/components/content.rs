//! Page content component
//!
//! Lays the elements of the current view out top to bottom and keeps the
//! focused element on screen.

use super::super::state::{Focus, ShowcaseState};
use super::super::utils::{highlight_code, highlight_json};
use super::charts::render_chart;
use super::tables::{grid_height, render_data_grid, render_static_table, table_height};
use crate::catalog::{Control, ControlState, Element};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Gauge, LineGauge, Padding, Paragraph, Tabs, Wrap,
};

/// Blank rows between consecutive elements.
const GAP: u16 = 1;

const CHART_HEIGHT: u16 = 12;

fn focus_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

fn label_style(focused: bool) -> Style {
    if focused {
        focus_style()
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Elements that take no room in the content pane. The title sits in the
/// header and balloons are drawn as an overlay.
fn is_hidden(element: &Element) -> bool {
    matches!(element, Element::Title(_) | Element::Balloons)
}

fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    text.lines()
        .map(|line| Line::from(line).width().div_ceil(width).max(1) as u16)
        .sum::<u16>()
        .max(1)
}

fn pretty_json(value: &serde_json::Value) -> usize {
    serde_json::to_string_pretty(value)
        .map(|s| s.lines().count())
        .unwrap_or(1)
}

/// Rows an element needs when laid out `width` cells wide.
pub fn element_height(element: &Element, width: u16) -> u16 {
    match element {
        Element::Title(_) | Element::Balloons => 0,
        Element::Header(_) => 2,
        Element::Subheader(_) => 1,
        Element::Text(text) => wrapped_height(text, width),
        Element::Info(text) => wrapped_height(&format!("ℹ {}", text), width.saturating_sub(4)) + 2,
        Element::Control(control) => match control.state {
            ControlState::Button | ControlState::Checkbox(_) => 1,
            _ => 2,
        },
        Element::Image { caption, .. } => 4 + u16::from(caption.is_some()),
        Element::Audio { .. } | Element::Video { .. } => 3,
        Element::Chart { .. } => CHART_HEIGHT,
        Element::Columns(columns) => {
            let inner = column_width(width, columns.len()).saturating_sub(2);
            columns
                .iter()
                .map(|column| list_height(column, inner))
                .max()
                .unwrap_or(0)
                + 2
        }
        Element::Tabs { active, panes, .. } => {
            let pane = panes
                .get(*active)
                .map_or(0, |pane| list_height(pane, width.saturating_sub(2)));
            1 + pane + 2
        }
        Element::Expander { expanded, body, .. } => {
            if *expanded {
                1 + list_height(body, width.saturating_sub(2))
            } else {
                1
            }
        }
        Element::DataGrid { data, .. } => grid_height(data),
        Element::Table(data) => table_height(data),
        Element::Progress(_) => 3,
        Element::Code { source, .. } => source.lines().count().max(1) as u16 + 2,
        Element::Json(value) => pretty_json(value) as u16 + 2,
    }
}

fn column_width(width: u16, count: usize) -> u16 {
    width / (count.max(1) as u16)
}

/// Rows a sequence of elements needs, gaps included.
pub fn list_height(elements: &[Element], width: u16) -> u16 {
    let heights: Vec<u16> = elements
        .iter()
        .filter(|e| !is_hidden(e))
        .map(|e| element_height(e, width))
        .collect();
    let gaps = heights.len().saturating_sub(1) as u16 * GAP;
    heights.iter().sum::<u16>() + gaps
}

/// Top row and height of every top-level element, in element order.
fn layout_rows(elements: &[Element], width: u16) -> Vec<(u16, u16)> {
    let mut y = 0;
    elements
        .iter()
        .map(|element| {
            if is_hidden(element) {
                return (y, 0);
            }
            let height = element_height(element, width);
            let top = y;
            y += height + GAP;
            (top, height)
        })
        .collect()
}

/// Scroll offset that keeps rows `top..top + height` inside a viewport.
pub fn follow_scroll(scroll: u16, viewport: u16, top: u16, height: u16) -> u16 {
    if top < scroll {
        top
    } else if top + height > scroll + viewport {
        (top + height).saturating_sub(viewport).min(top)
    } else {
        scroll
    }
}

/// Render the page. Adjusts `state.scroll` so the focused element is visible.
pub fn render_content(f: &mut Frame, area: Rect, state: &mut ShowcaseState) {
    let content_focused = state.focus == Focus::Content;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if content_focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if content_focused {
            Color::LightCyan
        } else {
            Color::Cyan
        }))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let elements = state.view.elements();
    let rows = layout_rows(elements, inner.width);
    let total = rows.last().map_or(0, |(top, height)| top + height);

    let focused_index = state
        .view
        .focusables()
        .get(state.focused)
        .map(|(index, _)| *index);

    let mut scroll = state.scroll.min(total.saturating_sub(inner.height));
    if let Some(index) = focused_index {
        let (top, height) = rows[index];
        scroll = follow_scroll(scroll, inner.height, top, height);
    }
    state.scroll = scroll;

    let bottom = inner.y + inner.height;
    for (index, (element, (top, height))) in elements.iter().zip(&rows).enumerate() {
        if *height == 0 || *top < scroll {
            continue;
        }
        let y = inner.y + (top - scroll);
        if y >= bottom {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, (*height).min(bottom - y));
        let focused = content_focused && focused_index == Some(index);
        render_element(f, rect, element, focused);
    }
}

/// Render a nested element list without scrolling, clipped to `area`.
pub fn render_list(f: &mut Frame, area: Rect, elements: &[Element]) {
    let bottom = area.y + area.height;
    let mut y = area.y;
    for element in elements.iter().filter(|e| !is_hidden(e)) {
        if y >= bottom {
            break;
        }
        let height = element_height(element, area.width).min(bottom - y);
        render_element(f, Rect::new(area.x, y, area.width, height), element, false);
        y = y.saturating_add(height + GAP);
    }
}

fn render_element(f: &mut Frame, area: Rect, element: &Element, focused: bool) {
    match element {
        Element::Title(_) | Element::Balloons => {}
        Element::Header(text) => {
            let header = Paragraph::new(Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            f.render_widget(header, area);
        }
        Element::Subheader(text) => {
            let subheader = Paragraph::new(Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )));
            f.render_widget(subheader, area);
        }
        Element::Text(text) => {
            f.render_widget(Paragraph::new(text.clone()).wrap(Wrap { trim: false }), area);
        }
        Element::Info(text) => {
            let info = Paragraph::new(format!("ℹ {}", text))
                .style(Style::default().fg(Color::LightBlue))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Blue))
                        .padding(Padding::horizontal(1)),
                );
            f.render_widget(info, area);
        }
        Element::Control(control) => render_control(f, area, control, focused),
        Element::Image {
            url,
            caption,
            fit_width,
        } => {
            let mut lines = vec![
                Line::from(Span::styled("🖼  image", Style::default().fg(Color::Magenta))),
                Line::from(Span::styled(url.clone(), Style::default().fg(Color::DarkGray))),
            ];
            if let Some(caption) = caption {
                lines.push(Line::from(Span::styled(
                    caption.clone(),
                    Style::default().add_modifier(Modifier::ITALIC),
                )));
            }
            let area = if *fit_width {
                area
            } else {
                Rect::new(area.x, area.y, area.width.min(40), area.height)
            };
            f.render_widget(Paragraph::new(lines).block(media_block()), area);
        }
        Element::Audio { url } => render_player(f, area, "♪ audio", url),
        Element::Video { url } => render_player(f, area, "▶ video", url),
        Element::Chart { kind, data } => render_chart(f, area, *kind, data),
        Element::Columns(columns) => {
            let constraints: Vec<Constraint> = columns
                .iter()
                .map(|_| Constraint::Ratio(1, columns.len() as u32))
                .collect();
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);
            for (column, chunk) in columns.iter().zip(chunks.iter()) {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray));
                let inner = block.inner(*chunk);
                f.render_widget(block, *chunk);
                render_list(f, inner, column);
            }
        }
        Element::Tabs {
            labels,
            active,
            panes,
            ..
        } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Fill(1)])
                .split(area);
            let tabs = Tabs::new(labels.clone())
                .select(*active)
                .style(label_style(false))
                .highlight_style(if focused {
                    focus_style()
                } else {
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                })
                .divider(symbols::line::VERTICAL);
            f.render_widget(tabs, chunks[0]);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(chunks[1]);
            f.render_widget(block, chunks[1]);
            if let Some(pane) = panes.get(*active) {
                render_list(f, inner, pane);
            }
        }
        Element::Expander {
            label,
            expanded,
            body,
            ..
        } => {
            let marker = if *expanded { "▾" } else { "▸" };
            let header = Paragraph::new(Line::from(Span::styled(
                format!("{} {}", marker, label),
                label_style(focused),
            )));
            f.render_widget(header, Rect::new(area.x, area.y, area.width, 1));
            if *expanded && area.height > 1 {
                let body_area = Rect::new(
                    area.x + 2,
                    area.y + 1,
                    area.width.saturating_sub(2),
                    area.height - 1,
                );
                render_list(f, body_area, body);
            }
        }
        Element::DataGrid { data, offset, .. } => {
            render_data_grid(f, area, data, *offset, focused)
        }
        Element::Table(data) => render_static_table(f, area, data),
        Element::Progress(percent) => {
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .gauge_style(Style::default().fg(Color::LightGreen).bg(Color::Black))
                .percent(u16::from(*percent))
                .label(format!("{}%", percent));
            f.render_widget(gauge, area);
        }
        Element::Code { language, source } => {
            let code = Paragraph::new(highlight_code(source, language)).block(
                Block::default()
                    .title(format!(" {} ", language))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(code, area);
        }
        Element::Json(value) => {
            let json = Paragraph::new(highlight_json(value)).block(
                Block::default()
                    .title(" json ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(json, area);
        }
    }
}

fn media_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
}

fn render_player(f: &mut Frame, area: Rect, kind: &str, url: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!("{}  ", kind),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(url.to_string(), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line).block(media_block()), area);
}

fn render_control(f: &mut Frame, area: Rect, control: &Control, focused: bool) {
    let label = control.label.clone();
    match &control.state {
        ControlState::Button => {
            let style = if focused {
                focus_style()
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(format!("[ {} ]", label), style))),
                area,
            );
        }
        ControlState::Checkbox(checked) => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("{} {}", mark, label),
                    label_style(focused),
                ))),
                area,
            );
        }
        ControlState::Slider { min, max, value } => {
            render_label(f, area, &label, focused);
            let span = (max - min).max(1) as f64;
            let gauge = LineGauge::default()
                .filled_style(Style::default().fg(Color::LightRed))
                .unfilled_style(Style::default().fg(Color::DarkGray))
                .line_set(symbols::line::THICK)
                .ratio(((value - min) as f64 / span).clamp(0.0, 1.0))
                .label(format!("{:>3} ", value));
            f.render_widget(gauge, widget_row(area));
        }
        state => {
            render_label(f, area, &label, focused);
            f.render_widget(Paragraph::new(widget_line(state, focused)), widget_row(area));
        }
    }
}

fn render_label(f: &mut Frame, area: Rect, label: &str, focused: bool) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(label.to_string(), label_style(focused)))),
        Rect::new(area.x, area.y, area.width, 1),
    );
}

fn widget_row(area: Rect) -> Rect {
    Rect::new(area.x, area.y + 1.min(area.height.saturating_sub(1)), area.width, 1)
}

/// The second row of a two-row control.
fn widget_line(state: &ControlState, focused: bool) -> Line<'static> {
    let selected_style = Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD);
    match state {
        ControlState::Radio { options, selected } => Line::from(
            options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    if i == *selected {
                        Span::styled(format!("(•) {}  ", option), selected_style)
                    } else {
                        Span::raw(format!("( ) {}  ", option))
                    }
                })
                .collect::<Vec<_>>(),
        ),
        ControlState::Selectbox { options, selected } => Line::from(vec![
            Span::styled(
                format!(" {} ", options.get(*selected).map_or("", String::as_str)),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
            Span::styled(" ◂▸", Style::default().fg(Color::DarkGray)),
        ]),
        ControlState::Multiselect {
            options,
            selected,
            cursor,
        } => Line::from(
            options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let mark = if selected.contains(&i) { "[x]" } else { "[ ]" };
                    let mut style = if selected.contains(&i) {
                        selected_style
                    } else {
                        Style::default()
                    };
                    if focused && i == *cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!("{} {}  ", mark, option), style)
                })
                .collect::<Vec<_>>(),
        ),
        ControlState::TextInput(text) => {
            let cursor = if focused { "▏" } else { "" };
            Line::from(vec![
                Span::styled("│ ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{}{}", text, cursor)),
            ])
        }
        ControlState::NumberInput { value, .. } => Line::from(vec![
            Span::styled("[-] ", Style::default().fg(Color::DarkGray)),
            Span::styled(value.to_string(), selected_style),
            Span::styled(" [+]", Style::default().fg(Color::DarkGray)),
        ]),
        ControlState::DateInput(date) => Line::from(vec![
            Span::raw("📅 "),
            Span::styled(date.format("%Y/%m/%d").to_string(), selected_style),
        ]),
        ControlState::FileUploader(file) => match file {
            Some(file) => Line::from(vec![
                Span::raw("📎 "),
                Span::styled(file.name.clone(), selected_style),
                Span::styled(
                    format!("  {} bytes", file.size_bytes),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            None => Line::from(Span::styled(
                "Press Enter to choose a file",
                Style::default().fg(Color::DarkGray),
            )),
        },
        ControlState::Button | ControlState::Checkbox(_) | ControlState::Slider { .. } => {
            Line::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SessionState, WidgetId};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_follow_scroll() {
        // Already visible
        assert_eq!(follow_scroll(5, 10, 6, 3), 5);
        // Above the viewport
        assert_eq!(follow_scroll(5, 10, 2, 1), 2);
        // Below the viewport
        assert_eq!(follow_scroll(0, 10, 12, 3), 5);
        // Taller than the viewport keeps its top row visible
        assert_eq!(follow_scroll(0, 4, 6, 12), 6);
    }

    #[test]
    fn test_hidden_elements_take_no_room() {
        let elements = vec![
            Element::Title("t".into()),
            Element::Text("a".into()),
            Element::Balloons,
            Element::Text("b".into()),
        ];
        assert_eq!(list_height(&elements, 40), 3);
        let rows = layout_rows(&elements, 40);
        assert_eq!(rows[1], (0, 1));
        assert_eq!(rows[3], (2, 1));
    }

    #[test]
    fn test_text_wraps_by_width() {
        assert_eq!(element_height(&Element::Text("x".repeat(25)), 10), 3);
        assert_eq!(element_height(&Element::Text("one\ntwo".into()), 10), 2);
    }

    #[test]
    // Border rows plus the wrapped text inside the padded box.
    fn test_info_box_height() {
        let info = Element::Info("Explore different Streamlit API features!".into());
        assert_eq!(element_height(&info, 60), 3);
        assert_eq!(element_height(&info, 26), 4);
    }

    #[test]
    fn test_collapsed_expander_is_one_row() {
        let body = vec![Element::Text("Expanded content!".into())];
        let collapsed = Element::Expander {
            id: WidgetId::Expander,
            label: "Click to expand".into(),
            expanded: false,
            body: body.clone(),
        };
        let expanded = Element::Expander {
            id: WidgetId::Expander,
            label: "Click to expand".into(),
            expanded: true,
            body,
        };
        assert_eq!(element_height(&collapsed, 40), 1);
        assert_eq!(element_height(&expanded, 40), 2);
    }

    #[test]
    fn test_every_section_fits_its_layout() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for section in crate::catalog::Section::ALL {
            let mut session = SessionState::new();
            session.apply(crate::catalog::Interaction::Navigate(section));
            let view = crate::catalog::render(&session, today, &mut rng);
            let rows = layout_rows(view.elements(), 60);
            assert_eq!(rows.len(), view.elements().len());
            assert!(rows.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        }
    }
}
