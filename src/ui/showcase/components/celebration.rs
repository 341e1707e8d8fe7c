//! Balloon overlay
//!
//! Balloons rise from the bottom of the screen while a celebration runs.

use super::super::state::Celebration;
use super::charts::SERIES_COLORS;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::time::Instant;

/// Screen cell of one balloon at animation progress `t`, or `None` when the
/// balloon has not appeared yet or has left the area.
fn balloon_cell(area: Rect, x: f64, speed: f64, delay: f64, t: f64) -> Option<(u16, u16)> {
    if t < delay || area.width < 2 || area.height < 2 {
        return None;
    }
    let local = ((t - delay) / (1.0 - delay)).clamp(0.0, 1.0);
    let risen = local * speed * f64::from(area.height);
    let row = f64::from(area.height) - 1.0 - risen;
    if row < 0.0 {
        return None;
    }
    let col = (x * f64::from(area.width - 2)).round() as u16;
    Some((area.x + col, area.y + row as u16))
}

pub fn render_celebration(f: &mut Frame, area: Rect, celebration: &Celebration, now: Instant) {
    let t = celebration.progress(now);
    for balloon in &celebration.balloons {
        let Some((x, y)) = balloon_cell(area, balloon.x, balloon.speed, balloon.delay, t) else {
            continue;
        };
        let color = SERIES_COLORS[balloon.color % SERIES_COLORS.len()];
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("🎈", Style::default().fg(color)))),
            Rect::new(x, y, 2, 1),
        );
        if y + 1 < area.y + area.height {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled("╿", Style::default().fg(color)))),
                Rect::new(x, y + 1, 1, 1),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balloons_rise_over_time() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(balloon_cell(area, 0.5, 1.5, 0.2, 0.1), None);
        let (_, early) = balloon_cell(area, 0.5, 1.5, 0.2, 0.25).unwrap();
        let (_, later) = balloon_cell(area, 0.5, 1.5, 0.2, 0.5).unwrap();
        assert!(later < early);
        assert_eq!(balloon_cell(area, 0.5, 1.5, 0.2, 1.0), None);
    }

    #[test]
    fn test_balloon_stays_inside_width() {
        let area = Rect::new(3, 0, 10, 10);
        let (x, _) = balloon_cell(area, 1.0, 1.2, 0.0, 0.0).unwrap();
        assert!(x + 2 <= area.x + area.width);
    }
}
