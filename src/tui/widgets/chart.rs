// Bar chart panel: renders a labeled-value series as horizontal bars.
//
// This is the plotting boundary: it consumes `ChartPoint`s and knows
// nothing about players, scores, or power scaling.

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::roster::summary::ChartPoint;

/// Accent used for the score panel (and Alpha squad).
pub const ALPHA_ACCENT: Color = Color::Indexed(99);
/// Accent used for the power panel (and Bravo squad).
pub const BRAVO_ACCENT: Color = Color::Indexed(168);

/// Render one chart panel. An empty series gets a placeholder message
/// instead of an empty axis.
pub fn render(frame: &mut Frame, area: Rect, title: &str, points: &[ChartPoint], accent: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());

    if points.is_empty() {
        let paragraph = Paragraph::new("No data").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.value)
                .label(Line::from(p.label.clone()))
                .style(Style::default().fg(accent))
                .text_value(p.value.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
