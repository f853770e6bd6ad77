// Overview cards: member count and the alliance averages, one card each.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::format::Locale;
use crate::roster::summary::Overview;

/// Render the four-card overview row.
pub fn render(frame: &mut Frame, area: Rect, overview: &Overview, locale: Locale) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cards = [
        (
            "Members",
            overview.members.to_string(),
            "active this week",
            Color::Green,
        ),
        (
            "Avg Donations",
            locale.compact(overview.averages.donations),
            "per member",
            Color::Yellow,
        ),
        (
            "Avg VS Points",
            locale.compact(overview.averages.vs),
            "weekly performance",
            Color::Red,
        ),
        (
            "Avg Power",
            locale.compact(overview.averages.power),
            "strike force",
            Color::Blue,
        ),
    ];

    for ((label, value, sub, accent), column) in cards.into_iter().zip(columns.iter()) {
        let body = vec![
            Line::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(sub, Style::default().fg(Color::DarkGray)),
        ];
        let paragraph = Paragraph::new(body).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(label),
        );
        frame.render_widget(paragraph, *column);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
