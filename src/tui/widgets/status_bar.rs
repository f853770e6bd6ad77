// Status bar: snapshot date, member count, active view, filter state.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::data::RosterSnapshot;
use crate::tui::{TabId, ViewState};

/// Render the top status bar.
pub fn render(frame: &mut Frame, area: Rect, snapshot: &RosterSnapshot, state: &ViewState) {
    let date = snapshot
        .generated_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "--".to_string());
    let view = match state.active_tab {
        TabId::Leaderboard => "Leaderboard",
        TabId::Squads => "Tactical Units",
    };

    let mut text = format!(
        " Alliance Board | snapshot {} | {} members | View: {}",
        date,
        snapshot.players.len(),
        view
    );
    if !state.query.search_term.is_empty() {
        text.push_str(&format!(" | filter: \"{}\"", state.query.search_term));
    }

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AverageStats;

    fn empty_snapshot() -> RosterSnapshot {
        RosterSnapshot {
            generated_at: chrono::NaiveDate::from_ymd_opt(2024, 11, 18),
            players: Vec::new(),
            averages: AverageStats {
                donations: 0.0,
                vs: 0.0,
                power: 0.0,
            },
        }
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(120, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let snapshot = empty_snapshot();
        let mut state = ViewState::default();
        state.query.set_filter("valk");
        terminal
            .draw(|frame| render(frame, frame.area(), &snapshot, &state))
            .unwrap();
    }
}
