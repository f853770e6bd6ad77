// TUI widget modules for each dashboard panel.

pub mod cards;
pub mod chart;
pub mod leaderboard;
pub mod squads;
pub mod status_bar;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::ViewState;

/// Render the bottom help bar. The hints follow the active input mode.
pub fn help_bar(frame: &mut Frame, area: Rect, state: &ViewState) {
    let text = if state.confirm_quit {
        " Quit? y:Yes  n:No"
    } else if state.filter_mode {
        " Type to filter | Enter:Keep | Esc:Discard"
    } else {
        " Tab:View | 1-6:Sort | /:Filter | Esc:Clear | \u{2191}\u{2193} PgUp PgDn:Scroll | q:Quit"
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
