// Leaderboard table: the sortable/filterable roster view.
//
// Columns mirror the original dashboard: rank, player, donations, VS,
// power, final score. The active sort column carries a direction arrow;
// digit hints in the header map to the input layer's sort shortcuts.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::format::Locale;
use crate::model::{PlayerRecord, SortOrder};
use crate::tui::input::SORT_COLUMNS;
use crate::tui::ViewState;

/// Render the leaderboard table from the already filtered/sorted rows.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[PlayerRecord],
    state: &ViewState,
    locale: Locale,
) {
    let header = Row::new(
        SORT_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let mut text = format!("{} {}", i + 1, key.label());
                if *key == state.query.sort_key {
                    text.push(match state.query.sort_order {
                        SortOrder::Ascending => '\u{25B2}',
                        SortOrder::Descending => '\u{25BC}',
                    });
                }
                Cell::from(text)
            })
            .collect::<Vec<Cell>>(),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(0);

    // Clamp the scroll offset so a shrinking filter result stays visible.
    let offset = state.table_scroll.min(rows.len().saturating_sub(1));

    let body: Vec<Row> = if rows.is_empty() {
        vec![Row::new(vec![Cell::from(""), Cell::from("No player found")])]
    } else {
        rows[offset..]
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(format!("#{}", p.rank)),
                    Cell::from(p.name.clone()),
                    Cell::from(locale.group(p.donations)),
                    Cell::from(locale.group(p.vs)),
                    Cell::from(locale.group(p.power)),
                    Cell::from(locale.score(p.score_final)).style(score_style(p.score_final)),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(9),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(build_title(state, rows.len())));

    frame.render_widget(table, area);
}

/// Score badge coloring, same thresholds as the original table.
fn score_style(score: f64) -> Style {
    if score >= 150.0 {
        Style::default().fg(Color::Green)
    } else if score >= 100.0 {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Title with filter info and the post-filter row count.
fn build_title(state: &ViewState, count: usize) -> Line<'static> {
    let mut title = String::from("Detailed Statistics");
    if !state.query.search_term.is_empty() {
        title.push_str(&format!(" \"{}\"", state.query.search_term));
    }
    if state.filter_mode {
        title.push_str(" [typing]");
    }
    title.push_str(&format!(" ({count})"));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn player(rank: u32, name: &str, score: f64) -> PlayerRecord {
        PlayerRecord {
            rank,
            name: name.to_string(),
            donations: 48_200,
            vs: 812_000,
            power: 98_300_000,
            note_donations: 9.5,
            note_vs: 9.8,
            note_force: 10.0,
            score_final: score,
        }
    }

    #[test]
    fn score_style_thresholds() {
        assert_eq!(score_style(195.0).fg, Some(Color::Green));
        assert_eq!(score_style(150.0).fg, Some(Color::Green));
        assert_eq!(score_style(120.0).fg, Some(Color::Blue));
        assert_eq!(score_style(99.9).fg, Some(Color::DarkGray));
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let rows = vec![player(1, "Valkyrie", 195.25), player(2, "Borealis", 90.5)];
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &rows, &state, Locale::Fr))
            .unwrap();
    }

    #[test]
    fn render_empty_rows_shows_placeholder() {
        let backend = ratatui::backend::TestBackend::new(100, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.query.set_filter("nobody");
        terminal
            .draw(|frame| render(frame, frame.area(), &[], &state, Locale::Fr))
            .unwrap();
    }

    #[test]
    fn render_with_large_scroll_offset_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let rows = vec![player(1, "Valkyrie", 195.25)];
        let mut state = ViewState::default();
        state.table_scroll = 500;
        terminal
            .draw(|frame| render(frame, frame.area(), &rows, &state, Locale::En))
            .unwrap();
    }
}
