// Squad panels: Alpha/Bravo member lists, firepower stats, and reserves.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::format::Locale;
use crate::model::PlayerRecord;
use crate::roster::squads::SquadAssignment;

use super::chart::{ALPHA_ACCENT, BRAVO_ACCENT};

/// Render the Alpha squad panel.
pub fn render_alpha(frame: &mut Frame, area: Rect, assignment: &SquadAssignment, locale: Locale) {
    render_panel(
        frame,
        area,
        "UNIT ALPHA",
        &assignment.alpha,
        &assignment.alpha_reserve,
        assignment.alpha_power,
        assignment.alpha_percent,
        ALPHA_ACCENT,
        locale,
    );
}

/// Render the Bravo squad panel.
pub fn render_bravo(frame: &mut Frame, area: Rect, assignment: &SquadAssignment, locale: Locale) {
    render_panel(
        frame,
        area,
        "UNIT BRAVO",
        &assignment.bravo,
        &assignment.bravo_reserve,
        assignment.bravo_power,
        assignment.bravo_percent,
        BRAVO_ACCENT,
        locale,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    members: &[PlayerRecord],
    reserves: &[PlayerRecord],
    power: u64,
    percent: f64,
    accent: Color,
    locale: Locale,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(format!(
            "{} | firepower {} | {}",
            title,
            locale.group(power),
            locale.percent(percent)
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    // Reserve footer height: one row per reserve plus the block frame.
    let reserve_height = (reserves.len() as u16).saturating_add(2).min(inner.height / 2);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(reserve_height)])
        .split(inner);

    render_members(frame, sections[0], members, accent, locale);
    render_reserves(frame, sections[1], reserves, locale);
}

fn render_members(
    frame: &mut Frame,
    area: Rect,
    members: &[PlayerRecord],
    accent: Color,
    locale: Locale,
) {
    let header = Row::new(vec![
        Cell::from("##"),
        Cell::from("Name"),
        Cell::from("Rank"),
        Cell::from("Power"),
        Cell::from("Score"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = if members.is_empty() {
        vec![Row::new(vec![Cell::from(""), Cell::from("No members assigned")])]
    } else {
        members
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Row::new(vec![
                    Cell::from(format!("{:02}", i + 1)),
                    Cell::from(p.name.clone()).style(Style::default().fg(accent)),
                    Cell::from(format!("#{}", p.rank)),
                    Cell::from(locale.group(p.power)),
                    Cell::from(locale.score(p.score_final)),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(3),
        Constraint::Min(14),
        Constraint::Length(6),
        Constraint::Length(13),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::NONE)
            .title("Combat personnel"),
    );
    frame.render_widget(table, area);
}

fn render_reserves(frame: &mut Frame, area: Rect, reserves: &[PlayerRecord], locale: Locale) {
    let lines: Vec<Line> = if reserves.is_empty() {
        vec![Line::styled("none", Style::default().fg(Color::DarkGray))]
    } else {
        reserves
            .iter()
            .map(|p| {
                Line::from(format!(
                    "{} (#{}) {}",
                    p.name,
                    p.rank,
                    locale.group(p.power)
                ))
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .title(format!("Reserve unit ({})", reserves.len())),
    );
    frame.render_widget(paragraph, area);
}

/// Render the deployment summary strip: headcount, actives, reserves.
pub fn render_summary(frame: &mut Frame, area: Rect, assignment: &SquadAssignment) {
    let active = assignment.alpha.len() + assignment.bravo.len();
    let reserves = assignment.alpha_reserve.len() + assignment.bravo_reserve.len();
    let text = format!(
        " Deployment: {} engaged | {} active | {} reserves | Alpha {} vs Bravo {}",
        active + reserves,
        active,
        reserves,
        assignment.alpha.len(),
        assignment.bravo.len(),
    );
    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::squads::{partition_squads, SquadPolicy};

    fn player(rank: u32, power: u64, score: f64) -> PlayerRecord {
        PlayerRecord {
            rank,
            name: format!("Player{rank:03}"),
            donations: 0,
            vs: 0,
            power,
            note_donations: 0.0,
            note_vs: 0.0,
            note_force: 0.0,
            score_final: score,
        }
    }

    fn assignment(n: u32) -> SquadAssignment {
        let players: Vec<PlayerRecord> = (1..=n)
            .map(|i| player(i, 10_000_000 + (i as u64 % 5) * 4_000_000, 300.0 - i as f64))
            .collect();
        partition_squads(&players, &SquadPolicy::default())
    }

    #[test]
    fn render_full_panels_do_not_panic() {
        let backend = ratatui::backend::TestBackend::new(160, 48);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let a = assignment(62);
        terminal
            .draw(|frame| {
                let area = frame.area();
                let half = Rect::new(0, 0, area.width / 2, area.height - 3);
                let right = Rect::new(area.width / 2, 0, area.width / 2, area.height - 3);
                let strip = Rect::new(0, area.height - 3, area.width, 3);
                render_alpha(frame, half, &a, Locale::Fr);
                render_bravo(frame, right, &a, Locale::Fr);
                render_summary(frame, strip, &a);
            })
            .unwrap();
    }

    #[test]
    fn render_empty_assignment_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let a = assignment(0);
        terminal
            .draw(|frame| {
                render_alpha(frame, frame.area(), &a, Locale::En);
            })
            .unwrap();
    }

    #[test]
    fn render_tiny_area_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(20, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let a = assignment(45);
        terminal
            .draw(|frame| {
                render_bravo(frame, frame.area(), &a, Locale::Fr);
            })
            .unwrap();
    }
}
