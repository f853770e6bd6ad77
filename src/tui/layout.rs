// Screen layout: panel arrangement and sizing, one layout per tab.
//
// Leaderboard tab:
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Overview Cards (5 rows, 4 columns)                |
// +-------------------------+------------------------+
// | Score Chart (40%)        | Power Chart            |
// +-------------------------+------------------------+
// | Leaderboard Table (fill)                          |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// Squads tab:
// +-------------------------+------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Alpha Panel (50%)        | Bravo Panel (50%)      |
// +-------------------------+------------------------+
// | Deployment Summary (3 rows)                       |
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved areas for the leaderboard tab.
#[derive(Debug, Clone)]
pub struct LeaderboardLayout {
    /// Top row: snapshot date, member count, active view.
    pub status_bar: Rect,
    /// Overview card row (members, average donations, VS, power).
    pub cards: Rect,
    /// Left chart: top 10 by final score.
    pub score_chart: Rect,
    /// Right chart: top 10 by power in millions.
    pub power_chart: Rect,
    /// The sortable/filterable roster table.
    pub table: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Resolved areas for the squads tab.
#[derive(Debug, Clone)]
pub struct SquadsLayout {
    pub status_bar: Rect,
    /// Alpha squad panel (members + reserves).
    pub alpha: Rect,
    /// Bravo squad panel.
    pub bravo: Rect,
    /// Totals strip: headcount, actives, reserves.
    pub summary: Rect,
    pub help_bar: Rect,
}

/// Build the leaderboard-tab layout from the terminal area.
pub fn build_leaderboard_layout(area: Rect) -> LeaderboardLayout {
    // Vertical: status(1) | cards(5) | charts(40%) | table(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Percentage(40),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[2]);

    LeaderboardLayout {
        status_bar: vertical[0],
        cards: vertical[1],
        score_chart: charts[0],
        power_chart: charts[1],
        table: vertical[3],
        help_bar: vertical[4],
    }
}

/// Build the squads-tab layout from the terminal area.
pub fn build_squads_layout(area: Rect) -> SquadsLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[1]);

    SquadsLayout {
        status_bar: vertical[0],
        alpha: columns[0],
        bravo: columns[1],
        summary: vertical[2],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
