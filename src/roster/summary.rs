// Aggregate presentation transforms: top-N extraction, chart series, and
// the overview card values.
//
// The chart boundary is a narrow labeled-value type (`ChartPoint`); the
// transforms hand the widget raw numbers and leave formatting to the
// locale layer.

use crate::model::{AverageStats, PlayerRecord};

/// One bar of a chart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

/// Display-ready values for the overview card row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    /// Total roster size this snapshot.
    pub members: usize,
    /// Provider-computed alliance averages.
    pub averages: AverageStats,
}

/// Build the overview card values.
pub fn overview(players: &[PlayerRecord], averages: AverageStats) -> Overview {
    Overview {
        members: players.len(),
        averages,
    }
}

/// The `min(n, len)` highest-scoring players, descending by final score.
///
/// Operates on a copy; ties keep their snapshot order (stable sort).
pub fn top_by_score(players: &[PlayerRecord], n: usize) -> Vec<PlayerRecord> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| {
        b.score_final
            .partial_cmp(&a.score_final)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Top-n chart series by final score (bar value = score rounded to the
/// nearest integer; the table view keeps the raw two-decimal score).
pub fn score_series(players: &[PlayerRecord], n: usize) -> Vec<ChartPoint> {
    top_by_score(players, n)
        .into_iter()
        .map(|p| ChartPoint {
            label: p.name,
            value: p.score_final.round().max(0.0) as u64,
        })
        .collect()
}

/// Top-n chart series by power, scaled to millions and rounded.
///
/// Selection is still by final score (both chart panels show the same
/// top players, one scored and one by strike power).
pub fn power_series(players: &[PlayerRecord], n: usize) -> Vec<ChartPoint> {
    top_by_score(players, n)
        .into_iter()
        .map(|p| ChartPoint {
            value: ((p.power as f64) / 1_000_000.0).round() as u64,
            label: p.name,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
