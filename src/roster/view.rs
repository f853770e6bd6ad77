// Leaderboard filter/sort transform and the table view-state it consumes.
//
// The displayed table is fully determined by (snapshot, TableQuery): a
// case-insensitive name filter followed by a stable sort on the selected
// column. The transform copies; it never mutates the source collection.

use std::cmp::Ordering;

use crate::model::{PlayerRecord, SortKey, SortOrder};

// ---------------------------------------------------------------------------
// TableQuery
// ---------------------------------------------------------------------------

/// Explicit view-state for the leaderboard table.
///
/// Updated by discrete transitions (`set_filter`, `set_sort`) so the
/// transform stays a pure function of the query, independent of how the
/// host UI stores its state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    /// Substring matched case-insensitively against player names.
    pub search_term: String,
    /// Active sort column.
    pub sort_key: SortKey,
    /// Active sort direction.
    pub sort_order: SortOrder,
}

impl Default for TableQuery {
    fn default() -> Self {
        TableQuery {
            search_term: String::new(),
            sort_key: SortKey::ScoreFinal,
            sort_order: SortOrder::Descending,
        }
    }
}

impl TableQuery {
    /// Replace the search term.
    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a sort column.
    ///
    /// Selecting the currently-active column flips the direction; selecting
    /// a new column resets to descending.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Descending;
        }
    }
}

// ---------------------------------------------------------------------------
// Filter + sort
// ---------------------------------------------------------------------------

/// Filter players by name substring and sort by the query's column.
///
/// The sort is stable: equal-key players keep their prior relative order,
/// so re-sorting on the same key does not visibly reshuffle ties.
pub fn filter_and_sort(players: &[PlayerRecord], query: &TableQuery) -> Vec<PlayerRecord> {
    let mut rows: Vec<PlayerRecord> = if query.search_term.is_empty() {
        players.to_vec()
    } else {
        let needle = query.search_term.to_lowercase();
        players
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    };

    rows.sort_by(|a, b| {
        let ord = compare_by_key(a, b, query.sort_key);
        match query.sort_order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });

    rows
}

/// Natural (ascending) ordering of two players on one column.
fn compare_by_key(a: &PlayerRecord, b: &PlayerRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Rank => a.rank.cmp(&b.rank),
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Donations => a.donations.cmp(&b.donations),
        SortKey::Vs => a.vs.cmp(&b.vs),
        SortKey::Power => a.power.cmp(&b.power),
        SortKey::NoteDonations => compare_f64(a.note_donations, b.note_donations),
        SortKey::NoteVs => compare_f64(a.note_vs, b.note_vs),
        SortKey::NoteForce => compare_f64(a.note_force, b.note_force),
        SortKey::ScoreFinal => compare_f64(a.score_final, b.score_final),
    }
}

/// Case-insensitive name ordering with a case-sensitive tiebreak.
///
/// Stands in for the locale-collated comparison the display layer uses;
/// good enough for roster names and keeps the transform locale-free.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Total ordering for score columns. Snapshot values are always finite;
/// NaN (which would only come from a corrupt provider) sorts last.
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| {
        match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
