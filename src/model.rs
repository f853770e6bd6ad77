// Core roster data types shared by the data provider, the transform layer,
// and the TUI.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PlayerRecord
// ---------------------------------------------------------------------------

/// One alliance member in a weekly snapshot.
///
/// Records are immutable once loaded: the whole collection is replaced on
/// reload, never edited in place. `name` uniquely identifies a player within
/// one snapshot; `rank` is a dense 1..N ranking computed upstream.
///
/// Field names use camelCase on the wire to match the original data file
/// (`noteDonations`, `scoreFinal`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub rank: u32,
    pub name: String,
    pub donations: u64,
    pub vs: u64,
    pub power: u64,
    pub note_donations: f64,
    pub note_vs: f64,
    pub note_force: f64,
    pub score_final: f64,
}

// ---------------------------------------------------------------------------
// AverageStats
// ---------------------------------------------------------------------------

/// Alliance-wide averages, precomputed by the data provider.
///
/// Nothing here is re-derived from the player collection; the provider is
/// trusted (a mismatch is worth a log line, never an error).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageStats {
    pub donations: f64,
    pub vs: f64,
    pub power: f64,
}

// ---------------------------------------------------------------------------
// Sort keys and order
// ---------------------------------------------------------------------------

/// The closed set of columns the leaderboard can sort by.
///
/// Using an enum (rather than a field-name string) makes an unrecognized
/// sort key a compile error instead of a runtime case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Rank,
    Name,
    Donations,
    Vs,
    Power,
    NoteDonations,
    NoteVs,
    NoteForce,
    ScoreFinal,
}

impl SortKey {
    /// Short column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rank => "Rank",
            SortKey::Name => "Player",
            SortKey::Donations => "Donations",
            SortKey::Vs => "VS",
            SortKey::Power => "Power",
            SortKey::NoteDonations => "N.Don",
            SortKey::NoteVs => "N.VS",
            SortKey::NoteForce => "N.Pow",
            SortKey::ScoreFinal => "Score",
        }
    }

    /// Whether this key compares textually (everything else is numeric).
    pub fn is_textual(&self) -> bool {
        matches!(self, SortKey::Name)
    }
}

/// Sort direction for the leaderboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Flip ascending <-> descending.
    pub fn flipped(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
