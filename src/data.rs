// Roster snapshot loading: the data-provider boundary.
//
// A snapshot is either the embedded default (compiled in, so the binary
// runs with no files on disk) or an export file selected by extension:
// JSON carries the provider's precomputed averages verbatim; CSV exports
// hold only player rows, so the loader derives the averages itself.
// Downstream code treats the snapshot as read-only and never writes back.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{AverageStats, PlayerRecord};

/// Weekly export bundled into the binary.
const EMBEDDED_ROSTER: &str = include_str!("../data/roster.json");

// ---------------------------------------------------------------------------
// RosterSnapshot
// ---------------------------------------------------------------------------

/// One weekly roster snapshot: the whole collection is replaced on reload,
/// never edited incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    /// Export date, when the provider supplies one (CSV exports do not).
    #[serde(default)]
    pub generated_at: Option<NaiveDate>,
    pub players: Vec<PlayerRecord>,
    pub averages: AverageStats,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("unsupported roster format `{extension}` (expected .json or .csv)")]
    UnsupportedFormat { extension: String },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a roster snapshot.
///
/// With no path, parses the embedded default export. Otherwise the file
/// extension picks the loader. An empty roster is not an error; every
/// transform downstream degrades to empty output.
pub fn load_snapshot(path: Option<&Path>) -> Result<RosterSnapshot, DataError> {
    let snapshot = match path {
        None => serde_json::from_str(EMBEDDED_ROSTER).map_err(|e| DataError::Json {
            path: "<embedded>".to_string(),
            source: e,
        })?,
        Some(path) => {
            let display = path.display().to_string();
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_ascii_lowercase();
            if extension != "json" && extension != "csv" {
                return Err(DataError::UnsupportedFormat { extension });
            }
            let file = File::open(path).map_err(|e| DataError::Io {
                path: display.clone(),
                source: e,
            })?;
            if extension == "json" {
                load_json_from_reader(file).map_err(|e| DataError::Json {
                    path: display,
                    source: e,
                })?
            } else {
                load_csv_from_reader(file).map_err(|e| DataError::Csv {
                    path: display,
                    source: e,
                })?
            }
        }
    };

    check_snapshot(&snapshot);
    Ok(snapshot)
}

/// Parse a full JSON snapshot (players + provider averages).
fn load_json_from_reader<R: Read>(rdr: R) -> Result<RosterSnapshot, serde_json::Error> {
    serde_json::from_reader(rdr)
}

/// Parse a CSV export of player rows and derive the averages record.
fn load_csv_from_reader<R: Read>(rdr: R) -> Result<RosterSnapshot, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for row in reader.deserialize::<PlayerRecord>() {
        players.push(row?);
    }
    let averages = derive_averages(&players);
    Ok(RosterSnapshot {
        generated_at: None,
        players,
        averages,
    })
}

/// Mean donations/vs/power over the roster; zeros for an empty roster.
fn derive_averages(players: &[PlayerRecord]) -> AverageStats {
    if players.is_empty() {
        return AverageStats {
            donations: 0.0,
            vs: 0.0,
            power: 0.0,
        };
    }
    let n = players.len() as f64;
    AverageStats {
        donations: players.iter().map(|p| p.donations as f64).sum::<f64>() / n,
        vs: players.iter().map(|p| p.vs as f64).sum::<f64>() / n,
        power: players.iter().map(|p| p.power as f64).sum::<f64>() / n,
    }
}

/// Log suspicious provider data. The provider is trusted, so nothing here
/// is an error: duplicate names break row identity and non-dense ranks
/// mean the upstream scoring pass disagrees with the export order.
fn check_snapshot(snapshot: &RosterSnapshot) {
    let mut seen = HashSet::new();
    for p in &snapshot.players {
        if !seen.insert(p.name.as_str()) {
            warn!("duplicate player name in snapshot: {}", p.name);
        }
    }

    let mut ranks: Vec<u32> = snapshot.players.iter().map(|p| p.rank).collect();
    ranks.sort_unstable();
    let dense = ranks
        .iter()
        .enumerate()
        .all(|(i, &r)| r == (i + 1) as u32);
    if !dense && !ranks.is_empty() {
        warn!("snapshot ranks are not a dense 1..{} sequence", ranks.len());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "generatedAt": "2024-11-18",
        "players": [
            {"rank": 1, "name": "Astra", "donations": 48200, "vs": 812000,
             "power": 98300000, "noteDonations": 9.5, "noteVs": 9.8,
             "noteForce": 10.0, "scoreFinal": 195.25},
            {"rank": 2, "name": "Borealis", "donations": 41000, "vs": 700500,
             "power": 87100000, "noteDonations": 8.9, "noteVs": 9.1,
             "noteForce": 9.2, "scoreFinal": 181.4}
        ],
        "averages": {"donations": 44600.0, "vs": 756250.0, "power": 92700000.0}
    }"#;

    const SAMPLE_CSV: &str = "\
rank,name,donations,vs,power,noteDonations,noteVs,noteForce,scoreFinal
1,Astra,48200,812000,98300000,9.5,9.8,10.0,195.25
2,Borealis,41000,700500,87100000,8.9,9.1,9.2,181.4
";

    #[test]
    fn json_reader_parses_snapshot() {
        let snap = load_json_from_reader(SAMPLE_JSON.as_bytes()).unwrap();
        assert_eq!(
            snap.generated_at,
            Some(NaiveDate::from_ymd_opt(2024, 11, 18).unwrap())
        );
        assert_eq!(snap.players.len(), 2);
        assert_eq!(snap.players[1].name, "Borealis");
        assert!((snap.averages.power - 92_700_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn csv_reader_parses_players_and_derives_averages() {
        let snap = load_csv_from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert!(snap.generated_at.is_none());
        assert_eq!(snap.players.len(), 2);
        assert_eq!(snap.players[0].power, 98_300_000);
        assert!((snap.averages.donations - 44_600.0).abs() < f64::EPSILON);
        assert!((snap.averages.power - 92_700_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn derive_averages_empty_roster_is_zero() {
        let avg = derive_averages(&[]);
        assert_eq!(avg.donations, 0.0);
        assert_eq!(avg.vs, 0.0);
        assert_eq!(avg.power, 0.0);
    }

    #[test]
    fn embedded_roster_parses() {
        let snap = load_snapshot(None).unwrap();
        assert!(!snap.players.is_empty());
        // The embedded export carries dense ranks starting at 1.
        assert_eq!(snap.players[0].rank, 1);
        assert!(snap.averages.power > 0.0);
    }

    #[test]
    fn embedded_roster_covers_both_pools() {
        // The squads view expects the default roster to fill the active
        // pool and at least part of the reserve pool.
        let snap = load_snapshot(None).unwrap();
        assert!(snap.players.len() > 40, "default roster too small");
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_snapshot(Some(Path::new("roster.parquet"))).unwrap_err();
        match err {
            DataError::UnsupportedFormat { extension } => assert_eq!(extension, "parquet"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_snapshot(Some(Path::new("/nonexistent/roster.json"))).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let result = load_json_from_reader("{not json".as_bytes());
        assert!(result.is_err());
    }
}
