// Configuration loading and validation (config/dashboard.toml).
//
// The whole file is optional: a missing file (or missing section) falls
// back to defaults that reproduce the original dashboard behavior.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::format::Locale;
use crate::roster::squads::SquadPolicy;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Roster file override; `None` uses the embedded default snapshot.
    pub roster_path: Option<PathBuf>,
    /// Number format locale for the display layer.
    pub locale: Locale,
    /// Bars per chart panel.
    pub chart_top_n: usize,
    /// Squad partition knobs.
    pub squads: SquadPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster_path: None,
            locale: Locale::Fr,
            chart_top_n: 10,
            squads: SquadPolicy::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// dashboard.toml sections
// ---------------------------------------------------------------------------

/// Raw deserialization target for dashboard.toml. Every section and field
/// is optional; omissions keep the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
struct DashboardFile {
    #[serde(default)]
    data: DataSection,
    #[serde(default)]
    display: DisplaySection,
    #[serde(default)]
    squads: SquadsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataSection {
    roster: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplaySection {
    locale: Option<Locale>,
    chart_top_n: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SquadsSection {
    target_ratio: Option<f64>,
    tolerance: Option<f64>,
    squad_size: Option<usize>,
    active_pool: Option<usize>,
    reserve_pool: Option<usize>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/dashboard.toml` under the current
/// working directory. A missing file yields the defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let base_dir = std::env::current_dir().map_err(|e| ConfigError::Io {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&base_dir)
}

/// Load configuration relative to the given base directory.
///
/// Split out from `load_config` so tests can point at a temp directory.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("dashboard.toml");

    let file: DashboardFile = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?
    } else {
        DashboardFile::default()
    };

    let defaults = Config::default();
    let config = Config {
        roster_path: file.data.roster,
        locale: file.display.locale.unwrap_or(defaults.locale),
        chart_top_n: file.display.chart_top_n.unwrap_or(defaults.chart_top_n),
        squads: SquadPolicy {
            target_ratio: file.squads.target_ratio.unwrap_or(defaults.squads.target_ratio),
            tolerance: file.squads.tolerance.unwrap_or(defaults.squads.tolerance),
            squad_size: file.squads.squad_size.unwrap_or(defaults.squads.squad_size),
            active_pool: file.squads.active_pool.unwrap_or(defaults.squads.active_pool),
            reserve_pool: file.squads.reserve_pool.unwrap_or(defaults.squads.reserve_pool),
        },
    };

    validate(&config)?;
    Ok(config)
}

/// Field-level validation. The squad invariants matter most: an active
/// pool larger than both squad caps combined would silently drop players.
fn validate(config: &Config) -> Result<(), ConfigError> {
    let squads = &config.squads;

    if !(squads.target_ratio > 0.0 && squads.target_ratio < 1.0) {
        return Err(ConfigError::Validation {
            field: "squads.target_ratio".into(),
            message: format!("must be in (0, 1), got {}", squads.target_ratio),
        });
    }
    if !(squads.tolerance >= 0.0 && squads.tolerance < 1.0) {
        return Err(ConfigError::Validation {
            field: "squads.tolerance".into(),
            message: format!("must be in [0, 1), got {}", squads.tolerance),
        });
    }
    if squads.squad_size == 0 {
        return Err(ConfigError::Validation {
            field: "squads.squad_size".into(),
            message: "must be at least 1".into(),
        });
    }
    if squads.active_pool > squads.squad_size * 2 {
        return Err(ConfigError::Validation {
            field: "squads.active_pool".into(),
            message: format!(
                "active pool of {} cannot fit into two squads of {}",
                squads.active_pool, squads.squad_size
            ),
        });
    }
    if config.chart_top_n == 0 {
        return Err(ConfigError::Validation {
            field: "display.chart_top_n".into(),
            message: "must be at least 1".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
