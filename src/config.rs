//! Start-up configuration from environment variables.

use std::path::PathBuf;

use crate::types::{DEFAULT_ARR_MS, DEFAULT_DAS_MS};

pub const SEED_VAR: &str = "TETRAD_SEED";
pub const SCORES_PATH_VAR: &str = "TETRAD_SCORES_PATH";
pub const LOG_PATH_VAR: &str = "TETRAD_LOG_PATH";
pub const DAS_VAR: &str = "TETRAD_DAS_MS";
pub const ARR_VAR: &str = "TETRAD_ARR_MS";

pub const DEFAULT_SCORES_PATH: &str = "highscores.json";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed; `None` seeds from the clock
    pub seed: Option<u32>,
    pub scores_path: PathBuf,
    /// JSON-lines journal; `None` disables it
    pub log_path: Option<PathBuf>,
    pub das_ms: u32,
    pub arr_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            log_path: None,
            das_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
        }
    }
}

impl Config {
    /// Read the `TETRAD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty or unparseable values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        Self {
            seed: get(SEED_VAR).and_then(|s| s.parse().ok()),
            scores_path: get(SCORES_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.scores_path),
            log_path: get(LOG_PATH_VAR).map(PathBuf::from),
            das_ms: get(DAS_VAR)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.das_ms),
            arr_ms: get(ARR_VAR)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.arr_ms),
        }
    }
}
