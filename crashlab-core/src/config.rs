//! Configuration loaded from TOML.
//!
//! Only paths, the RNG seed and logging are configurable. The bankroll
//! constants and the 2.0 threshold are fixed at build time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::CoinFlip;

/// Default config file name inside `<config_dir>/crashlab/`.
pub const CONFIG_FILE: &str = "crashlab.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrashlabConfig {
    /// Where records are persisted.
    pub results_file: PathBuf,
    /// Fixed seed for the prediction coin. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log destination for the TUI. The CLI always logs to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for CrashlabConfig {
    fn default() -> Self {
        Self {
            results_file: PathBuf::from("results.csv"),
            seed: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl CrashlabConfig {
    /// `<config_dir>/crashlab/crashlab.toml`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("crashlab")
            .join(CONFIG_FILE)
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path, or from [`Self::default_path`] when `None`.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path()),
        }
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, results_file: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(path) = results_file {
            self.results_file = path;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Prediction coin honouring `seed`.
    pub fn coin(&self) -> CoinFlip {
        match self.seed {
            Some(seed) => CoinFlip::seeded(seed),
            None => CoinFlip::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PredictionSource;

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = CrashlabConfig::load(Path::new("/nonexistent/crashlab.toml")).unwrap();
        assert_eq!(cfg, CrashlabConfig::default());
        assert_eq!(cfg.results_file, PathBuf::from("results.csv"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg = CrashlabConfig::from_toml("seed = 7\nresults_file = \"data/out.csv\"\n").unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.results_file, PathBuf::from("data/out.csv"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "seed = \"not a number\"").unwrap();
        assert!(matches!(
            CrashlabConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn overrides_win_over_file() {
        let cfg = CrashlabConfig::from_toml("seed = 1\nresults_file = \"a.csv\"\n")
            .unwrap()
            .with_overrides(Some(PathBuf::from("b.csv")), None);
        assert_eq!(cfg.results_file, PathBuf::from("b.csv"));
        assert_eq!(cfg.seed, Some(1));

        let cfg = cfg.with_overrides(None, Some(5));
        assert_eq!(cfg.results_file, PathBuf::from("b.csv"));
        assert_eq!(cfg.seed, Some(5));
    }

    #[test]
    fn seeded_config_gives_reproducible_coin() {
        let cfg = CrashlabConfig {
            seed: Some(99),
            ..CrashlabConfig::default()
        };
        let mut a = cfg.coin();
        let mut b = cfg.coin();
        for _ in 0..32 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
