//! Configuration loading for fantasy-compare-mcp
//!
//! Configuration is loaded from the first file that parses:
//! 1. `FANTASY_CONFIG_PATH` env var
//! 2. `~/.binks/fantasy.toml`
//! 3. `./fantasy-compare-mcp.toml`
//! 4. `$XDG_CONFIG_HOME/fantasy-compare-mcp/config.toml`
//! 5. Default values
//!
//! `FANTASY_SEASON` overrides the default season last.
//!
//! ```toml
//! [season]
//! default = "2025-26"
//!
//! [weights]
//! rpg = 1.0
//! tov = -2.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fantasy::{Category, ScoringWeights};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub season: SeasonConfig,
    /// Scoring weights; keys left out keep their standard value
    #[serde(default)]
    pub weights: ScoringWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Season label used when a request does not name one
    #[serde(default = "default_season")]
    pub default: String,
}

fn default_season() -> String {
    "2024-25".to_string()
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            default: default_season(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Weight for {0:?} must be finite")]
    InvalidWeight(Category),

    #[error("Default season must not be empty")]
    EmptySeason,
}

impl Config {
    /// Load config from the standard locations, falling back to defaults.
    pub fn load() -> Self {
        let mut config = Self::load_from(&Self::search_paths());

        if let Ok(season) = std::env::var("FANTASY_SEASON") {
            if !season.trim().is_empty() {
                tracing::info!(season = %season, "Season overridden by FANTASY_SEASON");
                config.season.default = season;
            }
        }

        config
    }

    /// Candidate config files, highest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(env_path) = std::env::var("FANTASY_CONFIG_PATH") {
            paths.push(PathBuf::from(env_path));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".binks").join("fantasy.toml"));
        }

        paths.push(PathBuf::from("fantasy-compare-mcp.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("fantasy-compare-mcp").join("config.toml"));
        }

        paths
    }

    /// First candidate that exists and parses wins. Broken files are
    /// logged and skipped.
    pub fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load config {}: {}", path.display(), e);
                }
            }
        }

        tracing::info!("Using default configuration");
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(category) = self.weights.non_finite() {
            return Err(ConfigError::InvalidWeight(category));
        }
        if self.season.default.trim().is_empty() {
            return Err(ConfigError::EmptySeason);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.season.default, "2024-25");
        assert_eq!(config.weights, ScoringWeights::default());
    }

    #[test]
    fn test_partial_weights() {
        let config = Config::from_toml(
            r#"
            [weights]
            tov = -2.0
            "#,
        )
        .unwrap();
        assert_eq!(config.weights.tov, -2.0);
        assert_eq!(config.weights.apg, 1.5);
        assert_eq!(config.season.default, "2024-25");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let err = Config::from_toml("[weights]\nspg = inf\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWeight(Category::Spg)));
    }

    #[test]
    fn test_rejects_blank_season() {
        let err = Config::from_toml("[season]\ndefault = \" \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptySeason));
    }

    #[test]
    fn test_load_from_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();

        let broken = dir.path().join("broken.toml");
        std::fs::File::create(&broken)
            .unwrap()
            .write_all(b"[weights\nppg = ")
            .unwrap();

        let good = dir.path().join("good.toml");
        std::fs::File::create(&good)
            .unwrap()
            .write_all(b"[season]\ndefault = \"2025-26\"\n")
            .unwrap();

        let missing = dir.path().join("missing.toml");

        let config = Config::load_from(&[missing, broken, good]);
        assert_eq!(config.season.default, "2025-26");
    }

    #[test]
    fn test_load_from_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&[dir.path().join("nope.toml")]);
        assert_eq!(config, Config::default());
    }
}
