//! Configuration management
//!
//! The progression rules the session runner consumes live here as named,
//! tunable values rather than inline constants, so the state machine can be
//! exercised with alternate thresholds.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration: the progression rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Category XP at which every exact multiple announces a level-up
    pub level_threshold: u32,

    /// XP awarded for a correct regular answer
    pub correct_xp: u32,

    /// XP awarded for a defeated boss
    pub boss_xp: u32,

    /// A boss checkpoint is reached every this many answered questions
    pub boss_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { level_threshold: 30, correct_xp: 10, boss_xp: 20, boss_interval: 10 }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "kata").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "kata").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_rules_match_the_game_design() {
        let config = Config::default();
        assert_eq!(config.level_threshold, 30);
        assert_eq!(config.correct_xp, 10);
        assert_eq!(config.boss_xp, 20);
        assert_eq!(config.boss_interval, 10);
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("level_threshold"));
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{"level_threshold":50,"correct_xp":5,"boss_xp":25,"boss_interval":4}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.level_threshold, 50);
        assert_eq!(config.boss_interval, 4);
    }
}
