//! Save-file persistence for player progress
//!
//! The save document is a single pretty-printed JSON object holding the
//! player record and the achievement labels current at save time. Only the
//! player record is read back; the stored achievements are informational.
//!
//! Loading never fails: a missing or unreadable save simply yields a fresh
//! default player. Saving can fail, and the caller decides how loudly to
//! report that; the session must survive either way.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::player::Player;
use crate::player::achievements::Achievement;

/// Errors that can occur while writing the save file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem trouble: directory creation or the write itself
    #[error("failed to write save file: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized
    #[error("failed to serialize save file: {0}")]
    Format(#[from] serde_json::Error),
}

/// On-disk document layout
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    player: Player,
    #[serde(default)]
    achievements: Vec<String>,
}

/// Load/save plumbing for a player record at a fixed path
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store backed by the default save location under the user data dir
    pub fn open_default() -> Result<Self> {
        let dir = Config::data_dir().context("Failed to determine save directory")?;
        Ok(Self { path: dir.join("save.json") })
    }

    /// Store backed by an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved player record, falling back to the default player when
    /// there is no save or it cannot be understood.
    pub fn load(&self) -> Player {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!("No readable save at {:?}: {err}", self.path);
                return Player::default();
            }
        };

        match serde_json::from_str::<SaveFile>(&contents) {
            Ok(save) => save.player,
            Err(err) => {
                tracing::warn!("Ignoring corrupt save at {:?}: {err}", self.path);
                Player::default()
            }
        }
    }

    /// Persist the player record together with the freshly derived badges.
    pub fn save(&self, player: &Player, achievements: &[Achievement]) -> Result<(), StoreError> {
        let save = SaveFile {
            player: player.clone(),
            achievements: achievements.iter().map(|a| a.label().to_string()).collect(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&save)?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}
