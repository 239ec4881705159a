//! High-score table persisted as a JSON array of integers.
//!
//! Loading never fails: a missing or unreadable file gives an empty table,
//! so a damaged scores file cannot stop the game from starting.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Most scores kept in the table
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u32>,
    path: Option<PathBuf>,
}

impl HighScores {
    /// Table that lives only in memory
    pub fn in_memory() -> Self {
        Self {
            scores: Vec::new(),
            path: None,
        }
    }

    /// Load the table stored at `path`, or start empty
    pub fn load(path: &Path) -> Self {
        let scores = match read_scores(path) {
            Ok(scores) => scores,
            Err(err) => {
                tracing::warn!(path = %path.display(), "Failed to load high scores: {err:#}");
                Vec::new()
            }
        };

        let mut table = Self {
            scores: Vec::new(),
            path: Some(path.to_path_buf()),
        };
        for score in scores {
            table.insert(score);
        }
        table
    }

    /// Write the table back to its file. In-memory tables do nothing.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let json = serde_json::to_string(&self.scores).context("Failed to serialize high scores")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write high scores to {:?}", path))?;

        tracing::info!(path = %path.display(), "high scores saved");
        Ok(())
    }

    /// Add a finished game's score, keeping the best [`MAX_ENTRIES`]
    pub fn record(&mut self, score: u32) {
        self.insert(score);
        tracing::info!(score, best = self.highest(), "score recorded");
    }

    /// Record a score and persist the table, logging instead of failing
    pub fn record_and_save(&mut self, score: u32) {
        self.record(score);
        if let Err(err) = self.save() {
            tracing::warn!("Failed to save high scores: {err:#}");
        }
    }

    pub fn highest(&self) -> u32 {
        self.scores.first().copied().unwrap_or(0)
    }

    /// Scores, best first
    pub fn entries(&self) -> &[u32] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn insert(&mut self, score: u32) {
        let at = self.scores.partition_point(|&kept| kept >= score);
        self.scores.insert(at, score);
        self.scores.truncate(MAX_ENTRIES);
    }
}

impl Default for HighScores {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn read_scores(path: &Path) -> Result<Vec<u32>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read high scores from {:?}", path))?;
    serde_json::from_str(&json).context("Failed to parse high scores")
}
