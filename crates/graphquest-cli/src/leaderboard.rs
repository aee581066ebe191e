use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished game on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Name entered on the main menu.
    pub player_name: String,
    /// Final session score.
    pub score: usize,
    /// When the game finished.
    pub played_at: DateTime<Utc>,
}

/// Lifetime summary of one player's games.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    /// Number of recorded games.
    pub games_played: usize,
    /// Highest single-game score, 0 with no games.
    pub best_score: usize,
    /// Mean score across recorded games, 0 with no games.
    pub average_score: f64,
    /// Sum of all recorded scores.
    pub total_score: usize,
}

/// JSON-file leaderboard.
///
/// The file holds a flat array of [`ScoreEntry`] records. Writes are
/// append-then-rewrite; reads sort on the fly. A missing file is an empty
/// leaderboard, and an unreadable one degrades to empty with a warning
/// rather than failing the game.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Appends a finished game, stamped with the current time.
    pub fn save(&self, player_name: &str, score: usize) -> anyhow::Result<()> {
        let mut entries = self.load_entries();
        entries.push(ScoreEntry {
            player_name: player_name.to_owned(),
            score,
            played_at: Utc::now(),
        });

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create file: {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &entries)
            .with_context(|| format!("Failed to write JSON to {}", self.path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", self.path.display()))?;
        Ok(())
    }

    /// Returns up to `limit` entries, best first.
    #[must_use]
    pub fn list(&self, limit: usize) -> Vec<ScoreEntry> {
        let mut entries = sort_entries(self.load_entries());
        entries.truncate(limit);
        entries
    }

    /// Returns the best score recorded for a player, if any.
    #[must_use]
    pub fn best_score(&self, player_name: &str) -> Option<usize> {
        self.load_entries()
            .iter()
            .filter(|e| e.player_name == player_name)
            .map(|e| e.score)
            .max()
    }

    /// Aggregates every recorded game for a player.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn player_stats(&self, player_name: &str) -> PlayerStats {
        let scores: Vec<usize> = self
            .load_entries()
            .iter()
            .filter(|e| e.player_name == player_name)
            .map(|e| e.score)
            .collect();
        let games_played = scores.len();
        let total_score: usize = scores.iter().sum();
        let average_score = if games_played == 0 {
            0.0
        } else {
            total_score as f64 / games_played as f64
        };
        PlayerStats {
            games_played,
            best_score: scores.into_iter().max().unwrap_or(0),
            average_score,
            total_score,
        }
    }

    fn load_entries(&self) -> Vec<ScoreEntry> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read leaderboard");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "leaderboard file is corrupt; treating as empty");
                Vec::new()
            }
        }
    }
}

/// Sorts entries by score descending, breaking ties by earlier play time.
fn sort_entries(mut entries: Vec<ScoreEntry>) -> Vec<ScoreEntry> {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.played_at.cmp(&b.played_at))
    });
    entries
}
