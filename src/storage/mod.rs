//! Persistence for the statistics record
//!
//! One JSON file in the per-user data directory, read once at startup and
//! rewritten after each recorded outcome. Storage trouble never interrupts
//! play: unreadable or corrupt saves load as the zero record, and failed
//! writes are logged and skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::game::Stats;

/// Directory under the platform data dir holding the save file.
const APP_DIR: &str = "palabras";

/// Save file name.
const STATS_FILE: &str = "stats.json";

/// Handle to the on-disk statistics record
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Store at the platform's conventional per-user location.
    #[must_use]
    pub fn open_default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(APP_DIR).join(STATS_FILE),
        }
    }

    /// Store backed by an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the record lives on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, treating any failure as the zero record.
    #[must_use]
    pub fn load(&self) -> Stats {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Stats::default(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "stats unreadable, starting from zero");
                return Stats::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(stats) => stats,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "stats corrupt, starting from zero");
                Stats::default()
            }
        }
    }

    /// Write the record. Failures are logged, never propagated - losing a
    /// save must not lose the game session.
    pub fn save(&self, stats: &Stats) {
        if let Some(parent) = self.path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %err, "cannot create stats directory, skipping save");
            return;
        }

        let json = match serde_json::to_string_pretty(stats) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "cannot encode stats, skipping save");
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %err, "cannot write stats, skipping save");
        }
    }
}
