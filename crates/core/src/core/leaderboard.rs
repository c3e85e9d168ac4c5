//! Best completion times, persisted as JSON.

use crate::time::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("leaderboard io: {0}")]
    Io(#[from] io::Error),
    #[error("leaderboard json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    /// Completion time in milliseconds.
    pub millis: u64,
}

impl ScoreEntry {
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    capacity: usize,
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Vec::with_capacity(capacity.max(1) + 1),
        }
    }

    /// Load from `path`; a missing file is an empty board.
    pub fn load(path: &Path, capacity: usize) -> Result<Self, StoreError> {
        let mut board = Self::new(capacity);
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(board),
            Err(e) => return Err(e.into()),
        };
        let mut entries: Vec<ScoreEntry> = serde_json::from_str(&text)?;
        entries.sort_by_key(|e| e.millis);
        entries.truncate(board.capacity);
        board.entries = entries;
        Ok(board)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Insert a completion time. Returns its 1-based rank, or `None` if it
    /// did not make the cut.
    pub fn record(&mut self, name: &str, elapsed: Duration) -> Option<usize> {
        let name = name.trim();
        let entry = ScoreEntry {
            name: if name.is_empty() {
                ANONYMOUS.to_string()
            } else {
                name.to_string()
            },
            millis: elapsed.as_millis().min(u64::MAX as u128) as u64,
        };

        // Ties keep earlier runs ahead.
        let at = self.entries.partition_point(|e| e.millis <= entry.millis);
        if at >= self.capacity {
            return None;
        }
        self.entries.insert(at, entry);
        self.entries.truncate(self.capacity);
        Some(at + 1)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("fogmaze-test-{}-{tag}", std::process::id()))
            .join("leaderboard.json")
    }

    #[test]
    fn keeps_fastest_times_ascending() {
        let mut board = Leaderboard::new(3);
        assert_eq!(board.record("a", Duration::from_millis(500)), Some(1));
        assert_eq!(board.record("b", Duration::from_millis(200)), Some(1));
        assert_eq!(board.record("c", Duration::from_millis(900)), Some(3));
        assert_eq!(board.record("d", Duration::from_millis(300)), Some(2));
        assert_eq!(board.record("e", Duration::from_millis(5_000)), None);

        let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "d", "a"]);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn ties_rank_after_existing_entries() {
        let mut board = Leaderboard::new(5);
        board.record("first", Duration::from_millis(100));
        assert_eq!(board.record("second", Duration::from_millis(100)), Some(2));
        assert_eq!(board.entries()[0].name, "first");
    }

    #[test]
    fn blank_names_become_anonymous() {
        let mut board = Leaderboard::new(5);
        board.record("   ", Duration::from_secs(1));
        board.record("  ada ", Duration::from_secs(2));
        assert_eq!(board.entries()[0].name, ANONYMOUS);
        assert_eq!(board.entries()[1].name, "ada");
        assert_eq!(board.entries()[1].elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn save_then_load() {
        let path = scratch_file("roundtrip");
        let mut board = Leaderboard::new(5);
        board.record("x", Duration::from_millis(1_234));
        board.record("y", Duration::from_millis(987));
        board.save(&path).unwrap();

        let loaded = Leaderboard::load(&path, 1).unwrap();
        assert_eq!(loaded.entries(), &board.entries()[..1]);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_empty_and_garbage_is_an_error() {
        let path = scratch_file("missing");
        let board = Leaderboard::load(&path, 5).unwrap();
        assert!(board.is_empty());

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Leaderboard::load(&path, 5),
            Err(StoreError::Json(_))
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
