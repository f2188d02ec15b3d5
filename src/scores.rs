//! High-score table: the top five results, best first.
//!
//! Storage sits behind [`ScoreStore`] so the game never touches files
//! directly. [`JsonFileStore`] persists to disk; [`MemoryStore`] keeps
//! everything in memory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{HIGH_SCORE_SLOTS, INITIALS_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Whether `score` earns a place in `entries`.
pub fn qualifies(entries: &[ScoreEntry], score: u32) -> bool {
    if entries.len() < HIGH_SCORE_SLOTS {
        return true;
    }
    entries.iter().map(|e| e.score).min().map_or(true, |low| score > low)
}

/// Insert an entry and trim to the table size.
///
/// The sort is stable, so a new score that ties an existing one ranks below it.
pub fn insert(entries: &mut Vec<ScoreEntry>, entry: ScoreEntry) {
    entries.push(entry);
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(HIGH_SCORE_SLOTS);
}

/// Normalize typed initials: letters only, uppercase, at most three.
pub fn clean_initials(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .take(INITIALS_LEN)
        .collect()
}

/// Persistent high-score table
pub trait ScoreStore {
    /// Current table, best first, at most five entries.
    fn load(&self) -> Result<Vec<ScoreEntry>>;

    /// Add a result and return the updated table.
    fn record(&mut self, name: &str, score: u32) -> Result<Vec<ScoreEntry>>;
}

/// Table kept in a JSON file. A missing file is an empty table.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut entries: Vec<ScoreEntry> = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", self.path.display()))?;
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(HIGH_SCORE_SLOTS);
        Ok(entries)
    }

    fn record(&mut self, name: &str, score: u32) -> Result<Vec<ScoreEntry>> {
        // An unreadable table is replaced rather than blocking the new score.
        let mut entries = self.load().unwrap_or_default();
        insert(&mut entries, ScoreEntry::new(name, score));
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(entries)
    }
}

/// In-memory table
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<ScoreEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<ScoreEntry>) -> Self {
        let mut store = Self::new();
        for e in entries {
            insert(&mut store.entries, e);
        }
        store
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        Ok(self.entries.clone())
    }

    fn record(&mut self, name: &str, score: u32) -> Result<Vec<ScoreEntry>> {
        insert(&mut self.entries, ScoreEntry::new(name, score));
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(scores: &[u32]) -> Vec<ScoreEntry> {
        scores.iter().map(|&s| ScoreEntry::new("AAA", s)).collect()
    }

    #[test]
    fn qualifies_with_free_slots() {
        assert!(qualifies(&[], 0));
        assert!(qualifies(&table(&[500, 400, 300, 200]), 1));
    }

    #[test]
    fn qualifies_only_above_lowest_when_full() {
        let full = table(&[500, 400, 300, 200, 100]);
        assert!(qualifies(&full, 101));
        assert!(!qualifies(&full, 100));
        assert!(!qualifies(&full, 0));
    }

    #[test]
    fn insert_keeps_top_five_descending() {
        let mut entries = table(&[500, 400, 300, 200, 100]);
        insert(&mut entries, ScoreEntry::new("NEW", 350));
        let scores: Vec<u32> = entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![500, 400, 350, 300, 200]);
    }

    #[test]
    fn tie_ranks_below_existing() {
        let mut entries = vec![ScoreEntry::new("OLD", 300)];
        insert(&mut entries, ScoreEntry::new("NEW", 300));
        assert_eq!(entries[0].name, "OLD");
        assert_eq!(entries[1].name, "NEW");
    }

    #[test]
    fn initials_are_cleaned() {
        assert_eq!(clean_initials("ab"), "AB");
        assert_eq!(clean_initials("a1b-cd"), "ABC");
        assert_eq!(clean_initials("42"), "");
    }

    #[test]
    fn memory_store_records() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        store.record("BOB", 10).unwrap();
        let entries = store.record("AMY", 20).unwrap();
        assert_eq!(entries[0], ScoreEntry::new("AMY", 20));
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
