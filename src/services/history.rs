// src/services/history.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::models::CalculationResult;

/// Maximum number of retained calculations; recording an 11th evicts the oldest.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded calculation history, newest first, backed by a single JSON file.
///
/// Persistence is best-effort: every mutation rewrites the whole file, and a
/// write failure is logged but never rolls back the in-memory state or
/// surfaces to the caller. A missing or corrupted file loads as an empty
/// history.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<CalculationResult>,
}

impl HistoryStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        info!(
            "History store opened from {} with {} entries",
            path.display(),
            entries.len()
        );
        Self { path, entries }
    }

    /// Read the persisted slot. Absent slot means empty history; a slot that
    /// fails to parse resets to empty rather than failing.
    fn load(path: &Path) -> Vec<CalculationResult> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(
                    "Could not read history file {}: {}; starting with empty history",
                    path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CalculationResult>>(&text) {
            Ok(mut entries) => {
                entries.truncate(HISTORY_CAPACITY);
                entries
            }
            Err(e) => {
                warn!(
                    "History file {} is malformed ({}); resetting to empty history",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Current history, newest first.
    pub fn entries(&self) -> &[CalculationResult] {
        &self.entries
    }

    pub fn find(&self, timestamp: i64) -> Option<&CalculationResult> {
        self.entries.iter().find(|r| r.timestamp == timestamp)
    }

    /// Prepend a result, trim to capacity, persist.
    pub fn record(&mut self, result: CalculationResult) {
        self.entries.insert(0, result);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist();
    }

    /// Drop all entries, persist the empty sequence.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            error!(
                "Failed to persist calculation history to {}: {:#}",
                self.path.display(),
                e
            );
        }
    }

    fn try_persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
