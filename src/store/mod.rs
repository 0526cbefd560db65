use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::policy::types::Metrics;

/// One observed round outcome. Appended, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub metrics: Metrics,
    pub reward: f64,
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

/// On-disk layout: a single JSON document `{ "history": [...] }`, rewritten
/// in full on every append. Files written before `recordedAt` existed still
/// parse thanks to the serde default.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryLog {
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Append-only history log backed by a flat JSON file. The mutex serializes
/// appends so concurrent update requests cannot interleave file rewrites.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    log: Mutex<HistoryLog>,
}

impl Store {
    /// Loads the persisted log once. A missing file is an empty log; an
    /// unreadable or unparsable file is logged and also treated as empty,
    /// never as a startup failure.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let log = match load_log(&path) {
            Ok(log) => log,
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "Starting with empty history");
                HistoryLog::default()
            }
        };
        Self {
            path,
            log: Mutex::new(log),
        }
    }

    /// Appends one entry and rewrites the whole file. The in-memory log is
    /// updated even when the rewrite fails, matching the contract that the
    /// in-memory state is the only guaranteed effect of an update.
    pub fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut log = self.log.lock().unwrap_or_else(|e| e.into_inner());
        log.history.push(entry);
        let serialized = serde_json::to_vec(&*log)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serialized)?;
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).history.len()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .history
            .clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_log(path: &Path) -> Result<HistoryLog, StoreError> {
    if !path.exists() {
        return Ok(HistoryLog::default());
    }
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
