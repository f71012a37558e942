//! Flat-file JSON library adapter
//!
//! The whole library is one JSON array of BriefRecord. Records are mirrored
//! in memory and the entire array is rewritten on every mutation. Single
//! interactive user per file is assumed; concurrent writers can lose updates.

use crate::domain::models::BriefRecord;
use crate::error::{AppError, Result};
use crate::ports::library::BriefLibraryPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// JSON-array file library implementation
#[derive(Debug)]
pub struct JsonFileLibrary {
    path: PathBuf,
    capacity: usize,
    records: Mutex<Vec<BriefRecord>>,
}

impl JsonFileLibrary {
    /// Open a library file, loading existing records.
    ///
    /// A missing file starts an empty library; a file that fails to parse
    /// into typed records is an error (no silent defaulting).
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self> {
        let path = path.into();
        let records = Self::load(&path)?;
        log::info!(
            "Meeting library loaded from {} ({} records)",
            path.display(),
            records.len()
        );
        Ok(Self {
            path,
            capacity,
            records: Mutex::new(records),
        })
    }

    /// An empty library at the given path, used as the fallback when the
    /// existing file is unreadable. Nothing is written until the first save.
    pub fn empty(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
            records: Mutex::new(Vec::new()),
        }
    }

    fn load(path: &Path) -> Result<Vec<BriefRecord>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::Library(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str::<Vec<BriefRecord>>(&content).map_err(|e| {
            AppError::Library(format!("library file unreadable ({}): {}", path.display(), e))
        })
    }

    /// Serialize the full record list back to disk, overwriting the file
    fn flush(&self, records: &[BriefRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Library(format!("failed to create library directory: {}", e))
                })?;
            }
        }
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| AppError::Library(format!("failed to serialize library: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| AppError::Library(format!("failed to write library file: {}", e)))
    }

    /// Unix-millis id, bumped past the current maximum on collision
    fn next_id(records: &[BriefRecord]) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let max_existing = records.iter().map(|r| r.id).max().unwrap_or(0);
        if now > max_existing {
            now
        } else {
            max_existing + 1
        }
    }
}

#[async_trait]
impl BriefLibraryPort for JsonFileLibrary {
    async fn save(&self, record: &BriefRecord) -> Result<i64> {
        let mut records = self.records.lock().await;

        let mut stored = record.clone();
        stored.id = Self::next_id(&records);
        let id = stored.id;
        records.push(stored);

        // Capacity trim drops oldest-first
        if self.capacity > 0 && records.len() > self.capacity {
            let excess = records.len() - self.capacity;
            records.drain(0..excess);
        }

        self.flush(&records)?;
        log::info!("Saved brief {} to library ({} total)", id, records.len());
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<BriefRecord>> {
        Ok(self.records.lock().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<BriefRecord>> {
        Ok(self
            .records
            .lock()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn clear(&self) -> Result<()> {
        let mut records = self.records.lock().await;
        records.clear();
        self.flush(&records)?;
        log::info!("Meeting library cleared");
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.lock().await.len())
    }
}
