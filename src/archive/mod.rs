//! Roster archival: flat, timestamped records of closed check-in
//! windows. Archival failure never loses the in-memory roster; the
//! caller may retry, but the session itself stays closed.

use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterRecord;
use std::fs;
use std::path::PathBuf;

/// Destination for finalized roster records.
pub trait RecordStore {
    fn write(&self, name: &str, content: &str) -> AppResult<PathBuf>;
}

/// Record store over a plain directory of text files.
pub struct FsRecordStore {
    dir: PathBuf,
}

impl FsRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RecordStore for FsRecordStore {
    fn write(&self, name: &str, content: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(AppError::StorageUnavailable)?;
        let path = self.dir.join(name);
        fs::write(&path, content).map_err(AppError::StorageUnavailable)?;
        Ok(path)
    }
}

pub struct RosterArchiver<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> RosterArchiver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Write one record named after the closing timestamp, one line per
    /// registrant: `<display name> - <YYYY-MM-DD HH:MM:SS>`.
    pub fn archive(&self, record: &RosterRecord) -> AppResult<PathBuf> {
        let name = format!(
            "checkins_{}.txt",
            record.closed_at.format("%Y%m%d_%H%M%S")
        );

        let mut content = String::new();
        for entry in &record.entries {
            content.push_str(&format!(
                "{} - {}\n",
                entry.display_name,
                entry.recorded_at.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        self.store.write(&name, &content)
    }
}
