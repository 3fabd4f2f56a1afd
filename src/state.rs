//! Snapshot store for the last observed vacancy state
//!
//! A single JSON document on disk, fully overwritten on every run. Load
//! failures degrade to "no previous state" and save failures are logged
//! and swallowed; neither is ever fatal, because by the time the store is
//! written the notification decision has already been made.

use std::path::PathBuf;

use chrono::Utc;
use tokio::fs;
use tracing::{error, info, warn};

use crate::record::VacancyRecord;

/// Loads and saves the single persisted [`VacancyRecord`]
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the previously saved record
    ///
    /// Returns `None` when the file is absent, unreadable, or unparsable;
    /// the latter two are logged as warnings.
    pub async fn load(&self) -> Option<VacancyRecord> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not load previous state: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => {
                info!("Previous state loaded");
                Some(record)
            }
            Err(e) => {
                warn!("Could not parse previous state: {}", e);
                None
            }
        }
    }

    /// Persist the record, stamping `last_check` with the current time
    ///
    /// A write failure only degrades the next run's comparison, so it is
    /// logged rather than propagated.
    pub async fn save(&self, record: &mut VacancyRecord) {
        record.last_check = Some(Utc::now());

        let json = match serde_json::to_string_pretty(record) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize state: {}", e);
                return;
            }
        };

        match fs::write(&self.path, json).await {
            Ok(()) => info!("State saved successfully"),
            Err(e) => error!("Failed to save state: {}", e),
        }
    }
}
