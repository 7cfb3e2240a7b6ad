//! Persistence of the whole appointment collection as one storage record.

use tracing::{debug, warn};

use crate::entry::Appointment;
use crate::error::AppointmentsResult;
use crate::storage::KeyValueStorage;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@data";

/// Reads and writes the full collection under a single key.
///
/// Failures never propagate: a bad read is treated as "no data" and a bad
/// write is dropped, both with a warning on the diagnostic channel.
pub struct AppointmentStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> AppointmentStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        AppointmentStore {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored collection, or an empty one if there is none.
    pub async fn load(&self) -> Vec<Appointment> {
        match self.try_load().await {
            Ok(Some(entries)) => {
                debug!(key = %self.key, count = entries.len(), "Loaded appointments");
                entries
            }
            Ok(None) => {
                debug!(key = %self.key, "No stored appointments");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Could not load appointments, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored record with `entries`.
    /// Returns false if the write failed.
    pub async fn save(&self, entries: &[Appointment]) -> bool {
        match self.try_save(entries).await {
            Ok(()) => {
                debug!(key = %self.key, count = entries.len(), "Saved appointments");
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Could not save appointments");
                false
            }
        }
    }

    async fn try_load(&self) -> AppointmentsResult<Option<Vec<Appointment>>> {
        let Some(raw) = self.storage.get_item(&self.key).await? else {
            return Ok(None);
        };
        let entries = serde_json::from_str(&raw)?;
        Ok(Some(entries))
    }

    async fn try_save(&self, entries: &[Appointment]) -> AppointmentsResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.storage.set_item(&self.key, &raw).await
    }
}
