//! Asynchronous key-value storage backends.
//!
//! The store adapter only ever needs string values under string keys, so
//! backends stay small: a directory of JSON files for real use, and an
//! in-memory map for tests and throwaway sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::AppointmentsResult;

/// String-keyed asynchronous storage.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was written.
    async fn get_item(&self, key: &str) -> AppointmentsResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> AppointmentsResult<()>;
}

/// One file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Path of the file backing `key` ("@data" -> "<dir>/data.json").
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem_for(key)))
    }
}

fn file_stem_for(key: &str) -> String {
    let stem = slug::slugify(key);
    if stem.is_empty() {
        "record".to_string()
    } else {
        stem
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_item(&self, key: &str) -> AppointmentsResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> AppointmentsResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        // Rename over the old record so readers see either the old or new value
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// In-process storage with switchable failures.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.lock().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current raw value under `key`, bypassing failure injection.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock leaves the map itself intact
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn injected_failure(op: &str) -> io::Error {
    io::Error::other(format!("injected {op} failure"))
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> AppointmentsResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected_failure("read").into());
        }
        Ok(self.lock().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> AppointmentsResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected_failure("write").into());
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_slugifies_key() {
        let storage = FileStorage::new("/tmp/appointments");
        assert_eq!(
            storage.path_for("@data"),
            PathBuf::from("/tmp/appointments/data.json")
        );
        assert_eq!(
            storage.path_for("My Agenda!"),
            PathBuf::from("/tmp/appointments/my-agenda.json")
        );
        assert_eq!(
            storage.path_for("@@"),
            PathBuf::from("/tmp/appointments/record.json")
        );
    }

    #[tokio::test]
    async fn test_file_storage_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get_item("@data").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_overwrites_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        storage.set_item("@data", "[1]").await.unwrap();
        storage.set_item("@data", "[2]").await.unwrap();

        assert_eq!(storage.get_item("@data").await.unwrap().as_deref(), Some("[2]"));
        assert!(!storage.path_for("@data").with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_memory_storage_injected_failures() {
        let storage = MemoryStorage::with_item("@data", "[]");

        storage.set_fail_reads(true);
        assert!(storage.get_item("@data").await.is_err());

        storage.set_fail_writes(true);
        assert!(storage.set_item("@data", "x").await.is_err());
        assert_eq!(storage.peek("@data").as_deref(), Some("[]"));
    }
}
