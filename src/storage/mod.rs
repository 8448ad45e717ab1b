//! Local preference storage.
//!
//! A tiny string key-value store that survives restarts. The application
//! keeps two keys in it: the chosen theme and the time of the last visit.

mod error;

pub use error::StorageError;

use log::*;
use std::collections::BTreeMap;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

pub const THEME_KEY: &str = "theme";
pub const LAST_VISIT_KEY: &str = "lastVisit";

const FILE_NAME: &str = "preferences.yml";

/// Durable string slots.
///
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Preferences kept in a YAML map on disk.
///
pub struct FileStore {
    file_path: PathBuf,
}

impl FileStore {
    /// Return a store backed by the preferences file inside the directory.
    ///
    pub fn new(dir_path: &Path) -> Self {
        FileStore {
            file_path: dir_path.join(FILE_NAME),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.file_path).map_err(|e| StorageError::Read {
            path: self.file_path.clone(),
            source: e,
        })?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml::from_str(&contents).map_err(|e| StorageError::Corrupt {
            path: self.file_path.clone(),
            message: e.to_string(),
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content =
            serde_yaml::to_string(entries).map_err(|e| StorageError::Write {
                path: self.file_path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()),
            })?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let write_error = |e| StorageError::Write {
            path: self.file_path.clone(),
            source: e,
        };
        let mut file = fs::File::create(&self.file_path).map_err(write_error)?;
        write!(file, "{}", content).map_err(write_error)?;
        file.flush().map_err(write_error)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt { message, .. }) => {
                warn!("Discarding unreadable preferences: {}", message);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}

/// Preferences held in memory only.
///
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Record the current time under the last-visit key.
///
pub fn record_visit(store: &mut dyn PreferenceStore) -> Result<(), StorageError> {
    let now = chrono::Utc::now().to_rfc3339();
    debug!("Recording visit at {}", now);
    store.set(LAST_VISIT_KEY, &now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        store.set(THEME_KEY, "dark").unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set(THEME_KEY, "light").unwrap();
        record_visit(&mut store).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));
        let visit = store.get(LAST_VISIT_KEY).unwrap().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&visit).is_ok());
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::new(&nested);
        store.set(THEME_KEY, "dark").unwrap();
        assert!(store.file_path().exists());
    }

    #[test]
    fn test_corrupt_file_reports_error_then_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        fs::write(store.file_path(), "- not\n- a map\n").unwrap();
        assert!(matches!(
            store.get(THEME_KEY),
            Err(StorageError::Corrupt { .. })
        ));
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));
    }
}
