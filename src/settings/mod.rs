//! Injected key/value persistence
//!
//! The deck never touches ambient storage; it writes through a
//! [`SettingsStore`] handed in at construction. [`MemorySettings`] keeps
//! values for the process lifetime, [`JsonSettings`] persists them to a
//! JSON file.

use rustc_hash::FxHashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing a settings store
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Key/value persistence injected into the deck
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Process-local store used when no settings file is configured
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: FxHashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        MemorySettings::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file-backed store; the whole map is rewritten on every set
#[derive(Debug)]
pub struct JsonSettings {
    path: PathBuf,
    values: FxHashMap<String, String>,
}

impl JsonSettings {
    /// Open or create the store at `path`. A missing file starts empty;
    /// unreadable contents are an error rather than silent data loss.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(JsonSettings { path, values })
    }
}

impl SettingsStore for JsonSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemorySettings::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "sand").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("sand"));
    }

    #[test]
    fn test_json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = JsonSettings::open(&path).unwrap();
        store.set("theme", "sea-wave").unwrap();
        drop(store);

        let store = JsonSettings::open(&path).unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("sea-wave"));
    }

    #[test]
    fn test_json_store_starts_empty_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettings::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_json_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonSettings::open(&path),
            Err(SettingsError::Format(_))
        ));
    }
}
