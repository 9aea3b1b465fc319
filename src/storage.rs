//! Key-value persistence for engine progress.
//!
//! Values are JSON documents. Reads tolerate missing or corrupt data by
//! returning `None`; writes are best-effort and never fail the caller,
//! so in-memory state stays authoritative for the session.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub trait ProgressStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// One JSON file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ProgressStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            log::warn!("could not create progress dir {:?}: {err}", self.dir);
            return;
        }
        if let Err(err) = fs::write(self.path_for(key), value) {
            log::warn!("could not persist progress for {key:?}: {err}");
        }
    }
}

/// Decodes the state stored under `key`, falling back to `T::default()`
/// when the entry is missing or malformed.
pub fn load_state<T>(store: &dyn ProgressStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("discarding malformed progress under {key:?}: {err}");
            T::default()
        }
    }
}

/// Encodes `state` and writes it under `key`. Failures are logged and
/// swallowed.
pub fn save_state<T: Serialize>(store: &mut dyn ProgressStore, key: &str, state: &T) {
    match serde_json::to_string(state) {
        Ok(json) => store.put(key, &json),
        Err(err) => log::warn!("could not encode progress for {key:?}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
    struct Sample {
        count: u32,
        label: String,
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        let state = Sample { count: 3, label: "ok".into() };
        save_state(&mut store, "k", &state);
        assert_eq!(load_state::<Sample>(&store, "k"), state);
    }

    #[test]
    fn missing_key_yields_default() {
        let store = MemoryStore::new();
        assert_eq!(load_state::<Sample>(&store, "absent"), Sample::default());
    }

    #[test]
    fn malformed_json_yields_default() {
        let mut store = MemoryStore::new();
        store.put("k", "{not json");
        assert_eq!(load_state::<Sample>(&store, "k"), Sample::default());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::new(dir.path());
        let state = Sample { count: 7, label: "saved".into() };
        save_state(&mut store, "progress", &state);
        assert!(dir.path().join("progress.json").exists());
        assert_eq!(load_state::<Sample>(&store, "progress"), state);
    }

    #[test]
    fn file_store_tolerates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("never-created"));
        assert_eq!(store.get("progress"), None);
        assert_eq!(load_state::<Sample>(&store, "progress"), Sample::default());
    }
}
