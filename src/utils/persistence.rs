//! JSON persistence helpers for ~/.flap/ files, and the file-backed
//! key-value store behind the high score.

use crate::core::score::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default store file under ~/.flap/.
pub const STORE_FILE: &str = "store.json";

/// Get the ~/.flap/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory not found"))?;
    let dir = home.join(".flap");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flap/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(app_dir()?.join(filename))
}

/// Load a JSON file from ~/.flap/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    save_path(filename)
        .ok()
        .and_then(|path| fs::read_to_string(path).ok())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Save a value as pretty-printed JSON to ~/.flap/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(save_path(filename)?, json)
}

/// Durable [`KeyValueStore`] backed by a JSON string map on disk.
///
/// Writes through on every `set`; a failed write keeps the in-memory
/// value so the running game stays consistent even without a disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    filename: String,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Load the default store; missing or corrupt files start empty.
    pub fn load() -> Self {
        Self::with_file(STORE_FILE)
    }

    /// Load a store from a specific file name under ~/.flap/.
    pub fn with_file(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            values: load_json_or_default(filename),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        let _ = save_json(&self.filename, &self.values);
    }
}
