//! High-score persistence over an injected key-value capability.
//!
//! The core never touches the filesystem; it talks to a string store
//! with localStorage-shaped semantics. The file-backed implementation
//! lives in `utils::persistence`, tests and the simulator use
//! [`MemoryStore`].

use crate::core::constants::HIGH_SCORE_KEY;
use std::collections::HashMap;

/// Durable string key-value store provided by the host environment.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Volatile store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Persisted best score. A missing or non-numeric value reads as 0
/// ("no high score yet") rather than an error.
pub fn read_best(store: &impl KeyValueStore) -> u32 {
    store
        .get(HIGH_SCORE_KEY)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Overwrite the persisted best if `current` beats it. Returns true
/// when the store was updated, so persisted best never decreases.
pub fn save_high_score(store: &mut impl KeyValueStore, current: u32) -> bool {
    if current > read_best(store) {
        store.set(HIGH_SCORE_KEY, &current.to_string());
        true
    } else {
        false
    }
}
