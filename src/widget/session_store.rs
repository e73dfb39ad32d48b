// src/widget/session_store.rs
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use uuid::Uuid;

/// Storage key holding the per-browser session identifier.
pub const SESSION_ID_KEY: &str = "nyayamitra_session_id";

/// Minimal durable-storage seam so conversation logic is testable without a
/// real browser or filesystem.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Returns the persisted session identifier, generating and persisting a
/// fresh v4 UUID on first use. Idempotent until the store is cleared
/// externally.
pub fn get_or_create_session_id(store: &mut dyn KeyValueStore) -> String {
    if let Some(id) = store.get(SESSION_ID_KEY) {
        if !id.is_empty() {
            return id;
        }
    }
    let id = Uuid::new_v4().to_string();
    store.set(SESSION_ID_KEY, &id);
    id
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// JSON-file-backed store for native embedders. Entries are loaded once at
/// open and written through on every set; a write failure loses durability
/// but never the in-memory value.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, entries })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Ok(raw) = serde_json::to_string_pretty(&self.entries) {
            if let Err(e) = std::fs::write(&self.path, raw) {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session store");
            }
        }
    }
}
