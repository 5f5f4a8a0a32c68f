use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::NamedTempFile;

use super::error::StorageError;

/// Persisted string key/value storage shared by every handle of one
/// client runtime, in the way browser tabs share `localStorage`.
///
/// `set_all` and `remove_all` apply all of their entries or none of them.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_all(&self, entries: &[(&str, String)]) -> Result<(), StorageError>;
    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set_all(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let mut map = self.entries.lock();
        for (key, value) in entries {
            map.insert((*key).to_owned(), value.clone());
        }
        Ok(())
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut map = self.entries.lock();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}

/// A JSON object on disk. Every write goes to a temp file in the same
/// directory that is then renamed over the target, so readers see either the
/// old or the new contents.
pub struct FileStorage {
    path: PathBuf,
    // serialises read-modify-write cycles of this handle
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, map)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }

    fn update(
        &self,
        apply: impl FnOnce(&mut HashMap<String, String>),
    ) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        let mut map = self.read_map()?;
        apply(&mut map);
        self.write_map(&map)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_all(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        self.update(|map| {
            for (key, value) in entries {
                map.insert((*key).to_owned(), value.clone());
            }
        })
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|map| {
            for key in keys {
                map.remove(*key);
            }
        })
    }
}
