//! Persistence seams: the key-value store for view preferences and the sink
//! exported files are handed to.
//!
//! Both are traits so the controller can be driven in tests without touching
//! the filesystem. The file-backed implementations write atomically through a
//! temp file in the destination directory.

use crate::constants::COLUMNS_STORAGE_KEY;
use crate::types::Column;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by stores and savers
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store contents: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

// ============================================================================
// Key-value store
// ============================================================================

/// String key-value store used to remember view preferences across sessions
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store, shareable across threads
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.into(), value.into());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<data dir>/tabledesk/store.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("tabledesk").join("store.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock();
        match self.read_entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!("Failed to read store {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.lock.lock();
        // A corrupt file is replaced rather than blocking every future write
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable store {:?}: {}", self.path, e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&entries)?;
        write_atomic(&self.path, content.as_bytes())
    }
}

/// Write `bytes` to `path` via a temp file in the same directory
fn write_atomic(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| StorageError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

// ============================================================================
// Column preferences
// ============================================================================

/// Restore the saved column list, if any.
///
/// Unparseable entries are logged and treated as absent.
pub fn load_columns(store: &dyn KeyValueStore) -> Option<Vec<Column>> {
    let saved = store.get(COLUMNS_STORAGE_KEY)?;
    match serde_json::from_str::<Vec<Column>>(&saved) {
        Ok(columns) => Some(columns),
        Err(e) => {
            tracing::warn!("Ignoring saved columns: {}", e);
            None
        }
    }
}

/// Save the column list (key, label, visible) as JSON
pub fn save_columns(store: &dyn KeyValueStore, columns: &[Column]) -> StorageResult<()> {
    let json = serde_json::to_string(columns)?;
    store.set(COLUMNS_STORAGE_KEY, &json)
}

// ============================================================================
// Export sink
// ============================================================================

/// Receives exported files: "given bytes and a suggested filename, save"
pub trait FileSaver {
    fn save(&self, bytes: &[u8], filename: &str) -> StorageResult<()>;
}

/// Saves exports into a directory
#[derive(Clone, Debug)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Saves into the user's download directory
    pub fn downloads() -> Option<Self> {
        dirs::download_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirectorySaver {
    fn save(&self, bytes: &[u8], filename: &str) -> StorageResult<()> {
        let path = self.dir.join(filename);
        write_atomic(&path, bytes)?;
        tracing::info!("Saved {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }
}

/// Keeps saved files in memory
#[derive(Debug, Default)]
pub struct MemorySaver {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All saves so far, oldest first
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().clone()
    }

    /// Contents of the most recent save, as text
    pub fn last_text(&self) -> Option<String> {
        self.saved
            .lock()
            .last()
            .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl FileSaver for MemorySaver {
    fn save(&self, bytes: &[u8], filename: &str) -> StorageResult<()> {
        self.saved.lock().push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}
