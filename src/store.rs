//! Persistence collaborators. Saving is always an explicit user action and
//! its outcome never feeds back into the editing history.

use crate::error::StoreError;
use crate::graph::GraphDocument;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Somewhere a flow document can be saved to and loaded from.
pub trait FlowStore {
    fn save(&self, document: &GraphDocument) -> Result<(), StoreError>;

    fn load(&self) -> Result<GraphDocument, StoreError>;
}

/// Stores the document as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlowStore for JsonFileStore {
    fn save(&self, document: &GraphDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Io(format!(
                    "Could not create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        fs::write(&self.path, json).map_err(|e| {
            StoreError::Io(format!(
                "Could not write to file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn load(&self) -> Result<GraphDocument, StoreError> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            StoreError::Io(format!(
                "Could not read file '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        let document: GraphDocument =
            serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))?;
        document.validate()?;
        Ok(document)
    }
}

/// Keeps the last saved document in memory. Useful for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<GraphDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: GraphDocument) -> Self {
        Self {
            saved: Mutex::new(Some(document)),
        }
    }

    /// The last saved document, if any.
    pub fn snapshot(&self) -> Option<GraphDocument> {
        self.saved.lock().ok().and_then(|guard| guard.clone())
    }
}

impl FlowStore for MemoryStore {
    fn save(&self, document: &GraphDocument) -> Result<(), StoreError> {
        let mut guard = self
            .saved
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        *guard = Some(document.clone());
        Ok(())
    }

    fn load(&self) -> Result<GraphDocument, StoreError> {
        let guard = self
            .saved
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        guard
            .clone()
            .ok_or_else(|| StoreError::Unavailable("nothing has been saved yet".to_string()))
    }
}
