//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores content files in memory. Use the builder methods to configure
/// the mock with test data, including injected read failures.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use sprout_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("guide.md", "## Basics\n\nContent.")
///     .with_failing_file("broken.md");
///
/// let files = storage.scan().unwrap();
/// assert!(storage.read(Path::new("broken.md")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    contents: RwLock<HashMap<PathBuf, String>>,
    failing: RwLock<HashSet<PathBuf>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a content file with the given path and content.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.contents
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Add a file that is listed by `scan()` but fails on `read()`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failing_file(self, path: impl Into<PathBuf>) -> Self {
        self.failing.write().unwrap().insert(path.into());
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<PathBuf>, StorageError> {
        let mut paths: Vec<PathBuf> = self
            .contents
            .read()
            .unwrap()
            .keys()
            .chain(self.failing.read().unwrap().iter())
            .cloned()
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        if self.failing.read().unwrap().contains(path) {
            return Err(StorageError::new(StorageErrorKind::InvalidContent)
                .with_path(path)
                .with_backend(BACKEND));
        }
        self.contents
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }
}
