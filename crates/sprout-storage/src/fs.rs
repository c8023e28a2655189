//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for enumerating and reading content files under a
//! local content root directory.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Default pattern for content files.
const DEFAULT_PATTERN: &str = "**/*.md";

/// Filesystem storage implementation.
///
/// Scans a content root recursively for files matching a glob pattern.
/// Hidden entries and common non-documentation directories are skipped.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use sprout_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let files = storage.scan()?;
/// ```
pub struct FsStorage {
    /// Root directory containing content files.
    content_root: PathBuf,
    /// Glob pattern matched against root-relative paths.
    pattern: Pattern,
}

impl FsStorage {
    /// Create a new filesystem storage with the default `**/*.md` pattern.
    ///
    /// # Arguments
    ///
    /// * `content_root` - Root directory containing content files
    #[must_use]
    pub fn new(content_root: PathBuf) -> Self {
        Self::with_pattern(content_root, DEFAULT_PATTERN)
    }

    /// Create a new filesystem storage with a custom content file pattern.
    ///
    /// # Arguments
    ///
    /// * `content_root` - Root directory containing content files
    /// * `pattern` - Glob pattern for content files (e.g., `"**/*.md"`)
    ///
    /// # Panics
    ///
    /// Panics if the provided glob pattern is invalid.
    #[must_use]
    pub fn with_pattern(content_root: PathBuf, pattern: &str) -> Self {
        Self {
            content_root,
            pattern: Pattern::new(pattern).expect("invalid glob pattern"),
        }
    }

    /// Get the content root directory.
    #[must_use]
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Validate that a path doesn't escape the content root.
    ///
    /// Rejects paths containing parent directory components (`..`) to prevent
    /// path traversal (e.g., `../../../etc/passwd`).
    fn validate_path(path: &Path) -> Result<(), StorageError> {
        let has_parent_dir = path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir));

        if has_parent_dir {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Scan a directory recursively and collect matching relative paths.
    fn scan_directory(&self, dir_path: &Path, base_path: &Path, files: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir_path) else {
            return;
        };

        // Collect entries with cached file_type to avoid repeated stat calls in sort.
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                let name_lower = e.file_name().to_string_lossy().to_lowercase();
                (e, is_dir, name_lower)
            })
            .collect();

        // Sort: directories first, then alphabetical by name
        entries.sort_by(|(_, a_is_dir, a_name), (_, b_is_dir, b_name)| {
            b_is_dir.cmp(a_is_dir).then_with(|| a_name.cmp(b_name))
        });

        for (entry, is_dir, name_lower) in entries {
            // Skip hidden files/dirs
            if name_lower.starts_with('.') {
                continue;
            }

            // Skip common non-documentation directories
            if is_dir
                && matches!(
                    name_lower.as_str(),
                    "node_modules" | "target" | "dist" | "build"
                )
            {
                continue;
            }

            let path = entry.path();
            let rel_path = base_path.join(entry.file_name());

            if is_dir {
                self.scan_directory(&path, &rel_path, files);
            } else if self.pattern.matches(&rel_path.to_string_lossy()) {
                files.push(rel_path);
            }
        }
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<PathBuf>, StorageError> {
        if !self.content_root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        self.scan_directory(&self.content_root, Path::new(""), &mut files);
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        Self::validate_path(path)?;
        let full_path = self.content_root.join(path);
        fs::read_to_string(&full_path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_scan_missing_root_returns_empty() {
        let temp_dir = create_test_dir();
        let storage = FsStorage::new(temp_dir.path().join("nonexistent"));

        let files = storage.scan().unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_empty_root_returns_empty() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir(&root).unwrap();

        let storage = FsStorage::new(root);

        assert!(storage.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_flat_root() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("guide.md"), "# Guide").unwrap();
        fs::write(root.join("api.md"), "# API").unwrap();
        fs::write(root.join("notes.txt"), "not content").unwrap();

        let storage = FsStorage::new(root);

        let files = storage.scan().unwrap();
        assert_eq!(files, vec![PathBuf::from("api.md"), PathBuf::from("guide.md")]);
    }

    #[test]
    fn test_scan_nested_root() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(root.join("guides")).unwrap();
        fs::write(root.join("index.md"), "# Home").unwrap();
        fs::write(root.join("guides/index.md"), "# Guides").unwrap();
        fs::write(root.join("guides/setup.md"), "# Setup").unwrap();

        let storage = FsStorage::new(root);

        let files = storage.scan().unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("guides/index.md"),
                PathBuf::from("guides/setup.md"),
                PathBuf::from("index.md"),
            ]
        );
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/notes.md"), "# Hidden dir").unwrap();
        fs::write(root.join(".hidden.md"), "# Hidden").unwrap();
        fs::write(root.join("visible.md"), "# Visible").unwrap();

        let storage = FsStorage::new(root);

        let files = storage.scan().unwrap();
        assert_eq!(files, vec![PathBuf::from("visible.md")]);
    }

    #[test]
    fn test_scan_skips_non_documentation_dirs() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("node_modules/pkg/readme.md"), "# Pkg").unwrap();
        fs::write(root.join("guide.md"), "# Guide").unwrap();

        let storage = FsStorage::new(root);

        let files = storage.scan().unwrap();
        assert_eq!(files, vec![PathBuf::from("guide.md")]);
    }

    #[test]
    fn test_scan_custom_pattern() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("page.mdx"), "# MDX").unwrap();
        fs::write(root.join("page.md"), "# MD").unwrap();

        let storage = FsStorage::with_pattern(root, "**/*.mdx");

        let files = storage.scan().unwrap();
        assert_eq!(files, vec![PathBuf::from("page.mdx")]);
    }

    #[test]
    fn test_read_existing_file() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("guide.md"), "# Guide\n\nContent.").unwrap();

        let storage = FsStorage::new(root);

        let content = storage.read(Path::new("guide.md")).unwrap();
        assert_eq!(content, "# Guide\n\nContent.");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir(&root).unwrap();

        let storage = FsStorage::new(root);

        let err = storage.read(Path::new("missing.md")).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("broken.md"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let storage = FsStorage::new(root);

        let err = storage.read(Path::new("broken.md")).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidContent);
    }

    #[test]
    fn test_read_rejects_path_traversal() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");
        fs::create_dir(&root).unwrap();

        let storage = FsStorage::new(root);

        let err = storage.read(Path::new("../etc/passwd")).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_content_root_getter() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path().join("docs");

        let storage = FsStorage::new(root.clone());

        assert_eq!(storage.content_root(), root);
    }
}
