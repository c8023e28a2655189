//! The discovery pass: content root to navigation index.
//!
//! Scans the content root once, fans the per-file loads out across the rayon
//! thread pool, and joins them into a [`SectionIndex`]. There is no ordering
//! dependency between pages; the fan-in waits for the full set and fails as
//! a whole if any single load fails.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use sprout_sections::{Section, extract_sections};
use sprout_storage::{Storage, StorageError};

/// Navigation index produced by a discovery pass.
///
/// Maps URL paths to the section list each content file exports. Used as a
/// lookup map; iteration order carries no meaning. Keys are unique by
/// construction (one entry per discovered file); should two files normalize
/// to the same URL path, the later one in iteration order silently wins.
pub type SectionIndex = HashMap<String, Vec<Section>>;

/// Error returned when a discovery pass fails.
///
/// There is no local recovery or degraded mode: the error propagates to the
/// render/build pipeline, which surfaces it as a failed page render.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// Scanning the content root failed.
    #[error("failed to scan content root: {0}")]
    Scan(#[source] StorageError),
    /// Loading a single content file failed.
    #[error("failed to load content file {}: {source}", .path.display())]
    Load {
        /// Path of the file that failed to load, relative to the content root.
        path: PathBuf,
        /// Underlying storage error.
        #[source]
        source: StorageError,
    },
}

/// Convert Duration to milliseconds as f64.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Run a discovery pass against a content root.
///
/// Enumerates all content files, loads each one concurrently, and builds the
/// URL path to section list mapping. A file exporting no sections yields an
/// empty list, not an error. An empty or missing content root yields an
/// empty index.
///
/// # Errors
///
/// Returns [`DiscoveryError::Scan`] if the root cannot be scanned, or
/// [`DiscoveryError::Load`] if any single file fails to load. No partial
/// index is returned.
pub fn discover(storage: &dyn Storage) -> Result<SectionIndex, DiscoveryError> {
    let start = Instant::now();

    let files = storage.scan().map_err(DiscoveryError::Scan)?;
    let file_count = files.len();

    let entries: Vec<(String, Vec<Section>)> = files
        .par_iter()
        .map(|path| {
            let content = storage
                .read(path)
                .map_err(|source| DiscoveryError::Load {
                    path: path.clone(),
                    source,
                })?;
            Ok((source_path_to_url(path), extract_sections(&content)))
        })
        .collect::<Result<_, DiscoveryError>>()?;

    let index: SectionIndex = entries.into_iter().collect();

    if index.len() < file_count {
        tracing::warn!(
            file_count,
            page_count = index.len(),
            "URL path collision during discovery"
        );
    }

    tracing::info!(
        page_count = index.len(),
        elapsed_ms = elapsed_ms(start),
        "Discovery pass completed"
    );

    Ok(index)
}

/// Convert a root-relative source path to a URL path.
///
/// The file extension is removed and a trailing reserved `index` filename
/// segment is stripped; nothing else is rewritten.
///
/// Examples:
/// - `"index.md"` -> `"/"`
/// - `"guide.md"` -> `"/guide"`
/// - `"guides/index.md"` -> `"/guides"`
/// - `"guides/setup.md"` -> `"/guides/setup"`
#[must_use]
pub fn source_path_to_url(source_path: &Path) -> String {
    let without_ext = source_path.with_extension("");
    let path_str = without_ext.to_string_lossy().replace('\\', "/");

    // Handle root index file
    if path_str == "index" {
        return "/".to_owned();
    }

    // Handle directory index files; only the reserved filename is stripped
    if let Some(without_index) = path_str.strip_suffix("/index") {
        return format!("/{without_index}");
    }

    format!("/{path_str}")
}
