//! Content discovery pass for the Sprout documentation scaffold.
//!
//! The discovery pass is a pure function from a content root to a navigation
//! index: it enumerates content files through a [`Storage`] backend, derives
//! a URL path for each, and extracts each page's section list. The resulting
//! [`SectionIndex`] is consumed by the presentation shell, which forwards it
//! to the layout collaborator.
//!
//! The index is rebuilt on every invocation. Nothing is cached across passes
//! and no partial result is ever exposed: one failed load fails the whole
//! pass.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use sprout_site::discover;
//! use sprout_storage::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! let index = discover(&storage)?;
//! let sections = &index["/guides/setup"];
//! ```
//!
//! [`Storage`]: sprout_storage::Storage

mod discovery;

pub use discovery::{DiscoveryError, SectionIndex, discover, source_path_to_url};
