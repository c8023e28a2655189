//! Content root abstraction for the Sprout documentation scaffold.
//!
//! This crate provides a [`Storage`] trait for abstracting content file
//! enumeration and retrieval from the underlying backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** beyond the local filesystem
//! - **Clean separation** between the discovery pass and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `scan()` and `read()` methods
//! - [`FsStorage`] implementation for a filesystem content root
//! - [`MockStorage`] for testing (behind the `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use sprout_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for path in storage.scan()? {
//!     println!("{}", path.display());
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
