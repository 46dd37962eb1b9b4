//! # mountspace
//!
//! Mount-point detection and free-space queries for Unix filesystems.
//!
//! ## Example
//!
//! ```no_run
//! use mountspace::Probe;
//!
//! let probe = Probe::new();
//!
//! if probe.is_mount_point("/var") {
//!     let stats = probe.stats("/var").expect("Failed to query /var");
//!     println!("{:.2} MB available", stats.available_mb());
//! }
//! ```
//!
//! ## Backends
//!
//! - `statvfs` (default): `lstat` for mount detection, `statvfs(3)` for space
//! - `fake` (feature `test-utils`): in-memory table for tests
//!
//! ## Platform Support
//!
//! Unix only. On other platforms nothing is reported as mounted and
//! statistics queries return [`Error::Unsupported`].

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Backend implementations for filesystem probing.
pub mod backend;
/// Error types for filesystem probing.
pub mod error;
/// Filesystem statistics types.
pub mod types;

pub use error::{Error, Result};
pub use types::{BYTES_PER_MB, FsStats};

use backend::Backend;
use std::path::Path;

/// High-level client over a filesystem backend.
pub struct Probe {
    backend: Box<dyn Backend>,
}

impl Probe {
    /// Create a Probe with the platform backend.
    pub fn new() -> Self {
        Self {
            backend: Box::new(backend::default_backend()),
        }
    }

    /// Create a probe with a custom backend (useful for testing).
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Whether `path` is the root of a mounted filesystem.
    ///
    /// Any failure to inspect the path counts as "not mounted".
    pub fn is_mount_point(&self, path: impl AsRef<Path>) -> bool {
        self.backend.is_mount_point(path.as_ref())
    }

    /// Query free-space statistics for the filesystem containing `path`.
    ///
    /// # Errors
    ///
    /// - `NotFound`: path does not exist
    /// - `InvalidPath`: path cannot be passed to the OS
    /// - `Stat`: any other OS failure
    pub fn stats(&self, path: impl AsRef<Path>) -> Result<FsStats> {
        let path = path.as_ref();
        let stats = self.backend.stats(path)?;
        log::debug!(
            "{}: {} blocks of {} bytes available",
            path.display(),
            stats.blocks_available,
            stats.block_size
        );
        Ok(stats)
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_default_probe_sees_root() {
        let probe = Probe::default();
        assert!(probe.is_mount_point("/"));
        assert!(probe.stats("/").is_ok());
    }

    #[cfg(feature = "test-utils")]
    #[test]
    fn test_with_backend_delegates() {
        let probe = Probe::with_backend(Box::new(
            backend::fake::FakeBackend::new().mounted_mb("/boot", 12),
        ));

        assert!(probe.is_mount_point("/boot"));
        assert!(!probe.is_mount_point("/"));
        let stats = probe.stats("/boot").unwrap();
        assert_eq!(stats.available_bytes(), 12 * BYTES_PER_MB);
    }
}
