use std::path::Path;

use crate::error::Result;
use crate::types::FsStats;

/// In-memory backend for tests.
#[cfg(feature = "test-utils")]
pub mod fake;
/// OS backend built on `lstat` and `statvfs(3)`.
pub mod statvfs;

/// Backend trait for filesystem probing
///
/// Two environment-provided primitives:
/// - a mount-point predicate
/// - a free-space statistics query
///
/// The real implementation calls into the OS; tests swap in the fake.
pub trait Backend: Send + Sync {
    /// Whether `path` is the root of a mounted filesystem
    fn is_mount_point(&self, path: &Path) -> bool;

    /// Query available-block count and block size for the filesystem at `path`
    fn stats(&self, path: &Path) -> Result<FsStats>;
}

impl<T: Backend + ?Sized> Backend for std::sync::Arc<T> {
    fn is_mount_point(&self, path: &Path) -> bool {
        (**self).is_mount_point(path)
    }

    fn stats(&self, path: &Path) -> Result<FsStats> {
        (**self).stats(path)
    }
}

/// Get the default backend for this platform.
pub fn default_backend() -> statvfs::StatvfsBackend {
    statvfs::StatvfsBackend::new()
}
