//! statvfs backend implementation.
//!
//! Mount-point detection compares `lstat` results of a path and its parent:
//! a path is a mount point when it sits on a different device than its
//! parent, or when it is its own parent (the filesystem root). Symbolic
//! links are never mount points.
//!
//! Free space comes from `statvfs(3)`: `f_bavail * f_frsize`.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::FsStats;

use super::Backend;

/// Backend that asks the operating system directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatvfsBackend;

impl StatvfsBackend {
    /// Create a new StatvfsBackend.
    pub fn new() -> Self {
        Self
    }
}

impl Backend for StatvfsBackend {
    #[cfg(unix)]
    fn is_mount_point(&self, path: &Path) -> bool {
        use std::os::unix::fs::MetadataExt;

        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                log::trace!("lstat {} failed: {}", path.display(), e);
                return false;
            }
        };

        if meta.file_type().is_symlink() {
            return false;
        }

        let parent = match std::fs::symlink_metadata(path.join("..")) {
            Ok(meta) => meta,
            Err(e) => {
                log::trace!("lstat {}/.. failed: {}", path.display(), e);
                return false;
            }
        };

        meta.dev() != parent.dev() || meta.ino() == parent.ino()
    }

    #[cfg(not(unix))]
    fn is_mount_point(&self, _path: &Path) -> bool {
        false
    }

    #[cfg(unix)]
    #[allow(unsafe_code)]
    fn stats(&self, path: &Path) -> Result<FsStats> {
        use std::ffi::CString;
        use std::mem::MaybeUninit;
        use std::os::unix::ffi::OsStrExt;

        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| Error::InvalidPath(path.display().to_string()))?;

        // SAFETY: statvfs is a standard POSIX call. We check the return value
        // before reading the struct.
        let stat = unsafe {
            let mut stat: MaybeUninit<libc::statvfs> = MaybeUninit::uninit();
            if libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) != 0 {
                return Err(os_error(path, std::io::Error::last_os_error()));
            }
            stat.assume_init()
        };

        Ok(FsStats::new(
            u64::from(stat.f_bavail),
            u64::from(stat.f_frsize),
        ))
    }

    #[cfg(not(unix))]
    fn stats(&self, _path: &Path) -> Result<FsStats> {
        Err(Error::Unsupported)
    }
}

#[cfg(unix)]
fn os_error(path: &Path, err: std::io::Error) -> Error {
    if err.raw_os_error() == Some(libc::ENOENT) {
        Error::NotFound(path.to_path_buf())
    } else {
        Error::Stat {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_root_is_mount_point() {
        assert!(StatvfsBackend::new().is_mount_point(Path::new("/")));
    }

    #[test]
    fn test_plain_directory_is_not_mount_point() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        assert!(!StatvfsBackend::new().is_mount_point(&nested));
    }

    #[test]
    fn test_missing_path_is_not_mount_point() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        assert!(!StatvfsBackend::new().is_mount_point(&missing));
    }

    #[test]
    fn test_symlink_to_root_is_not_mount_point() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("root-link");
        std::os::unix::fs::symlink("/", &link).unwrap();

        assert!(!StatvfsBackend::new().is_mount_point(&link));
    }

    #[test]
    fn test_regular_file_is_not_mount_point() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(!StatvfsBackend::new().is_mount_point(&file));
    }

    #[test]
    fn test_stats_for_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let stats = StatvfsBackend::new().stats(temp_dir.path()).unwrap();

        assert!(stats.block_size > 0);
        assert!(stats.available_mb() >= 0.0);
    }

    #[test]
    fn test_stats_for_missing_path_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = StatvfsBackend::new().stats(&missing).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, Error::NotFound(ref p) if *p == missing));
    }

    #[test]
    fn test_stats_below_regular_file_is_other_failure() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let err = StatvfsBackend::new().stats(&file.join("child")).unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(err, Error::Stat { .. }));
    }

    #[test]
    fn test_stats_rejects_nul_byte() {
        let err = StatvfsBackend::new()
            .stats(Path::new("/tmp/bad\0path"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }
}
