use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while probing a filesystem.
#[derive(Debug, Error)]
pub enum Error {
    /// Path does not exist or cannot be resolved
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Path cannot be handed to the OS (e.g. contains a NUL byte)
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// statvfs returned an error other than not-found
    #[error("statvfs failed for {}: {source}", path.display())]
    Stat {
        /// Path that was queried
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Filesystem statistics are not available on this platform
    #[error("filesystem statistics are not supported on this platform")]
    Unsupported,
}

impl Error {
    /// Returns true if the queried path does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type for filesystem probing
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let missing = Error::NotFound(PathBuf::from("/boot"));
        assert!(missing.is_not_found());

        let denied = Error::Stat {
            path: PathBuf::from("/var"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!denied.is_not_found());
        assert!(!Error::Unsupported.is_not_found());
    }

    #[test]
    fn test_stat_error_mentions_path() {
        let err = Error::Stat {
            path: PathBuf::from("/home"),
            source: std::io::Error::from_raw_os_error(libc::EACCES),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("statvfs failed for /home: "));
    }
}
