//! In-memory backend for tests.
//!
//! Paths that were never registered are reported as not mounted and their
//! statistics query fails with `NotFound`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::types::FsStats;

use super::Backend;

#[derive(Debug, Clone)]
enum StatOutcome {
    Stats(FsStats),
    Missing,
    Fails(io::ErrorKind),
}

#[derive(Debug, Clone)]
struct Entry {
    mounted: bool,
    outcome: StatOutcome,
}

/// Backend answering from a fixed table of paths.
#[derive(Debug, Default)]
pub struct FakeBackend {
    entries: HashMap<PathBuf, Entry>,
    stat_calls: AtomicUsize,
}

impl FakeBackend {
    /// Create an empty backend where nothing is mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mounted filesystem with the given free space in megabytes.
    pub fn mounted_mb(self, path: impl Into<PathBuf>, free_mb: u64) -> Self {
        self.mounted(path, FsStats::from_mb(free_mb))
    }

    /// Register a mounted filesystem with explicit statistics.
    pub fn mounted(self, path: impl Into<PathBuf>, stats: FsStats) -> Self {
        self.insert(path, true, StatOutcome::Stats(stats))
    }

    /// Register a path that is mounted but whose statistics query reports not-found.
    pub fn mounted_missing(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path, true, StatOutcome::Missing)
    }

    /// Register a path that is mounted but whose statistics query fails.
    pub fn mounted_failing(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.insert(path, true, StatOutcome::Fails(kind))
    }

    /// Register a path that exists with statistics but is not a mount point.
    pub fn unmounted(self, path: impl Into<PathBuf>, stats: FsStats) -> Self {
        self.insert(path, false, StatOutcome::Stats(stats))
    }

    /// Number of statistics queries made so far.
    pub fn stat_calls(&self) -> usize {
        self.stat_calls.load(Ordering::SeqCst)
    }

    fn insert(mut self, path: impl Into<PathBuf>, mounted: bool, outcome: StatOutcome) -> Self {
        self.entries.insert(path.into(), Entry { mounted, outcome });
        self
    }
}

impl Backend for FakeBackend {
    fn is_mount_point(&self, path: &Path) -> bool {
        self.entries.get(path).is_some_and(|e| e.mounted)
    }

    fn stats(&self, path: &Path) -> Result<FsStats> {
        self.stat_calls.fetch_add(1, Ordering::SeqCst);

        match self.entries.get(path).map(|e| &e.outcome) {
            Some(StatOutcome::Stats(stats)) => Ok(*stats),
            Some(StatOutcome::Fails(kind)) => Err(Error::Stat {
                path: path.to_path_buf(),
                source: io::Error::from(*kind),
            }),
            Some(StatOutcome::Missing) | None => Err(Error::NotFound(path.to_path_buf())),
        }
    }
}
