//! Partition classification and run aggregation.
//!
//! [`classify`] and [`RunResult`] are pure. [`check_partition`] and [`run`]
//! talk to the filesystem through a [`Probe`] and hand every finding to a
//! caller-supplied sink, so nothing here prints or exits.

use mountspace::Probe;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{Config, Thresholds};

/// Outcome of comparing free space to the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Ok,
    Warning,
    Error,
}

/// Classify a free-space sample. Both comparisons are strict.
pub fn classify(free_mb: f64, thresholds: &Thresholds) -> Classification {
    if free_mb < thresholds.error_mb as f64 {
        Classification::Error
    } else if free_mb < thresholds.warning_mb as f64 {
        Classification::Warning
    } else {
        Classification::Ok
    }
}

/// What was observed on a partition that needs reporting
#[derive(Debug, Clone, PartialEq)]
pub enum FindingKind {
    Critical { free_mb: f64 },
    Low { free_mb: f64 },
    NotFound,
    QueryFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub path: PathBuf,
    pub kind: FindingKind,
}

impl Finding {
    pub fn classification(&self) -> Classification {
        match self.kind {
            FindingKind::Low { .. } => Classification::Warning,
            FindingKind::Critical { .. } | FindingKind::NotFound | FindingKind::QueryFailed(_) => {
                Classification::Error
            }
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.kind {
            FindingKind::Critical { free_mb } => {
                write!(f, "Critical disk space on {path}: {free_mb:.2} MB left")
            }
            FindingKind::Low { free_mb } => {
                write!(f, "Low disk space on {path}: {free_mb:.2} MB left")
            }
            FindingKind::NotFound => write!(f, "Partition {path} not found"),
            FindingKind::QueryFailed(reason) => f.write_str(reason),
        }
    }
}

/// Check one mounted partition. Returns `None` when it is OK.
///
/// Query failures never propagate; they become error findings.
pub fn check_partition(probe: &Probe, path: &Path, thresholds: &Thresholds) -> Option<Finding> {
    let kind = match probe.stats(path) {
        Ok(stats) => {
            let free_mb = stats.available_mb();
            match classify(free_mb, thresholds) {
                Classification::Error => FindingKind::Critical { free_mb },
                Classification::Warning => FindingKind::Low { free_mb },
                Classification::Ok => {
                    log::debug!("{}: {:.2} MB free, ok", path.display(), free_mb);
                    return None;
                }
            }
        }
        Err(e) if e.is_not_found() => FindingKind::NotFound,
        Err(e) => FindingKind::QueryFailed(e.to_string()),
    };

    Some(Finding {
        path: path.to_path_buf(),
        kind,
    })
}

/// Aggregate of a full run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub checked: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl RunResult {
    pub fn record(&mut self, classification: Classification) {
        self.checked += 1;
        match classification {
            Classification::Ok => {}
            Classification::Warning => self.warnings += 1,
            Classification::Error => self.errors += 1,
        }
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// 1 if any partition classified as error, else 0
    pub fn exit_code(&self) -> u8 {
        u8::from(self.has_errors())
    }
}

/// Check every configured partition in order.
///
/// Partitions that are not mount points are skipped silently.
pub fn run(config: &Config, probe: &Probe, mut on_finding: impl FnMut(&Finding)) -> RunResult {
    let mut result = RunResult::default();

    for path in &config.partitions {
        if !probe.is_mount_point(path) {
            log::debug!("{}: not a mount point, skipping", path.display());
            result.skip();
            continue;
        }

        match check_partition(probe, path, &config.thresholds) {
            Some(finding) => {
                on_finding(&finding);
                result.record(finding.classification());
            }
            None => result.record(Classification::Ok),
        }
    }

    log::info!(
        "checked {} partitions ({} skipped): {} warnings, {} errors",
        result.checked,
        result.skipped,
        result.warnings,
        result.errors
    );

    result
}

// ============================================================================
// Tests
// ============================================================================
