//! Run configuration built from command-line arguments.
//!
//! There is no config file: thresholds always come from `-w`/`-e`, and the
//! partition list defaults to [`DEFAULT_PARTITIONS`] unless `-p` is given.

use std::path::PathBuf;
use thiserror::Error;

use crate::cli::Cli;

/// Partitions checked when none are given on the command line, in order.
pub const DEFAULT_PARTITIONS: [&str; 6] = ["/boot", "/", "/home", "/tmp", "/usr", "/var"];

/// Free-space cutoffs in megabytes.
///
/// Expected to satisfy `error_mb <= warning_mb`; this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning_mb: u64,
    pub error_mb: u64,
}

impl Thresholds {
    pub fn new(warning_mb: u64, error_mb: u64) -> Self {
        Self {
            warning_mb,
            error_mb,
        }
    }

    /// True when the error cutoff sits above the warning cutoff
    pub fn is_inverted(&self) -> bool {
        self.error_mb > self.warning_mb
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Specify warning threshold with -w or --warning and error threshold with -e or --error-at-mb"
    )]
    MissingThresholds,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub thresholds: Thresholds,
    pub partitions: Vec<PathBuf>,
}

impl Config {
    pub fn new(thresholds: Thresholds, partitions: Vec<PathBuf>) -> Self {
        Self {
            thresholds,
            partitions,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let (Some(warning_mb), Some(error_mb)) = (cli.warning, cli.error_at_mb) else {
            return Err(ConfigError::MissingThresholds);
        };

        let thresholds = Thresholds::new(warning_mb, error_mb);
        if thresholds.is_inverted() {
            log::warn!(
                "error threshold ({} MB) is above warning threshold ({} MB); warnings will never be reported",
                error_mb,
                warning_mb
            );
        }

        let partitions = if cli.partitions.is_empty() {
            default_partitions()
        } else {
            cli.partitions.clone()
        };

        log::debug!(
            "thresholds: warning < {} MB, error < {} MB; partitions: {:?}",
            warning_mb,
            error_mb,
            partitions
        );

        Ok(Self::new(thresholds, partitions))
    }
}

pub fn default_partitions() -> Vec<PathBuf> {
    DEFAULT_PARTITIONS.iter().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("spacecheck").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_from_cli_uses_default_partitions() {
        let config = Config::from_cli(&parse(&["-w", "500", "-e", "100"])).unwrap();
        assert_eq!(config.thresholds, Thresholds::new(500, 100));
        assert_eq!(
            config.partitions,
            ["/boot", "/", "/home", "/tmp", "/usr", "/var"]
                .iter()
                .map(PathBuf::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_from_cli_partition_override() {
        let config =
            Config::from_cli(&parse(&["-w", "500", "-e", "100", "-p", "/srv", "-p", "/"])).unwrap();
        assert_eq!(
            config.partitions,
            vec![PathBuf::from("/srv"), PathBuf::from("/")]
        );
    }

    #[test]
    fn test_missing_warning() {
        let err = Config::from_cli(&parse(&["-e", "100"])).unwrap_err();
        assert_eq!(err, ConfigError::MissingThresholds);
    }

    #[test]
    fn test_missing_error() {
        let err = Config::from_cli(&parse(&["-w", "500"])).unwrap_err();
        assert_eq!(err, ConfigError::MissingThresholds);
    }

    #[test]
    fn test_missing_both() {
        assert!(Config::from_cli(&parse(&[])).is_err());
    }

    #[test]
    fn test_missing_thresholds_message() {
        assert_eq!(
            ConfigError::MissingThresholds.to_string(),
            "Specify warning threshold with -w or --warning and error threshold with -e or --error-at-mb"
        );
    }

    #[test]
    fn test_inverted_thresholds_are_accepted() {
        let config = Config::from_cli(&parse(&["-w", "100", "-e", "500"])).unwrap();
        assert!(config.thresholds.is_inverted());
        assert!(!Thresholds::new(500, 100).is_inverted());
        assert!(!Thresholds::new(100, 100).is_inverted());
    }
}
