use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spacecheck")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Check available disk space on specified partitions", long_about = None)]
pub struct Cli {
    /// Minimum amount of free space in megabytes before warning
    #[arg(short, long, value_name = "MB")]
    pub warning: Option<u64>,

    /// Amount of free space in megabytes to generate an error message
    #[arg(short, long = "error-at-mb", value_name = "MB")]
    pub error_at_mb: Option<u64>,

    /// Partition to check instead of the default list (repeatable)
    #[arg(short, long = "partition", value_name = "PATH")]
    pub partitions: Vec<PathBuf>,

    /// Verbosity level (diagnostics go to stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
