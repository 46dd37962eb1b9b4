use colored::{ColoredString, Colorize};
use std::ffi::OsStr;
use std::path::Path;

use crate::check::Classification;

/// Fallback when argv[0] is unavailable
const DEFAULT_PROGRAM: &str = "spacecheck";

/// Severity of a printed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl Level {
    /// Level a classification is printed at; OK is never printed
    pub fn of(classification: Classification) -> Option<Self> {
        match classification {
            Classification::Ok => None,
            Classification::Warning => Some(Level::Warning),
            Classification::Error => Some(Level::Error),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }
}

/// Whether escapes are forced on, given the value of `NO_COLOR`
pub fn should_force_color(no_color: Option<&OsStr>) -> bool {
    no_color.is_none_or(OsStr::is_empty)
}

/// Always emit ANSI escapes, even into a pipe or log capture, unless `NO_COLOR` is set
pub fn init_color() {
    if should_force_color(std::env::var_os("NO_COLOR").as_deref()) {
        colored::control::set_override(true);
    }
}

/// Basename of the invoked program
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

/// Uncolored text of a message line
pub fn line(program: &str, level: Level, msg: &str) -> String {
    format!("{} {}: {}", program, level.label(), msg)
}

/// Wrap a line in the color for its level
pub fn paint(level: Level, line: &str) -> ColoredString {
    match level {
        Level::Error => line.bright_red(),
        Level::Warning => line.bright_yellow(),
    }
}

/// Print a message line to stdout
pub fn message(program: &str, level: Level, msg: &str) {
    println!("{}", paint(level, &line(program, level, msg)));
}

// ============================================================================
// Tests
// ============================================================================
