//! Core configuration types.
//! - PoolConfig is the explicit object handed to `Files::from_config`.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Per-operation detail
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into a LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings used to build a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolConfig {
    /// Directory the scratch directory is created in (None = system temp dir)
    pub parent_dir: Option<PathBuf>,
    /// Scratch directory name prefix (None = drawn from the random source)
    pub prefix: Option<String>,
    /// Fixed seed for name generation (None = seeded from the clock)
    pub seed: Option<u64>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl PoolConfig {
    /// Config rooted under `parent_dir` with the given prefix; other fields default.
    pub fn new(parent_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            parent_dir: Some(parent_dir.into()),
            prefix: Some(prefix.into()),
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parse_aliases() {
        assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }

    #[test]
    fn builder_sets_fields() {
        let c = PoolConfig::new("/var/tmp", "scratch").with_seed(9);
        assert_eq!(c.parent_dir.as_deref(), Some(std::path::Path::new("/var/tmp")));
        assert_eq!(c.prefix.as_deref(), Some("scratch"));
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.log_level, LogLevel::Normal);
    }
}
