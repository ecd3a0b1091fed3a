//! CLI runtime configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::reporter::ReporterConfig;

/// Configuration shared by every subcommand.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Catalog directory; the built-in catalog is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Directory for the log file; file logging is off when unset.
    pub log_dir: Option<PathBuf>,
    pub reporter: ReporterConfig,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MUSEUM_DATA_DIR` - Catalog directory (default: built-in catalog)
    /// - `MUSEUM_LOG_DIR` - Log file directory (default: no file logging)
    /// - `MUSEUM_REPORT_LIMIT` - Error reports per window (default: 5)
    /// - `MUSEUM_REPORT_WINDOW_SECS` - Error report window in seconds (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup("MUSEUM_DATA_DIR")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        config.log_dir = lookup("MUSEUM_LOG_DIR")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        if let Some(limit) = read_var::<usize>(&lookup, "MUSEUM_REPORT_LIMIT") {
            config.reporter.max_reports = limit.max(1);
        }
        if let Some(secs) = read_var::<u64>(&lookup, "MUSEUM_REPORT_WINDOW_SECS") {
            config.reporter.window = Duration::from_secs(secs);
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
