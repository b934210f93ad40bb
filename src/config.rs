// ⚙️ Configuration - where to load monarchs from and how to print them
// Environment variables for the source, first CLI argument for the output mode

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Gist serving the kings list
pub const DEFAULT_MONARCHS_URL: &str = "https://gist.githubusercontent.com/christianpanton/10d65ccef9f29de3acd49d97ed423736/raw/b09563bc0c4b318132c7a738e679d4f984ef0048/kings";

pub const URL_VAR: &str = "MONARCHS_URL";
pub const FILE_VAR: &str = "MONARCHS_FILE";
pub const TIMEOUT_VAR: &str = "MONARCHS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,

    /// Request timeout (None = transport default)
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: Source::Url(DEFAULT_MONARCHS_URL.to_string()),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (env in production, a map in tests)
    ///
    /// `MONARCHS_FILE` wins over `MONARCHS_URL`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let source = if let Some(path) = get(FILE_VAR) {
            Source::File(PathBuf::from(path))
        } else if let Some(url) = get(URL_VAR) {
            Source::Url(url)
        } else {
            Source::Url(DEFAULT_MONARCHS_URL.to_string())
        };

        let timeout = get(TIMEOUT_VAR)
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Config { source, timeout }
    }
}

// ============================================================================
// OUTPUT MODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Question/answer text (default)
    Report,
    /// MonarchReport as pretty JSON
    Json,
    /// Data quality summary
    Quality,
    Help,
}

impl Mode {
    /// Parse the first positional argument
    ///
    /// # Returns
    /// * `Ok(Mode)` - known command, or Report when absent
    /// * `Err(String)` - the unknown command, for the usage message
    pub fn from_arg(arg: Option<&str>) -> Result<Mode, String> {
        match arg {
            None | Some("report") => Ok(Mode::Report),
            Some("json") => Ok(Mode::Json),
            Some("quality") => Ok(Mode::Quality),
            Some("help") | Some("--help") | Some("-h") => Ok(Mode::Help),
            Some(other) => Err(other.to_string()),
        }
    }
}

pub fn usage() -> String {
    format!(
        "Usage: monarch-stats [report|json|quality|help]\n\n\
         Environment:\n  \
         {}           source URL (default: kings gist)\n  \
         {}          read a local JSON file instead\n  \
         {}  request timeout in seconds\n  \
         RUST_LOG               log filter (default: warn)",
        URL_VAR, FILE_VAR, TIMEOUT_VAR
    )
}
