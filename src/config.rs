//! Run configuration for the harness
//!
//! Mirrors the pytest flags the CLI exposes (`-v`, `-x`, `-k`, `--slow`, `--collect-only`).

use std::fmt;
use std::str::FromStr;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// pytest-style human readable output
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected 'console' or 'json')", other)),
        }
    }
}

/// Harness run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Print per-test durations
    pub verbose: bool,
    /// Stop after the first failure
    pub stop_on_fail: bool,
    /// Include tests marked slow
    pub include_slow: bool,
    /// Keyword filter; a test is selected when its name contains it
    pub filter: Option<String>,
    /// List collected tests without running them
    pub collect_only: bool,
    /// Emit ANSI colour codes
    pub color: bool,
    /// Report output format
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            stop_on_fail: false,
            include_slow: false,
            filter: None,
            collect_only: false,
            color: true,
            format: OutputFormat::Console,
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }

    pub fn with_include_slow(mut self, include_slow: bool) -> Self {
        self.include_slow = include_slow;
        self
    }

    /// Set the keyword filter. Empty keywords are treated as no filter.
    pub fn with_filter(mut self, filter: Option<impl Into<String>>) -> Self {
        self.filter = filter.map(Into::<String>::into).filter(|f| !f.is_empty());
        self
    }

    pub fn with_collect_only(mut self, collect_only: bool) -> Self {
        self.collect_only = collect_only;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Whether a test name passes the keyword filter
    pub fn matches(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|keyword| name.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert!(!config.verbose);
        assert!(!config.stop_on_fail);
        assert!(!config.include_slow);
        assert!(config.filter.is_none());
        assert!(!config.collect_only);
        assert!(config.color);
        assert_eq!(config.format, OutputFormat::Console);
    }

    #[test]
    fn test_builder_chain() {
        let config = RunConfig::new()
            .with_verbose(true)
            .with_stop_on_fail(true)
            .with_filter(Some("run"))
            .with_format(OutputFormat::Json);
        assert!(config.verbose);
        assert!(config.stop_on_fail);
        assert_eq!(config.filter.as_deref(), Some("run"));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_filter_is_none() {
        let config = RunConfig::new().with_filter(Some(""));
        assert!(config.filter.is_none());
        assert!(config.matches("anything"));
    }

    #[test]
    fn test_filter_is_substring_match() {
        let config = RunConfig::new().with_filter(Some("run"));
        assert!(config.matches("test_run_method"));
        assert!(!config.matches("test_initialization"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Console".parse::<OutputFormat>(), Ok(OutputFormat::Console));
        assert!("tap".parse::<OutputFormat>().is_err());
    }
}
