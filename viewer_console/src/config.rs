//! Console configuration
//!
//! A versioned JSON file. Every field is optional; missing fields take their
//! defaults and command-line flags override what the file says.

use crate::error::{ConsoleError, ConsoleResult};
use keyseq_core::InterpreterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Page count used when neither the file nor the flags give one
pub const DEFAULT_PAGE_COUNT: usize = 100;

/// Log filter used when neither `--log` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Console configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Version of the config format
    pub version: u32,
    pub interpreter: InterpreterConfig,
    /// Where the document store is kept; None keeps it in memory
    pub store_path: Option<PathBuf>,
    /// Page count of every opened document
    pub page_count: usize,
    pub log_filter: String,
}

impl ConsoleConfig {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        store_path: Option<PathBuf>,
        page_count: Option<usize>,
        log_filter: Option<String>,
    ) -> Self {
        if let Some(path) = store_path {
            self.store_path = Some(path);
        }
        if let Some(pages) = page_count {
            self.page_count = pages;
        }
        if let Some(filter) = log_filter {
            self.log_filter = filter;
        }
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            interpreter: InterpreterConfig::default(),
            store_path: None,
            page_count: DEFAULT_PAGE_COUNT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Parses a config from JSON text
pub fn parse_config(text: &str) -> ConsoleResult<ConsoleConfig> {
    let config: ConsoleConfig =
        serde_json::from_str(text).map_err(|e| ConsoleError::Config(e.to_string()))?;

    if config.version != ConsoleConfig::CURRENT_VERSION {
        return Err(ConsoleError::UnsupportedConfigVersion(config.version));
    }

    Ok(config)
}

/// Reads a config file
pub fn load_config(path: &Path) -> ConsoleResult<ConsoleConfig> {
    parse_config(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyseq_core::EscapePolicy;

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"{ "version": 1, "page_count": 12, "interpreter": { "escape_policy": "silent" } }"#,
        )
        .unwrap();

        assert_eq!(config.page_count, 12);
        assert_eq!(config.interpreter.escape_policy, EscapePolicy::Silent);
        assert_eq!(config.store_path, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_unsupported_version() {
        assert!(matches!(
            parse_config(r#"{ "version": 7 }"#),
            Err(ConsoleError::UnsupportedConfigVersion(7))
        ));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            parse_config("{ page_count: 3"),
            Err(ConsoleError::Config(_))
        ));
    }

    #[test]
    fn test_overrides_win() {
        let config = ConsoleConfig::default().with_overrides(
            Some(PathBuf::from("docs.json")),
            Some(7),
            None,
        );

        assert_eq!(config.store_path, Some(PathBuf::from("docs.json")));
        assert_eq!(config.page_count, 7);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_config(&dir.path().join("absent.json")),
            Err(ConsoleError::Io(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.json");
        fs::write(&path, r#"{ "version": 1, "log_filter": "debug" }"#).unwrap();

        assert_eq!(load_config(&path).unwrap().log_filter, "debug");
    }
}
