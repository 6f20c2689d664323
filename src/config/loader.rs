//! Configuration file loading with precedence handling.

use crate::catalog::DEFAULT_ENDPOINT;
use crate::model::ViewMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Env var naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "BOOKSCROLL_CONFIG";

/// Env var overriding the catalog endpoint.
pub const ENDPOINT_ENV_VAR: &str = "BOOKSCROLL_ENDPOINT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bookscroll/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Records requested per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// First page number requested.
    #[serde(default)]
    pub initial_page: Option<u32>,

    /// Quiet period for search and scroll triggers, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Rows from the bottom at which the next page is requested.
    #[serde(default)]
    pub scroll_threshold: Option<u16>,

    /// Skeleton cards shown while the first page loads.
    #[serde(default)]
    pub skeleton_count: Option<usize>,

    /// Layout on startup (`grid` or `list`).
    #[serde(default)]
    pub default_view: Option<ViewMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Catalog endpoint URL.
    pub endpoint: String,
    /// Records requested per page.
    pub page_size: u32,
    /// First page number requested.
    pub initial_page: u32,
    /// Debounce quiet period in milliseconds.
    pub debounce_ms: u64,
    /// Scroll trigger distance in rows.
    pub scroll_threshold: u16,
    /// Skeleton card count.
    pub skeleton_count: usize,
    /// Startup layout.
    pub default_view: ViewMode,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: 9,
            initial_page: 1,
            debounce_ms: 300,
            scroll_threshold: 6,
            skeleton_count: 6,
            default_view: ViewMode::Grid,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bookscroll/bookscroll.log` on Linux, or the
/// platform equivalent. Falls back to the current directory if no state
/// directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bookscroll").join("bookscroll.log")
    } else {
        PathBuf::from("bookscroll.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/bookscroll/config.toml` on Linux, appropriate path on
/// other platforms. Returns `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookscroll").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BOOKSCROLL_CONFIG` environment variable
/// 3. Default path `~/.config/bookscroll/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error if a config file exists but cannot be read or parsed, or if
/// `BOOKSCROLL_CONFIG` is set to an empty or non-UTF-8 value.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) if env_path.trim().is_empty() => {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BOOKSCROLL_ENDPOINT`: Override the catalog endpoint
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
        if !endpoint.trim().is_empty() {
            config.endpoint = endpoint;
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        page_size: config.page_size.unwrap_or(defaults.page_size).max(1),
        initial_page: config.initial_page.unwrap_or(defaults.initial_page).max(1),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        scroll_threshold: config.scroll_threshold.unwrap_or(defaults.scroll_threshold),
        skeleton_count: config.skeleton_count.unwrap_or(defaults.skeleton_count),
        default_view: config.default_view.unwrap_or(defaults.default_view),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// CLI flags that override configuration. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Catalog endpoint (`--endpoint`).
    pub endpoint: Option<String>,
    /// Records per page (`--page-size`).
    pub page_size: Option<u32>,
    /// Initial layout (`--view`).
    pub view: Option<ViewMode>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(endpoint) = overrides.endpoint {
        config.endpoint = endpoint;
    }

    if let Some(page_size) = overrides.page_size {
        config.page_size = page_size.max(1);
    }

    if let Some(view) = overrides.view {
        config.default_view = view;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
