//! Configuration management
//!
//! This module handles loading configuration from TOML files, merging it
//! with CLI arguments, and freezing the result into the [`RequestConfig`]
//! snapshot shared by the workers.

pub mod request;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, timeouts};
use crate::core::error::{CacheWarmerError, Result};

pub use request::{
    HeaderSpec, RequestConfig, build_header_map, default_user_agent, parse_header_specs,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL prefix joined in front of every input line
    pub base: Option<String>,

    /// Number of concurrent workers
    pub threads: Option<usize>,

    /// Request headers as `Name: Value` strings
    pub headers: Option<Vec<String>>,

    /// Response header assertions as `Name: Value` strings
    pub check_headers: Option<Vec<String>>,

    /// Retries for timeouts, connection errors and HTTP 5xx
    pub retry_count: Option<u32>,

    /// Delay between retries in seconds
    pub retry_delay: Option<u64>,

    /// Stop the run after this many errors
    pub max_errors: Option<u64>,

    /// Connect/read timeout in seconds
    pub timeout: Option<u64>,

    /// Suppress the percentage indicator
    pub no_progress: Option<bool>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: None,
            threads: Some(defaults::THREADS),
            headers: None,
            check_headers: None,
            retry_count: Some(defaults::RETRY_COUNT),
            retry_delay: Some(timeouts::DEFAULT_RETRY_DELAY_SECONDS),
            max_errors: Some(defaults::MAX_ERRORS),
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            no_progress: Some(false),
            user_agent: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CacheWarmerError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            CacheWarmerError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Paths searched for a config file, nearest first.
    pub fn standard_locations() -> Vec<PathBuf> {
        (0..=defaults::CONFIG_SEARCH_DEPTH)
            .map(|depth| {
                PathBuf::from(format!(
                    "{}{}",
                    "../".repeat(depth),
                    defaults::CONFIG_FILE_NAME
                ))
            })
            .collect()
    }

    /// Load the nearest `.cachewarmer.toml`, falling back to defaults.
    ///
    /// A config file that exists but cannot be parsed is an error rather
    /// than being skipped silently.
    pub fn load_from_standard_locations() -> Result<Self> {
        for path in Self::standard_locations() {
            if path.is_file() {
                log::debug!("Loading config from {}", path.display());
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Input
        if let Some(ref base) = cli_config.base {
            self.base = Some(base.clone());
        }

        // Dispatch
        if let Some(threads) = cli_config.threads {
            self.threads = Some(threads);
        }
        if let Some(ref headers) = cli_config.headers {
            self.headers = Some(headers.clone());
        }
        if let Some(ref check_headers) = cli_config.check_headers {
            self.check_headers = Some(check_headers.clone());
        }
        if let Some(retry_count) = cli_config.retry_count {
            self.retry_count = Some(retry_count);
        }
        if let Some(retry_delay) = cli_config.retry_delay {
            self.retry_delay = Some(retry_delay);
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }

        // Aggregation & output
        if let Some(max_errors) = cli_config.max_errors {
            self.max_errors = Some(max_errors);
        }
        if cli_config.no_progress {
            self.no_progress = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Get retry delay as Duration
    pub fn retry_delay_duration(&self) -> Duration {
        Duration::from_secs(
            self.retry_delay
                .unwrap_or(timeouts::DEFAULT_RETRY_DELAY_SECONDS),
        )
    }

    pub fn threads(&self) -> usize {
        self.threads.unwrap_or(defaults::THREADS)
    }

    pub fn max_errors(&self) -> u64 {
        self.max_errors.unwrap_or(defaults::MAX_ERRORS)
    }

    pub fn show_progress(&self) -> bool {
        !self.no_progress.unwrap_or(false)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(CacheWarmerError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(CacheWarmerError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(CacheWarmerError::Config(
                    "Thread count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if threads > defaults::MAX_THREADS {
                return Err(CacheWarmerError::Config(format!(
                    "Thread count of {threads} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        if let Some(retry) = self.retry_count
            && retry > defaults::MAX_RETRY_COUNT
        {
            return Err(CacheWarmerError::Config(format!(
                "Retry count of {retry} is very high and may cause long delays. Consider using a smaller value."
            )));
        }

        if let Some(ref base) = self.base
            && base.trim().is_empty()
        {
            return Err(CacheWarmerError::Config(
                "Base URL cannot be empty.".to_string(),
            ));
        }

        // Header specs must parse; wire validity is checked when building the map
        parse_header_specs(self.headers.as_deref().unwrap_or_default())?;
        parse_header_specs(self.check_headers.as_deref().unwrap_or_default())?;

        Ok(())
    }

    /// Freeze this config into the snapshot shared by all workers.
    pub fn request_config(&self) -> Result<RequestConfig> {
        self.validate()?;

        let header_specs = parse_header_specs(self.headers.as_deref().unwrap_or_default())?;
        let header_checks =
            parse_header_specs(self.check_headers.as_deref().unwrap_or_default())?;

        Ok(RequestConfig {
            base: self.base.clone(),
            headers: build_header_map(&header_specs)?,
            header_checks,
            retry_count: self.retry_count.unwrap_or(defaults::RETRY_COUNT),
            retry_delay: self.retry_delay_duration(),
            timeout: self.timeout_duration(),
            threads: self.threads(),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| default_user_agent().to_string()),
        })
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Input
    pub input: PathBuf,       // --input
    pub base: Option<String>, // --base

    // Dispatch
    pub threads: Option<usize>,             // --threads
    pub headers: Option<Vec<String>>,       // --headers
    pub check_headers: Option<Vec<String>>, // --check-headers
    pub retry_count: Option<u32>,           // --retry-count
    pub retry_delay: Option<u64>,           // --retry-delay
    pub timeout: Option<u64>,               // --timeout
    pub user_agent: Option<String>,         // --user-agent

    // Aggregation & output
    pub max_errors: Option<u64>, // --max-errors
    pub no_progress: bool,       // --no-progress
    pub quiet: bool,             // --quiet
    pub verbose: bool,           // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
