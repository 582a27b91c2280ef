// Command-line interface definitions and parsing for cachewarmer

use crate::config::CliConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Input
    /// File with one URL (or URL fragment) per line
    #[arg(long, value_name = "PATH", help_heading = "Input")]
    pub input: PathBuf,

    /// Base URL joined in front of every input line
    #[arg(long, value_name = "URL", help_heading = "Input")]
    pub base: Option<String>,

    // Requests
    /// Concurrent workers (default: 1)
    #[arg(long, value_name = "COUNT", help_heading = "Requests")]
    pub threads: Option<usize>,

    /// Request headers, e.g. "Accept-Encoding: gzip"
    #[arg(long, value_name = "HEADER", num_args = 1.., action = clap::ArgAction::Append, help_heading = "Requests")]
    pub headers: Option<Vec<String>>,

    /// Response headers every URL must carry, e.g. "X-Cache: HIT"
    #[arg(long, value_name = "HEADER", num_args = 0.., action = clap::ArgAction::Append, help_heading = "Requests")]
    pub check_headers: Option<Vec<String>>,

    /// Connect/read timeout in seconds (default: 60)
    #[arg(short = 't', long, value_name = "SECONDS", help_heading = "Requests")]
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Requests")]
    pub user_agent: Option<String>,

    // Retry & Error Budget
    /// Retries for timeouts, connection errors and HTTP 5xx (default: 0)
    #[arg(long, value_name = "COUNT", help_heading = "Retry & Error Budget")]
    pub retry_count: Option<u32>,

    /// Delay between retries in seconds (default: 1)
    #[arg(long, value_name = "SECONDS", help_heading = "Retry & Error Budget")]
    pub retry_delay: Option<u64>,

    /// Stop once more than this many URLs have failed (default: 1)
    #[arg(long, value_name = "COUNT", help_heading = "Retry & Error Budget")]
    pub max_errors: Option<u64>,

    // Output & Verbosity
    /// Hide the percentage indicator
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    /// Suppress progress and logging
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed arguments into the CLI layer of the configuration
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        input: cli.input.clone(),
        base: cli.base.clone(),
        threads: cli.threads,
        headers: cli.headers.clone(),
        check_headers: cli.check_headers.clone(),
        retry_count: cli.retry_count,
        retry_delay: cli.retry_delay,
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        max_errors: cli.max_errors,
        // Quiet implies no indicator
        no_progress: cli.no_progress || cli.quiet,
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
