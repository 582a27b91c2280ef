use log::{debug, error, info, warn};
use reqwest::header::HeaderMap;

use crate::aggregate::RunSummary;
use crate::config::RequestConfig;
use crate::core::types::RequestOutcome;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // A logger installed earlier in this process is kept
    let installed = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init()
        .is_ok();

    if installed {
        debug!("Logger initialized with level: {level:?}");
    }
}

/// Log the request settings every worker shares
pub fn log_config_info(config: &RequestConfig, max_errors: u64) {
    info!(
        "Configuration: threads={}, timeout={}s, max_errors={max_errors}",
        config.threads,
        config.timeout.as_secs()
    );
    info!(
        "Retry: count={}, delay={}s",
        config.retry_count,
        config.retry_delay.as_secs()
    );
    if let Some(ref base) = config.base {
        info!("Base URL: {base}");
    }
    for (name, value) in config.headers.iter() {
        debug!("Request header {name}: {value:?}");
    }
    for check in &config.header_checks {
        debug!("Response header check {}: {}", check.name, check.value);
    }
}

/// Log run start
pub fn log_run_start(url_count: usize) {
    info!("Starting requests for {url_count} URLs");
}

/// Log a retry about to happen for a URL
pub fn log_retry(url: &str, error: &str, retries_left: u32) {
    debug!("↻ {url} -> {error} (retrying, {retries_left} retries left after this)");
}

/// Log individual URL outcomes for debugging
pub fn log_outcome(outcome: &RequestOutcome) {
    match outcome.error() {
        None => debug!("✓ {}", outcome.url()),
        Some(error) => debug!("✗ {} -> {error}", outcome.url()),
    }
}

/// Dump the headers of a response that failed a header assertion
pub fn log_response_headers(url: &str, headers: &HeaderMap) {
    debug!("Response headers for {url}: {headers:?}");
}

/// Log run completion
pub fn log_run_complete(summary: &RunSummary, duration_ms: u128) {
    if summary.interrupted {
        warn!(
            "Interrupted after {}/{} URLs, {} errors ({duration_ms}ms)",
            summary.completed, summary.total, summary.errors
        );
    } else if summary.aborted {
        warn!(
            "Aborted after {}/{} URLs: {} errors exceeded the budget of {} ({duration_ms}ms)",
            summary.completed, summary.total, summary.errors, summary.max_errors
        );
    } else if summary.errors == 0 {
        info!(
            "✅ Run complete: {}/{} URLs warmed ({duration_ms}ms)",
            summary.completed, summary.total
        );
    } else {
        warn!(
            "❌ Run complete: {}/{} URLs, {} errors ({duration_ms}ms)",
            summary.completed, summary.total, summary.errors
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
