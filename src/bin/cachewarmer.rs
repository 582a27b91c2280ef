use cachewarmer::aggregate::Aggregator;
use cachewarmer::config::{CliConfig, Config};
use cachewarmer::core::{ExitStatus, Result};
use cachewarmer::dispatch::{HttpChecker, WorkerPool};
use cachewarmer::input::load_urls_from_path;
use cachewarmer::reporting::logging;
use cachewarmer::ui::{Cli, ProgressReporter, cli_to_config};
use clap::Parser;

use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_cachewarmer(&cli).await {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main warming logic extracted from main() for testing
pub async fn run_cachewarmer(cli: &Cli) -> Result<ExitStatus> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    // Freeze the request settings before anything is sent
    let request_config = Arc::new(config.request_config()?);
    logging::log_config_info(&request_config, config.max_errors());

    let urls = load_urls_from_path(&cli_config.input, request_config.base.as_deref())
        .inspect_err(|e| {
            logging::log_error(
                &format!("Could not read input '{}'", cli_config.input.display()),
                Some(e),
            );
        })?;
    let total = urls.len();
    logging::log_run_start(total);

    let checker = Arc::new(HttpChecker::new(Arc::clone(&request_config))?);
    let pool = WorkerPool::new(checker, request_config.threads);
    let aggregator = Aggregator::new(
        config.max_errors(),
        ProgressReporter::new(config.show_progress()),
    );

    let started = Instant::now();
    let mut outcomes = pool.spawn(urls);
    let summary = aggregator
        .consume(&mut outcomes, total, wait_for_interrupt())
        .await;
    // Requests still in flight after an abort or interrupt are abandoned
    outcomes.abort();
    logging::log_run_complete(&summary, started.elapsed().as_millis());

    Ok(summary.exit_status())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Resolves on the first Ctrl-C.
///
/// If the signal handler cannot be installed the run continues without one.
pub async fn wait_for_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        logging::log_error("Could not listen for Ctrl-C", Some(&e));
        std::future::pending::<()>().await;
    }
}
