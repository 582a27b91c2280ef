//! # cachewarmer
//!
//! Warm HTTP caches by issuing GET requests for a list of URLs with a
//! bounded number of concurrent workers.
//!
//! A run has three stages:
//!
//! - [`input`] reads one URL per line, skipping blanks and joining an
//!   optional base URL.
//! - [`dispatch`] checks every URL with retries for transient failures,
//!   classifying each as success or failure.
//! - [`aggregate`] consumes the outcomes, drives the progress indicator and
//!   stops the run once too many URLs have failed.
//!
//! Failing URLs are printed as `<url> <error>`. The process exits with `0`
//! when every URL succeeded, `1` on any failure and `130` when interrupted.

pub mod aggregate;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod input;
pub mod reporting;
pub mod ui;

// Re-export commonly used types
pub use crate::aggregate::{Aggregator, RunSummary};
pub use crate::config::{Config, RequestConfig};
pub use crate::core::{CacheWarmerError, ExitStatus, RequestOutcome, Result};
pub use crate::dispatch::{CheckUrl, HttpChecker, WorkerPool};
pub use crate::input::Loader;
