//! Request dispatch
//!
//! Issues the HTTP requests: one checker per URL with retries, run by a
//! bounded pool of workers.

pub mod checker;
pub mod pool;

pub use checker::{CheckUrl, HttpChecker};
pub use pool::{OutcomeStream, WorkerPool};
