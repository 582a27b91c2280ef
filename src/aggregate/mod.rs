//! Result aggregation
//!
//! The single consumer of request outcomes: counts them, drives the
//! progress indicator and decides when the run stops early.

pub mod aggregator;

pub use aggregator::{Aggregator, Flow, RunState, RunSummary};
