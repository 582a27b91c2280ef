//! Structured logging
//!
//! Thin wrappers around the `log` facade so every part of the run reports
//! through the same messages.

pub mod logging;
