//! User interface and interaction
//!
//! CLI parsing and the live progress indicator.

pub mod cli;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use progress::ProgressReporter;
