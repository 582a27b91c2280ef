//! URL list loading
//!
//! This module reads the newline-delimited input list and applies the
//! optional base URL prefix.

pub mod loader;

// Re-export commonly used items
pub use loader::{Loader, join_base, load_urls, load_urls_from_path};
