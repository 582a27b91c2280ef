use std::fmt;

/// Error types for cachewarmer operations that abort a run.
///
/// Per-URL failures are not represented here: they travel as plain strings
/// inside a [`RequestOutcome`](crate::core::types::RequestOutcome).
#[derive(Debug)]
pub enum CacheWarmerError {
    /// IO error (reading the input list, config files, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client could not be constructed
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// Header name or value that cannot be sent on the wire
    InvalidHeader(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for CacheWarmerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheWarmerError::Io(err) => write!(f, "IO error: {err}"),
            CacheWarmerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CacheWarmerError::Http(err) => write!(f, "HTTP error: {err}"),
            CacheWarmerError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            CacheWarmerError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CacheWarmerError::InvalidHeader(msg) => write!(f, "Invalid header: {msg}"),
            CacheWarmerError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CacheWarmerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheWarmerError::Io(err) => Some(err),
            CacheWarmerError::Http(err) => Some(err),
            CacheWarmerError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CacheWarmerError {
    fn from(err: std::io::Error) -> Self {
        CacheWarmerError::Io(err)
    }
}

impl From<reqwest::Error> for CacheWarmerError {
    fn from(err: reqwest::Error) -> Self {
        CacheWarmerError::Http(err)
    }
}

impl From<toml::de::Error> for CacheWarmerError {
    fn from(err: toml::de::Error) -> Self {
        CacheWarmerError::TomlParsing(err)
    }
}

/// Type alias for Results using CacheWarmerError
pub type Result<T> = std::result::Result<T, CacheWarmerError>;
