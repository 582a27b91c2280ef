//! The immutable request settings shared by every worker.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

use crate::core::constants::{defaults, timeouts};
use crate::core::error::{CacheWarmerError, Result};

/// One `Name: Value` pair given on the command line or in a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    /// Header name as the user spelled it, trimmed
    pub name: String,
    /// Header value, trimmed
    pub value: String,
}

impl HeaderSpec {
    /// Parse a `Name: Value` string.
    ///
    /// The string is split at the first colon and both halves are trimmed.
    /// A missing colon yields an empty value; an empty name is rejected.
    ///
    /// # Examples
    /// ```
    /// use cachewarmer::config::HeaderSpec;
    ///
    /// let spec = HeaderSpec::parse("X-Cache: HIT").unwrap();
    /// assert_eq!(spec.name, "X-Cache");
    /// assert_eq!(spec.value, "HIT");
    /// assert_eq!(spec.key(), "x-cache");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let (name, value) = raw.split_once(':').unwrap_or((raw, ""));
        let name = name.trim();
        if name.is_empty() {
            return Err(CacheWarmerError::InvalidHeader(format!(
                "'{raw}' has no header name. Expected 'Name: Value'."
            )));
        }

        Ok(Self {
            name: name.to_string(),
            value: value.trim().to_string(),
        })
    }

    /// Lower-cased header name used for lookups and de-duplication.
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// Parse a list of header specs; later entries replace earlier ones with the
/// same (case-insensitive) name but keep the earlier position.
pub fn parse_header_specs<S: AsRef<str>>(raw: &[S]) -> Result<Vec<HeaderSpec>> {
    let mut specs: Vec<HeaderSpec> = Vec::with_capacity(raw.len());
    for item in raw {
        let spec = HeaderSpec::parse(item.as_ref())?;
        match specs.iter_mut().find(|existing| existing.key() == spec.key()) {
            Some(existing) => *existing = spec,
            None => specs.push(spec),
        }
    }
    Ok(specs)
}

/// Build the header map attached to every request.
pub fn build_header_map(specs: &[HeaderSpec]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(specs.len());
    for spec in specs {
        let name = HeaderName::from_bytes(spec.key().as_bytes()).map_err(|e| {
            CacheWarmerError::InvalidHeader(format!("'{}': {e}", spec.name))
        })?;
        let value = HeaderValue::from_str(&spec.value).map_err(|e| {
            CacheWarmerError::InvalidHeader(format!("'{}: {}': {e}", spec.name, spec.value))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Read-only snapshot of everything a worker needs to issue requests.
///
/// Built once from [`Config`](crate::config::Config) and shared behind an
/// `Arc`; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Prefix joined in front of every input line
    pub base: Option<String>,
    /// Headers attached to every request, names lower-cased
    pub headers: HeaderMap,
    /// Response headers that must match exactly on a 200 response
    pub header_checks: Vec<HeaderSpec>,
    /// Retries for timeouts, connection errors and 5xx responses
    pub retry_count: u32,
    /// Pause between two attempts for the same URL
    pub retry_delay: Duration,
    /// Connect and request timeout
    pub timeout: Duration,
    /// Worker pool size, also the connection pool size
    pub threads: usize,
    pub user_agent: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            base: None,
            headers: HeaderMap::new(),
            header_checks: Vec::new(),
            retry_count: defaults::RETRY_COUNT,
            retry_delay: Duration::from_secs(timeouts::DEFAULT_RETRY_DELAY_SECONDS),
            timeout: Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS),
            threads: defaults::THREADS,
            user_agent: default_user_agent().to_string(),
        }
    }
}

pub fn default_user_agent() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
}
