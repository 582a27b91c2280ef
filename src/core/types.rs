use std::fmt;

use crate::core::constants::exit_codes;

/// The single result reported for one URL.
///
/// Retries happen before an outcome is built, so every URL yields exactly
/// one of these. An absent error means the URL was warmed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    /// The URL that was requested
    pub url: String,
    /// Human readable failure description, `None` on success
    pub error: Option<String>,
}

impl RequestOutcome {
    /// Create a successful outcome.
    pub fn success<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            error: None,
        }
    }

    /// Create a failed outcome with the given description.
    pub fn failure<S: Into<String>, E: Into<String>>(url: S, error: E) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Printed as `<url> <error>`, the line format used for failing URLs.
impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{} {}", self.url, error),
            None => write!(f, "{}", self.url),
        }
    }
}

/// How a run ended, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every URL was warmed without errors
    Success,
    /// At least one URL failed, whether or not the run was aborted early
    Failure,
    /// The operator interrupted the run
    Interrupted,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => exit_codes::SUCCESS,
            ExitStatus::Failure => exit_codes::FAILURE,
            ExitStatus::Interrupted => exit_codes::INTERRUPTED,
        }
    }

    /// Interruption wins over errors, errors win over success.
    pub fn from_run(interrupted: bool, errors: u64) -> Self {
        if interrupted {
            ExitStatus::Interrupted
        } else if errors > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
