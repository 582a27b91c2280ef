//! Application-wide constants to avoid magic values throughout the codebase.

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - the only status treated as a warm hit
    pub const OK: u16 = 200;
    /// First status code of the server error class
    pub const SERVER_ERROR_MIN: u16 = 500;
    /// Last status code of the server error class
    pub const SERVER_ERROR_MAX: u16 = 599;

    /// Whether the status belongs to the retryable 5xx class.
    pub fn is_server_error(code: u16) -> bool {
        (SERVER_ERROR_MIN..=SERVER_ERROR_MAX).contains(&code)
    }
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default connect/read timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
    /// Largest timeout accepted by config validation (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Default delay between retries in seconds
    pub const DEFAULT_RETRY_DELAY_SECONDS: u64 = 1;
}

/// Default configuration values
pub mod defaults {
    /// Sequential by default
    pub const THREADS: usize = 1;
    /// Largest worker pool accepted by config validation
    pub const MAX_THREADS: usize = 1000;
    /// Default number of retries
    pub const RETRY_COUNT: u32 = 0;
    /// Largest retry count accepted by config validation
    pub const MAX_RETRY_COUNT: u32 = 100;
    /// Default failure budget before the run aborts
    pub const MAX_ERRORS: u64 = 1;
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".cachewarmer.toml";
    /// How many parent directories are searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    /// 128 + SIGINT
    pub const INTERRUPTED: i32 = 130;
}

/// Per-URL error messages
pub mod error_messages {
    /// Status 200 with a zero-length body
    pub const RESPONSE_EMPTY: &str = "response empty";
    /// Printed once the failure budget is exhausted
    pub const TOO_MANY_ERRORS: &str = "Too many errors, exiting";

    /// Message for any non-200 status code, retried or not.
    pub fn status_code(code: u16) -> String {
        format!("response status code {code}")
    }

    /// Message for the first response header assertion that did not hold.
    pub fn headers_check_failed(name: &str, expected: &str) -> String {
        format!("response headers check failed ({name}: {expected})")
    }
}
