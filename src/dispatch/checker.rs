use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use std::error::Error as _;
use std::sync::Arc;
use tokio::time::sleep;

use crate::config::{HeaderSpec, RequestConfig};
use crate::core::constants::{error_messages, http_status};
use crate::core::error::Result;
use crate::core::types::RequestOutcome;
use crate::reporting::logging;

/// Something that turns a URL into its single [`RequestOutcome`].
#[async_trait]
pub trait CheckUrl: Send + Sync {
    async fn check(&self, url: String) -> RequestOutcome;
}

/// Classification of one HTTP attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Success,
    /// Timeout, connection failure or 5xx; may be retried
    Retryable(String),
    /// Anything else; reported as is
    Fatal(String),
}

/// Issues GET requests through one shared, pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: reqwest::Client,
    config: Arc<RequestConfig>,
}

impl HttpChecker {
    /// Build the shared client: redirects are never followed and the idle
    /// pool per host is sized to the worker count.
    ///
    /// The timeout bounds connecting and each individual read, not the whole
    /// transfer, so a slow but steady body still completes.
    pub fn new(config: Arc<RequestConfig>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .redirect(Policy::none())
            .user_agent(config.user_agent.as_str())
            .default_headers(config.headers.clone())
            .pool_max_idle_per_host(config.threads)
            .build()?;

        Ok(Self { client, config })
    }

    /// Perform a single GET, reading the whole body, and classify it.
    pub async fn attempt(&self, url: &str) -> Attempt {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => return classify_transport_error(err),
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return classify_transport_error(err),
        };

        let attempt = classify_response(status, &headers, body.len(), &self.config.header_checks);
        // A fatal 200 with a body can only be a header assertion failure
        if status == http_status::OK && !body.is_empty() && matches!(attempt, Attempt::Fatal(_)) {
            logging::log_response_headers(url, &headers);
        }
        attempt
    }
}

#[async_trait]
impl CheckUrl for HttpChecker {
    async fn check(&self, url: String) -> RequestOutcome {
        let mut retries_left = self.config.retry_count;

        loop {
            match self.attempt(&url).await {
                Attempt::Success => return RequestOutcome::success(url),
                Attempt::Fatal(error) => return RequestOutcome::failure(url, error),
                Attempt::Retryable(error) => {
                    if retries_left == 0 {
                        return RequestOutcome::failure(url, error);
                    }
                    retries_left -= 1;
                    logging::log_retry(&url, &error, retries_left);
                    sleep(self.config.retry_delay).await;
                }
            }
        }
    }
}

/// Classify a response that arrived in full.
///
/// Order matters: 5xx first, then anything that is not exactly 200, then an
/// empty body, then the header assertions in configured order.
pub fn classify_response(
    status: u16,
    headers: &HeaderMap,
    body_len: usize,
    header_checks: &[HeaderSpec],
) -> Attempt {
    if http_status::is_server_error(status) {
        return Attempt::Retryable(error_messages::status_code(status));
    }
    if status != http_status::OK {
        return Attempt::Fatal(error_messages::status_code(status));
    }
    if body_len == 0 {
        return Attempt::Fatal(error_messages::RESPONSE_EMPTY.to_string());
    }
    if let Some(failed) = first_failed_header_check(headers, header_checks) {
        return Attempt::Fatal(error_messages::headers_check_failed(
            &failed.name,
            &failed.value,
        ));
    }

    Attempt::Success
}

/// Header values are compared byte for byte; a missing header fails.
pub fn first_failed_header_check<'a>(
    headers: &HeaderMap,
    header_checks: &'a [HeaderSpec],
) -> Option<&'a HeaderSpec> {
    header_checks.iter().find(|check| {
        headers
            .get(check.key().as_str())
            .map(|value| value.as_bytes())
            != Some(check.value.as_bytes())
    })
}

/// Timeouts and connection-level failures are retryable, the rest is not.
pub fn classify_transport_error(err: reqwest::Error) -> Attempt {
    let retryable = err.is_timeout() || err.is_connect() || err.is_request();
    let description = describe_error(err);

    if retryable {
        Attempt::Retryable(description)
    } else {
        Attempt::Fatal(description)
    }
}

/// Render the error and its whole source chain, without repeating the URL.
pub fn describe_error(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.ends_with(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}
