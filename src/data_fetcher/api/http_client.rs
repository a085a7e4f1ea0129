//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

use crate::constants::USER_AGENT;

/// Creates an HTTP client with the given request timeout.
///
/// The timeout is the only transport policy applied; failed requests are not
/// retried.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
