//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client for upstream calls with a per-request timeout and
/// connection pooling.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
///
/// # Notes
/// * The timeout bounds each upstream call; there is no retry on top of it
/// * Idle connections per host are capped by `HTTP_POOL_MAX_IDLE_PER_HOST`
pub fn create_http_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with the given timeout
#[cfg(test)]
pub fn create_test_http_client(timeout: Duration) -> Client {
    create_http_client_with_timeout(timeout).expect("Failed to create test HTTP client")
}
