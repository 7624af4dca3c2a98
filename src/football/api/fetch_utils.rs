//! Single-attempt typed HTTP fetching with upstream failure classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::urls::redact_api_key;
use crate::error::AppError;

/// Issues one GET and decodes the body into `T`.
///
/// No retry or backoff is attempted; the client's timeout is the only bound.
/// Failures are classified into the upstream `AppError` family:
/// - transport: `NetworkTimeout`, `NetworkConnection`, `ApiFetch`
/// - status: `ApiNotFound`, `ApiRateLimit`, `ApiClientError`,
///   `ApiServiceUnavailable`, `ApiServerError`
/// - body: `ApiNoData`, `ApiMalformedJson`, `ApiUnexpectedStructure`
///
/// URLs in errors and logs have the API key redacted.
#[instrument(skip(client, url))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let log_url = redact_api_key(url);
    debug!("Fetching data from URL: {log_url}");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            AppError::network_timeout(&log_url)
        } else if e.is_connect() {
            AppError::network_connection(&log_url, e.without_url().to_string())
        } else {
            AppError::ApiFetch(e.without_url())
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            404 => AppError::api_not_found(&log_url),
            429 => AppError::api_rate_limit(reason, &log_url),
            400..=499 => AppError::api_client_error(status_code, reason, &log_url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, &log_url),
            _ => AppError::api_server_error(status_code, reason, &log_url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        if e.is_timeout() {
            AppError::network_timeout(&log_url)
        } else {
            AppError::ApiFetch(e.without_url())
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text)
        .map_err(|e| classify_body_error(&response_text, e, &log_url))
}

/// Distinguishes "upstream had nothing", "not JSON" and "JSON of the wrong shape"
fn classify_body_error(body: &str, error: serde_json::Error, log_url: &str) -> AppError {
    let trimmed = body.trim_start();

    if trimmed.is_empty() {
        return AppError::api_no_data("Response body is empty", log_url);
    }

    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        return AppError::api_malformed_json("Response is not valid JSON", log_url);
    }

    // The upstream reports "no data" as an object: {"error": 404, "message": "..."}
    if let Ok(serde_json::Value::Object(object)) = serde_json::from_str::<serde_json::Value>(trimmed)
        && object.contains_key("error")
    {
        let message = object
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Upstream reported an error");
        return AppError::api_no_data(message, log_url);
    }

    if error.is_syntax() || error.is_eof() {
        AppError::api_malformed_json(error.to_string(), log_url)
    } else {
        AppError::api_unexpected_structure(error.to_string(), log_url)
    }
}
