// src/api/client.rs
//! Blocking HTTP helper for compiled monitoring API requests.
//!
//! Optional: the builders never need it. Unlike a plain "GET and read the
//! body" helper it reports transport failures and non-success statuses as
//! errors, so an empty body always means the vendor sent an empty body.

use crate::constants::{ERROR_BODY_PREVIEW_LENGTH, HTTP_TIMEOUT_SECS};
use crate::error::AppError;
use crate::query::CompiledRequest;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

/// A thin wrapper around a blocking reqwest Client.
#[derive(Debug, Clone)]
pub struct MonitoringHttpClient {
    client: Client,
}

impl MonitoringHttpClient {
    /// Creates a client with the default request timeout.
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Issues a GET for `request` and returns the body as text.
    ///
    /// Only the path is logged; the full URL carries the API key.
    pub fn get_text(&self, request: &CompiledRequest) -> Result<ApiResponse<String>, AppError> {
        log::debug!("GET /{}", request.path());

        let response = self.client.get(request.to_url()).send()?;
        let response = extract_response_text(response)?;

        if !response.status.is_success() {
            log::warn!(
                "Monitoring API answered {} for /{}",
                response.status,
                request.path()
            );
            return Err(AppError::VendorStatus {
                status: response.status,
                path: request.path().to_string(),
                body: preview(&response.data),
            });
        }

        Ok(response)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
}

/// Extracts the response body as text along with its status.
pub fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let text = response.text()?;

    Ok(ApiResponse { data: text, status })
}

fn preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let body = "é".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        assert_eq!(preview(&body).chars().count(), ERROR_BODY_PREVIEW_LENGTH);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn client_builds_with_custom_timeout() {
        assert!(MonitoringHttpClient::with_timeout(Duration::from_secs(1)).is_ok());
    }
}
