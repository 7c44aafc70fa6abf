//! HTTP helpers for JSON APIs with consistent error handling. Feature clients use
//! these helpers to avoid duplicating request setup. The helpers never log request
//! bodies; payloads may carry passwords.

pub mod errors;

pub use errors::AppError;

use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, info_span, Instrument};

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Builds a reqwest client. No timeout is applied unless one is given.
///
/// # Errors
/// Returns `AppError::Config` if the TLS backend or resolver cannot be initialized.
pub fn client(user_agent: &str, timeout: Option<Duration>) -> Result<Client, AppError> {
    let mut builder = Client::builder().user_agent(user_agent);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|err| AppError::Config(format!("Failed to initialize HTTP client: {err}")))
}

/// Posts JSON to `base_url`/`path` and parses a JSON response.
///
/// # Errors
/// Returns `AppError` if the body cannot be encoded, the request cannot be sent,
/// the server answers with a non-success status, or the response is not valid JSON
/// for `T`.
pub async fn post_json_response<B, T>(
    client: &Client,
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = build_url_with_base(base_url, path);
    let payload = serde_json::to_vec(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    debug!("POST {}", url);

    let span = info_span!("api.post", http.method = "POST", url = %url);
    let response = client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .instrument(span)
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Builds a URL from an explicit base URL and the provided path.
#[must_use]
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
/// An empty success body decodes as JSON `null`.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();

    if status.is_success() {
        let text = response.text().await.map_err(map_request_error)?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };

        serde_json::from_str::<T>(text)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(AppError::Http {
            status: status.as_u16(),
            message: error_message(response.text().await),
        })
    }
}

/// Message for a failed response. An unreadable body falls back to the
/// status-only message.
fn error_message<E: std::fmt::Display>(body: Result<String, E>) -> String {
    match body {
        Ok(body) => sanitize_body(&body),
        Err(err) => {
            debug!("Failed to read error body: {err}");
            sanitize_body("")
        }
    }
}

/// Sanitizes HTTP error bodies by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
