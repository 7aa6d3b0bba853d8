/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Sends an HTTP request and classifies the outcome
///
/// The body, when present, is serialized as JSON. There is no retry: the first
/// failure is returned.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body
///
/// # Returns
///
/// * `Ok(Response)` - Response with a 2xx status
/// * `Err(AppError::Transport)` - The request could not be sent
/// * `Err(AppError::HttpStatus)` - Any other status, with the body text
///
/// # Example
///
/// ```ignore
/// let headers = vec![("Content-Type", "application/json")];
/// let response = make_http_request(
///     &client,
///     Method::POST,
///     "https://apps.timesolv.com/Services/rest/oauth2v2/clientSearch",
///     headers,
///     &Some(body),
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await.map_err(|source| {
        error!("Request to {} failed: {}", url, source);
        AppError::Transport {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::HttpStatus {
        url: url.to_string(),
        status,
        body,
    })
}

/// Reads the full response body as text
///
/// # Errors
/// Returns `AppError::Transport` when the body cannot be read.
pub async fn read_body(response: Response, url: &str) -> Result<String, AppError> {
    response.text().await.map_err(|source| {
        error!("Failed to read response body from {}: {}", url, source);
        AppError::Transport {
            url: url.to_string(),
            source,
        }
    })
}

/// Decodes a JSON body into `T`
///
/// # Errors
/// Returns `AppError::Decode` carrying the raw body when it is not valid JSON
/// for `T`.
pub fn decode_json<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        error!("Failed to decode response from {}: {}", url, e);
        AppError::Decode {
            url: url.to_string(),
            message: e.to_string(),
            body: body.to_string(),
        }
    })
}
