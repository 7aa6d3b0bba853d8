/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authentication module for the TimeSolv API
//!
//! TimeSolv issues bearer tokens through a standard OAuth2 authorization-code
//! grant. The token is requested once, when the client is built, and is never
//! refreshed.

use crate::application::config::Config;
use crate::constants::TOKEN_ENDPOINT;
use crate::error::AppError;
use crate::model::auth::{TokenRequest, TokenResponse};
use crate::model::http::{decode_json, make_http_request, read_body};
use reqwest::{Client, Method};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Bearer token issued by the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Performs the authorization-code exchange against the token endpoint
pub struct Auth {
    config: Arc<Config>,
    client: Client,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration holding credentials and the base URL
    /// * `client` - HTTP client used for the exchange
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Exchanges the configured authorization code for an access token
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - Token to use on every subsequent request
    /// * `Err(AppError::Authentication)` - The server rejected the grant or
    ///   returned no token
    /// * `Err(AppError::HttpStatus)` - Non-2xx response without an OAuth2 error
    /// * `Err(AppError::Transport)` / `Err(AppError::Decode)` - Network or
    ///   decoding failure
    pub async fn exchange_code(&self) -> Result<AccessToken, AppError> {
        let url = self.config.rest_api.url_for(TOKEN_ENDPOINT);
        let body = TokenRequest::from(&self.config.credentials);

        debug!("Requesting access token from: {}", url);

        let headers = vec![
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        let response =
            match make_http_request(&self.client, Method::POST, &url, headers, &Some(body)).await {
                Ok(response) => response,
                Err(AppError::HttpStatus { url, status, body }) => {
                    // OAuth2 servers report rejected grants with a 4xx and an error body
                    if let Some(message) = serde_json::from_str::<TokenResponse>(&body)
                        .ok()
                        .and_then(|r| r.error_message())
                    {
                        error!("Token request rejected: {}", message);
                        return Err(AppError::Authentication(message));
                    }
                    return Err(AppError::HttpStatus { url, status, body });
                }
                Err(e) => return Err(e),
            };

        let text = read_body(response, &url).await?;
        let token_response: TokenResponse = decode_json(&text, &url)?;

        if let Some(message) = token_response.error_message() {
            error!("Token request rejected: {}", message);
            return Err(AppError::Authentication(message));
        }

        match token_response.token() {
            Some(token) => {
                info!("✓ Access token obtained");
                Ok(AccessToken::new(token))
            }
            None => {
                error!("Token response did not contain an access token");
                Err(AppError::Authentication(
                    "token response did not contain an access token".to_string(),
                ))
            }
        }
    }
}
