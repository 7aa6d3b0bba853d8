/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::constants::AUTHORIZATION_CODE_GRANT;
use serde::{Deserialize, Serialize};

/// Body posted to the token endpoint for an authorization-code grant
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenRequest<'a> {
    /// OAuth2 client identifier
    pub client_id: &'a str,
    /// OAuth2 client secret
    pub client_secret: &'a str,
    /// Always `authorization_code`
    pub grant_type: &'a str,
    /// Authorization code to exchange
    pub code: &'a str,
    /// Redirect URI the code was issued for
    pub redirect_uri: &'a str,
}

impl<'a> From<&'a Credentials> for TokenRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: AUTHORIZATION_CODE_GRANT,
            code: &credentials.authorization_code,
            redirect_uri: &credentials.redirect_uri,
        }
    }
}

/// Response from the token endpoint
///
/// A successful grant carries `access_token`; a rejected one carries `error`
/// and usually `error_description`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, normally `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the token in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// OAuth2 error code
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable error description
    #[serde(default)]
    pub error_description: Option<String>,
}

impl TokenResponse {
    /// Returns the error message if the server rejected the grant
    ///
    /// Prefers `error_description` and falls back to `error`.
    pub fn error_message(&self) -> Option<String> {
        let error = self.error.as_deref().filter(|e| !e.is_empty())?;
        Some(
            self.error_description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|d| format!("{d} ({error})"))
                .unwrap_or_else(|| error.to_string()),
        )
    }

    /// Returns the access token when present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}
