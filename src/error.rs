/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error type shared by every fallible operation of the crate

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Errors returned by the TimeSolv client
///
/// Every failure is surfaced to the caller as one of these variants; none are
/// swallowed and no partial results are returned alongside them.
#[derive(Debug)]
pub enum AppError {
    /// Required credentials are missing or configuration values are invalid
    Configuration(String),
    /// The token endpoint rejected the grant or returned no access token
    Authentication(String),
    /// The server answered with a non-2xx status
    HttpStatus {
        /// Requested URL
        url: String,
        /// Status code returned by the server
        status: StatusCode,
        /// Response body, empty when it could not be read
        body: String,
    },
    /// The request could not be sent or the response could not be read
    Transport {
        /// Requested URL
        url: String,
        /// Underlying transport error
        source: reqwest::Error,
    },
    /// The response body is not JSON or does not have the expected shape
    Decode {
        /// Requested URL
        url: String,
        /// Description of the decoding failure
        message: String,
        /// Raw response body
        body: String,
    },
    /// Caller supplied arguments that cannot produce a valid request
    InvalidInput(String),
}

impl AppError {
    /// Returns true for configuration errors
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::Configuration(_))
    }

    /// Returns true for authentication errors
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication(_))
    }

    /// Returns the HTTP status when the error carries one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            AppError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Returns the URL the failing request was sent to, if any
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            AppError::HttpStatus { url, .. }
            | AppError::Transport { url, .. }
            | AppError::Decode { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::HttpStatus { url, status, body } => {
                write!(f, "http status error: {status} from {url}: {body}")
            }
            AppError::Transport { url, source } => {
                write!(f, "transport error for {url}: {source}")
            }
            AppError::Decode { url, message, .. } => {
                write!(f, "decode error for {url}: {message}")
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}
