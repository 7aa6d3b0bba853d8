//! # TimeSolv Client
//!
//! A Rust client for the TimeSolv legal time-billing REST API.
//!
//! The client exchanges an OAuth2 authorization code for a bearer token when it
//! is built, then gives paginated read access to the firm's users, timecards,
//! task codes, abbreviations and clients.
//!
//! ## Example
//!
//! ```ignore
//! use timesolv_client::prelude::*;
//!
//! let config = Config::from_map([
//!     ("Client_Id", "my-client"),
//!     ("CLIENT_SECRET", "my-secret"),
//!     ("authorization_code", "code-from-redirect"),
//!     ("redirect_uri", "https://example.com/callback"),
//! ])?;
//! let client = Client::new(config).await?;
//! let users = client.get_firm_users().await?;
//! ```
//!
//! ## Configuration
//!
//! `Config::from_env` reads the same keys from `TIMESOLV_*` environment
//! variables (a `.env` file is loaded first when present):
//!
//! ```bash
//! TIMESOLV_CLIENT_ID=...
//! TIMESOLV_CLIENT_SECRET=...
//! TIMESOLV_AUTHORIZATION_CODE=...
//! TIMESOLV_REDIRECT_URI=...
//! TIMESOLV_BASE_URL=...   # optional
//! TIMESOLV_TIMEOUT=30     # optional, seconds
//! LOGLEVEL=DEBUG          # optional
//! ```

/// Application layer: configuration, authentication and the API client
pub mod application;
/// Constants used across the crate
pub mod constants;
/// Error type
pub mod error;
/// Wire models and HTTP helpers
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
