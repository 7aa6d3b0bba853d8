/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # TimeSolv Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use timesolv_client::prelude::*;
//!
//! let result = Config::from_map([("client_id", "only-one-key")]);
//! assert!(matches!(result, Err(AppError::Configuration(_))));
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

pub use crate::application::auth::{AccessToken, Auth};
pub use crate::application::client::Client;
pub use crate::application::interfaces::search::SearchService;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{Criterion, Operator, SearchEndpoint, SearchQuery, SearchRequest};
pub use crate::model::responses::{Record, SearchPage};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::constants::DEFAULT_PAGE_SIZE;
pub use crate::utils::logger::setup_logger;
