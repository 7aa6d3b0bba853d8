/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the TimeSolv API
//!
//! This module provides the client that:
//! - Exchanges the authorization code for a bearer token when it is built
//! - Sends authenticated JSON requests against the configured base URL
//! - Walks the page-numbered search endpoints until the last page
//!
//! # Example
//! ```ignore
//! use timesolv_client::prelude::*;
//!
//! let config = Config::from_env()?;
//! let client = Client::new(config).await?;
//! let clients = client.get_clients().await?;
//! ```

use crate::application::auth::{AccessToken, Auth};
use crate::application::config::{Config, RestApiConfig};
use crate::application::interfaces::search::SearchService;
use crate::constants::{DEFAULT_PAGE_SIZE, USER_AGENT};
use crate::error::AppError;
use crate::model::http::{decode_json, make_http_request, read_body};
use crate::model::requests::SearchQuery;
use crate::model::responses::{Record, SearchPage};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client as HttpInternalClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Authenticated client for the TimeSolv API
///
/// The bearer token is obtained once and never changes for the lifetime of
/// the client.
pub struct Client {
    config: Arc<Config>,
    http_client: HttpInternalClient,
    token: AccessToken,
}

impl Client {
    /// Creates a new client and performs the token exchange
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built or authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config.rest_api)?;

        let auth = Auth::new(config.clone(), http_client.clone());
        let token = auth.exchange_code().await?;

        Ok(Self {
            config,
            http_client,
            token,
        })
    }

    /// Creates a client around a token obtained earlier, without contacting
    /// the token endpoint
    pub fn with_token(config: Config, token: AccessToken) -> Result<Self, AppError> {
        let http_client = build_http_client(&config.rest_api)?;
        Ok(Self {
            config: Arc::new(config),
            http_client,
            token,
        })
    }

    /// Bearer token used by this client
    #[must_use]
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Configuration used by this client
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes an authenticated request and decodes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path, resolved against the base URL
    /// * `body` - Optional JSON payload
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded response
    /// * `Err(AppError::HttpStatus)` - Non-2xx response
    /// * `Err(AppError::Transport)` - Network failure or timeout
    /// * `Err(AppError::Decode)` - Body is not JSON of the expected shape
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let url = self.config.rest_api.url_for(path);
        let text = self.send(method, &url, body).await?;
        decode_json(&text, &url)
    }

    /// Sends an authenticated request and returns the raw body of a 2xx response
    async fn send<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<String, AppError> {
        let auth_header_value = self.token.bearer_header();
        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        let response = make_http_request(&self.http_client, method, url, headers, &body).await?;
        read_body(response, url).await
    }

    /// Fetches every page of a search and concatenates the records
    ///
    /// Pages are requested one after another, starting at page 1 with a page
    /// size of 100, until a page comes back empty or shorter than the page
    /// size. Records keep the order the server returned them in. Any failure
    /// aborts the walk and the records gathered so far are dropped.
    pub async fn search_all(&self, query: &SearchQuery) -> Result<Vec<Record>, AppError> {
        let endpoint = query.endpoint;
        let page_size = DEFAULT_PAGE_SIZE;
        let mut records = Vec::new();
        let mut page_number = 1;

        loop {
            info!("Getting {} page {}", endpoint.collection(), page_number);
            let page = self.search_page(query, page_number, page_size).await?;
            let count = page.len();
            let last = page.is_last(page_size);
            records.extend(page.records);

            debug!(
                "{} page {} returned {} records",
                endpoint.collection(),
                page_number,
                count
            );

            if count == 0 || last {
                break;
            }
            page_number = next_page(page_number, &self.config.rest_api.url_for(endpoint.path()))?;
        }

        info!(
            "Total {} obtained: {}",
            endpoint.collection(),
            records.len()
        );
        Ok(records)
    }

    /// Fetches a single page of a search
    pub async fn search_page(
        &self,
        query: &SearchQuery,
        page_number: u32,
        page_size: u32,
    ) -> Result<SearchPage, AppError> {
        let endpoint = query.endpoint;
        let url = self.config.rest_api.url_for(endpoint.path());
        let body = query.page(page_number, page_size);

        let text = self.send(Method::POST, &url, Some(&body)).await?;
        let value: Value = decode_json(&text, &url)?;

        SearchPage::from_response(value, endpoint.collection()).map_err(|message| {
            error!("Unexpected {} response shape: {}", endpoint.path(), message);
            AppError::Decode {
                url,
                message,
                body: text,
            }
        })
    }
}

#[async_trait]
impl SearchService for Client {
    async fn get_firm_users(&self) -> Result<Vec<Record>, AppError> {
        self.search_all(&SearchQuery::active_firm_users()).await
    }

    async fn get_timecards(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Record>, AppError> {
        self.search_all(&SearchQuery::timecards(start, end)?).await
    }

    async fn get_user_timecards(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Record>, AppError> {
        self.search_all(&SearchQuery::user_timecards(user_id, start, end)?)
            .await
    }

    async fn get_task_codes(&self) -> Result<Vec<Record>, AppError> {
        self.search_all(&SearchQuery::active_task_codes()).await
    }

    async fn get_abbreviations(&self) -> Result<Vec<Record>, AppError> {
        self.search_all(&SearchQuery::active_abbreviations()).await
    }

    async fn get_clients(&self) -> Result<Vec<Record>, AppError> {
        self.search_all(&SearchQuery::active_clients()).await
    }
}

/// Number of the page after `page_number`
///
/// A server that keeps returning full pages past `u32::MAX` is reported as a
/// decode error instead of overflowing.
fn next_page(page_number: u32, url: &str) -> Result<u32, AppError> {
    page_number.checked_add(1).ok_or_else(|| {
        error!("Page number overflow after page {}", page_number);
        AppError::Decode {
            url: url.to_string(),
            message: format!("server returned full pages past page {page_number}"),
            body: String::new(),
        }
    })
}

/// Builds the underlying HTTP client with the configured timeout
fn build_http_client(rest_api: &RestApiConfig) -> Result<HttpInternalClient, AppError> {
    HttpInternalClient::builder()
        .user_agent(USER_AGENT)
        .timeout(rest_api.timeout())
        .build()
        .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))
}
