/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Date format expected by the TimeSolv search criteria
pub const CRITERIA_DATE_FORMAT: &str = "%Y-%m-%d";

/// Comparison operator of a search criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// `=`
    #[serde(rename = "=")]
    Equals,
    /// `<>`
    #[serde(rename = "<>")]
    NotEquals,
    /// `>`
    #[serde(rename = ">")]
    GreaterThan,
    /// `>=`
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    /// `<`
    #[serde(rename = "<")]
    LessThan,
    /// `<=`
    #[serde(rename = "<=")]
    LessThanOrEqual,
    /// `Contains`
    Contains,
}

/// A structured filter clause sent with each search request
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Criterion {
    /// Name of the field to filter on
    pub field_name: String,
    /// Comparison operator
    pub operator: Operator,
    /// Value to compare against
    pub value: Value,
}

impl Criterion {
    /// Creates a new criterion
    pub fn new(field_name: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field_name: field_name.into(),
            operator,
            value: value.into(),
        }
    }

    /// Creates an equality criterion
    pub fn equals(field_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field_name, Operator::Equals, value)
    }
}

/// Body of a single page request on a search endpoint
///
/// `SortOrderAscending` is always sent as a JSON boolean.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    /// Field to order results by
    pub order_by: String,
    /// Sort direction
    pub sort_order_ascending: bool,
    /// Number of records per page
    pub page_size: u32,
    /// 1-based page number
    pub page_number: u32,
    /// Filter clauses
    pub criteria: Vec<Criterion>,
}

/// The search endpoints exposed by TimeSolv
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEndpoint {
    /// Firm users (timekeepers)
    FirmUsers,
    /// Timecards
    TimeCards,
    /// Task codes
    TaskCodes,
    /// Abbreviations
    Abbreviations,
    /// Clients
    Clients,
}

impl SearchEndpoint {
    /// Endpoint path relative to the base URL
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            SearchEndpoint::FirmUsers => "firmUserSearch",
            SearchEndpoint::TimeCards => "timecardSearch",
            SearchEndpoint::TaskCodes => "taskcodeSearch",
            SearchEndpoint::Abbreviations => "abbreviationSearch",
            SearchEndpoint::Clients => "clientSearch",
        }
    }

    /// Name of the array holding the records in the response
    #[must_use]
    pub fn collection(&self) -> &'static str {
        match self {
            SearchEndpoint::FirmUsers => "FirmUsers",
            SearchEndpoint::TimeCards => "TimeCards",
            SearchEndpoint::TaskCodes => "TaskCodes",
            SearchEndpoint::Abbreviations => "Abbreviations",
            SearchEndpoint::Clients => "Clients",
        }
    }
}

/// Endpoint-specific parameters of a paginated search
///
/// The pagination fields are filled in per page by [`SearchQuery::page`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Target endpoint
    pub endpoint: SearchEndpoint,
    /// Field to order results by
    pub order_by: String,
    /// Sort direction
    pub sort_ascending: bool,
    /// Filter clauses
    pub criteria: Vec<Criterion>,
}

impl SearchQuery {
    /// Creates a query with no criteria
    pub fn new(endpoint: SearchEndpoint, order_by: impl Into<String>, sort_ascending: bool) -> Self {
        Self {
            endpoint,
            order_by: order_by.into(),
            sort_ascending,
            criteria: Vec::new(),
        }
    }

    /// Adds a criterion
    #[must_use]
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Active firm users ordered by last name
    #[must_use]
    pub fn active_firm_users() -> Self {
        Self::new(SearchEndpoint::FirmUsers, "LastName", true)
            .with_criterion(Criterion::equals("UserStatus", "Active"))
    }

    /// Timecards dated between `start` and `end`, both inclusive
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when `start` is after `end`.
    pub fn timecards(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::InvalidInput(format!(
                "timecard range start {start} is after end {end}"
            )));
        }
        Ok(Self::new(SearchEndpoint::TimeCards, "Date", true)
            .with_criterion(Criterion::new(
                "Date",
                Operator::GreaterThanOrEqual,
                start.format(CRITERIA_DATE_FORMAT).to_string(),
            ))
            .with_criterion(Criterion::new(
                "Date",
                Operator::LessThanOrEqual,
                end.format(CRITERIA_DATE_FORMAT).to_string(),
            )))
    }

    /// Timecards owned by `user_id` dated between `start` and `end`
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when `start` is after `end` or
    /// `user_id` is blank.
    pub fn user_timecards(user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if user_id.trim().is_empty() {
            return Err(AppError::InvalidInput("user id must not be empty".to_string()));
        }
        Ok(Self::timecards(start, end)?.with_criterion(Criterion::equals("UserId", user_id)))
    }

    /// Active task codes ordered by code
    #[must_use]
    pub fn active_task_codes() -> Self {
        Self::new(SearchEndpoint::TaskCodes, "Code", true)
            .with_criterion(Criterion::equals("IsActive", 1))
    }

    /// Active abbreviations ordered by abbreviation
    #[must_use]
    pub fn active_abbreviations() -> Self {
        Self::new(SearchEndpoint::Abbreviations, "Abbreviation", true)
            .with_criterion(Criterion::equals("IsActive", 1))
    }

    /// Active clients ordered by name
    #[must_use]
    pub fn active_clients() -> Self {
        Self::new(SearchEndpoint::Clients, "ClientName", true)
            .with_criterion(Criterion::equals("ClientStatus", "Active"))
    }

    /// Builds the request body for one page
    #[must_use]
    pub fn page(&self, page_number: u32, page_size: u32) -> SearchRequest {
        SearchRequest {
            order_by: self.order_by.clone(),
            sort_order_ascending: self.sort_ascending,
            page_size,
            page_number,
            criteria: self.criteria.clone(),
        }
    }
}
