use crate::error::AppError;
use crate::model::responses::Record;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Interface for the paginated read endpoints
///
/// Every method walks all pages of its search endpoint and returns the records
/// in the order the server sent them.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Gets all active firm users, ordered by last name
    async fn get_firm_users(&self) -> Result<Vec<Record>, AppError>;

    /// Gets all timecards dated between `start` and `end`, both inclusive
    ///
    /// # Arguments
    /// * `start` - First day of the range
    /// * `end` - Last day of the range
    ///
    /// # Returns
    /// * Timecards ordered by date, or `AppError::InvalidInput` if `start > end`
    async fn get_timecards(&self, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<Record>, AppError>;

    /// Gets the timecards of a single firm user dated between `start` and `end`
    async fn get_user_timecards(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Record>, AppError>;

    /// Gets all active task codes
    async fn get_task_codes(&self) -> Result<Vec<Record>, AppError>;

    /// Gets all active abbreviations
    async fn get_abbreviations(&self) -> Result<Vec<Record>, AppError>;

    /// Gets all active clients
    async fn get_clients(&self) -> Result<Vec<Record>, AppError>;
}
