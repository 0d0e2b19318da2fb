//! Backend API client
//!
//! Blocking HTTP client for the calorie counter REST backend. The client is
//! transport only: it fetches the catalog and intake snapshots the aggregator
//! consumes and persists the entry lists the aggregator helped compose. It
//! has no opinion on retries or caching.

use chrono::NaiveDate;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::{
    DailyIntake, DailyIntakeRequest, Food, FoodCreate, IntakeEntry, Nutrition,
    UpdateDailyIntakeRequest, User, UserCreate,
};
use crate::nutrition::normalize_entries;

/// Default backend base URL, overridable via CALTRACK_API_URL
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
    },

    #[error(transparent)]
    Aggregation(#[from] crate::nutrition::AggregationError),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the backend's /api/v1 surface
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (e.g. "http://host:8080/api/v1")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Create a client from the CALTRACK_API_URL environment variable
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CALTRACK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into an ApiError::Status with the body text
    fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().unwrap_or_default();
        Err(ApiError::Status { status, message })
    }

    // ------------------------------------------------------------------
    // Foods
    // ------------------------------------------------------------------

    /// Fetch the full food catalog
    pub fn list_foods(&self) -> ApiResult<Vec<Food>> {
        let url = self.url("/foods");
        tracing::debug!("GET {}", url);
        let response = Self::check(self.http.get(&url).send()?)?;
        Ok(response.json()?)
    }

    /// Get a food by id; None if the backend reports 404
    pub fn get_food(&self, id: i64) -> ApiResult<Option<Food>> {
        let url = self.url(&format!("/foods/{}", id));
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(response)?.json()?))
    }

    pub fn create_food(&self, data: &FoodCreate) -> ApiResult<()> {
        let url = self.url("/foods/create_food");
        tracing::debug!("POST {}", url);
        Self::check(self.http.post(&url).json(data).send()?)?;
        Ok(())
    }

    pub fn update_food(&self, id: i64, data: &FoodCreate) -> ApiResult<()> {
        let url = self.url(&format!("/foods/update_food/{}", id));
        tracing::debug!("PUT {}", url);
        Self::check(self.http.put(&url).json(data).send()?)?;
        Ok(())
    }

    pub fn delete_food(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/foods/delete_food/{}", id));
        tracing::debug!("DELETE {}", url);
        Self::check(self.http.delete(&url).send()?)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn list_users(&self) -> ApiResult<Vec<User>> {
        let url = self.url("/users");
        tracing::debug!("GET {}", url);
        let response = Self::check(self.http.get(&url).send()?)?;
        Ok(response.json()?)
    }

    /// Get a user by id; None if the backend reports 404
    pub fn get_user(&self, id: i64) -> ApiResult<Option<User>> {
        let url = self.url(&format!("/users/{}", id));
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(response)?.json()?))
    }

    pub fn create_user(&self, data: &UserCreate) -> ApiResult<()> {
        let url = self.url("/users/save_user");
        tracing::debug!("POST {}", url);
        Self::check(self.http.post(&url).json(data).send()?)?;
        Ok(())
    }

    pub fn update_user(&self, id: i64, data: &UserCreate) -> ApiResult<()> {
        let url = self.url(&format!("/users/update_user/{}", id));
        tracing::debug!("PUT {}", url);
        Self::check(self.http.put(&url).json(data).send()?)?;
        Ok(())
    }

    pub fn delete_user(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/users/delete_user/{}", id));
        tracing::debug!("DELETE {}", url);
        Self::check(self.http.delete(&url).send()?)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Daily intakes
    // ------------------------------------------------------------------

    /// List a user's intakes, optionally restricted to one date
    pub fn intakes_for_user(
        &self,
        email: &str,
        date: Option<NaiveDate>,
    ) -> ApiResult<Vec<DailyIntake>> {
        let url = self.url("/daily_intakes/filter");
        tracing::debug!("GET {} email={} date={:?}", url, email, date);

        let mut request = self.http.get(&url).query(&[("email", email)]);
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }

        let response = Self::check(request.send()?)?;
        Ok(response.json()?)
    }

    /// Get an intake by id; None if the backend reports 404
    pub fn get_intake(&self, id: i64) -> ApiResult<Option<DailyIntake>> {
        let url = self.url(&format!("/daily_intakes/{}", id));
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(response)?.json()?))
    }

    /// Server-computed totals for one intake
    pub fn intake_nutrition(&self, id: i64) -> ApiResult<Nutrition> {
        let url = self.url(&format!("/daily_intakes/{}/nutrition", id));
        tracing::debug!("GET {}", url);
        let response = Self::check(self.http.get(&url).send()?)?;
        Ok(response.json()?)
    }

    /// Server-computed totals for all of a user's intakes on one date
    pub fn daily_nutrition(&self, email: &str, date: NaiveDate) -> ApiResult<Nutrition> {
        let url = self.url("/daily_intakes/nutrition");
        tracing::debug!("GET {} email={} date={}", url, email, date);
        let date_str = date.format("%Y-%m-%d").to_string();
        let response = Self::check(
            self.http
                .get(&url)
                .query(&[("email", email), ("date", date_str.as_str())])
                .send()?,
        )?;
        Ok(response.json()?)
    }

    /// Create an intake for a user from an entry list
    ///
    /// Entries are normalized first so duplicate food ids are collapsed
    /// before they reach the wire.
    pub fn create_intake(&self, user_id: i64, entries: &[IntakeEntry]) -> ApiResult<()> {
        let payload = DailyIntakeRequest {
            user_id,
            food_entries: normalize_entries(entries)?,
        };

        let url = self.url("/daily_intakes/create_intake");
        tracing::debug!("POST {} ({} entries)", url, payload.food_entries.len());
        Self::check(self.http.post(&url).json(&payload).send()?)?;
        Ok(())
    }

    /// Add one food to an existing intake; the backend merges weights if the
    /// food is already present. Returns the updated intake.
    pub fn add_food_to_intake(
        &self,
        intake_id: i64,
        food_id: i64,
        weight: f64,
    ) -> ApiResult<DailyIntake> {
        let url = self.url(&format!("/daily_intakes/{}/add-food", intake_id));
        tracing::debug!("POST {} food_id={} weight={}", url, food_id, weight);
        let response = Self::check(
            self.http
                .post(&url)
                .json(&IntakeEntry::new(food_id, weight))
                .send()?,
        )?;
        Ok(response.json()?)
    }

    /// Replace an intake's entry list
    ///
    /// The update endpoint takes parallel foodIds/weights arrays; the entry
    /// list is normalized and split at this boundary.
    pub fn update_intake(&self, id: i64, entries: &[IntakeEntry]) -> ApiResult<()> {
        let normalized = normalize_entries(entries)?;
        let payload = UpdateDailyIntakeRequest::from(normalized.as_slice());

        let url = self.url(&format!("/daily_intakes/update_intake/{}", id));
        tracing::debug!("PATCH {} ({} entries)", url, normalized.len());
        Self::check(self.http.patch(&url).json(&payload).send()?)?;
        Ok(())
    }

    pub fn delete_intake(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/daily_intakes/delete_intake/{}", id));
        tracing::debug!("DELETE {}", url);
        Self::check(self.http.delete(&url).send()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/api/v1/");
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(client.url("/foods"), "http://localhost:8080/api/v1/foods");
    }

    #[test]
    fn test_invalid_entries_fail_before_any_request() {
        // A negative weight must surface as an aggregation error, not reach
        // the backend.
        let client = ApiClient::new("http://localhost:1/api/v1");
        let entries = vec![IntakeEntry::new(1, -5.0)];
        let err = client.create_intake(42, &entries).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Aggregation(crate::nutrition::AggregationError::InvalidWeight(_))
        ));
    }
}
