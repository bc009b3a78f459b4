use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;
use tracing::debug;

use super::endpoints::{MealsEnvelope, RawMeal, DEFAULT_API_KEY, DEFAULT_BASE_URL};

#[derive(Debug)]
pub enum ApiConnectionError {
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Serialization error: {}", err)
            }
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}

/// Thin client over TheMealDB's JSON endpoints. Base URL and key come from
/// `MEALDB_BASE_URL` / `MEALDB_API_KEY` when set (the base URL override is
/// what the hermetic tests use), falling back to the public demo endpoint.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDbClient {
    pub fn new() -> Self {
        dotenv().ok();
        let base_url = env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("MEALDB_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        Self::with_endpoint(base_url, api_key)
    }

    pub fn with_endpoint(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_key, resource)
    }

    async fn get_meals(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<RawMeal>, ApiConnectionError> {
        let url = self.endpoint(resource);
        debug!(url = %url, ?query, "fetching from TheMealDB");

        let response = self.http.get(&url).query(query).send().await?;

        if response.status().is_success() {
            let body = response.text().await?;
            let envelope: MealsEnvelope = serde_json::from_str(&body)?;
            // A null "meals" field means no results, not a failure.
            Ok(envelope.meals.unwrap_or_default())
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }

    /// Summary records (id, name, thumbnail) for one cuisine/area.
    pub async fn filter_by_cuisine(
        &self,
        area: &str,
    ) -> Result<Vec<RawMeal>, ApiConnectionError> {
        self.get_meals("filter.php", &[("a", area)]).await
    }

    /// Full record for one meal id, or `None` when the id is unknown.
    pub async fn lookup(&self, id: &str) -> Result<Option<RawMeal>, ApiConnectionError> {
        let meals = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    /// One random full record, or `None` on an empty envelope.
    pub async fn random(&self) -> Result<Option<RawMeal>, ApiConnectionError> {
        let meals = self.get_meals("random.php", &[]).await?;
        Ok(meals.into_iter().next())
    }

    /// Full records matching a free-text search.
    pub async fn search(&self, term: &str) -> Result<Vec<RawMeal>, ApiConnectionError> {
        self.get_meals("search.php", &[("s", term)]).await
    }

    /// Filter by cuisine, then resolve the first `limit` summaries into full
    /// records. Any failing lookup fails the whole batch.
    pub async fn fetch_cuisine(
        &self,
        area: &str,
        limit: usize,
    ) -> Result<Vec<RawMeal>, ApiConnectionError> {
        let summaries = self.filter_by_cuisine(area).await?;
        let mut detailed = Vec::new();
        for summary in summaries.into_iter().take(limit) {
            if let Some(meal) = self.lookup(&summary.id).await? {
                detailed.push(meal);
            }
        }
        debug!(area = %area, count = detailed.len(), "resolved cuisine batch");
        Ok(detailed)
    }

    /// `count` independent random fetches. Empty envelopes are skipped;
    /// transport errors abort the batch.
    pub async fn fetch_random(&self, count: usize) -> Result<Vec<RawMeal>, ApiConnectionError> {
        let mut meals = Vec::new();
        for _ in 0..count {
            if let Some(meal) = self.random().await? {
                meals.push(meal);
            }
        }
        debug!(count = meals.len(), "resolved random batch");
        Ok(meals)
    }
}
