//! HTTP client for TheMealDB API.
//!
//! `MealDbClient` turns a logical request into a decoded typed result or a
//! classified [`NetworkError`]. It performs plain GETs with a reusable
//! `reqwest::Client`, never retries, and leaves timeouts at the transport
//! default.

pub mod endpoint;
pub mod error;

pub use endpoint::{Endpoint, MEALDB_BASE_URL};
pub use error::NetworkError;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{
    CategoriesResponse, Category, Meal, MealDetail, MealDetailResponse, MealsResponse,
};
use crate::traits::RecipeApi;

/// Client for TheMealDB JSON API.
///
/// Holds the base URL and a reusable connection pool; carries no other
/// state between calls.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    client: reqwest::Client,
}

impl MealDbClient {
    /// Create a client against the production base URL.
    pub fn new() -> Self {
        Self::with_base_url(MEALDB_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL this client resolves endpoints against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and decode the JSON body into `T`.
    ///
    /// Classification precedence: URL construction, transport, HTTP status,
    /// body availability, payload shape.
    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, NetworkError> {
        let url = endpoint.url(&self.base_url);
        let parsed = reqwest::Url::parse(&url).map_err(|_| NetworkError::InvalidUrl)?;

        debug!(%url, "GET");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|err| NetworkError::Unknown(err.to_string()))?;

        let status = response.status().as_u16();
        if !(200..=299).contains(&status) {
            return Err(NetworkError::ServerError(status));
        }

        let body = response.bytes().await.map_err(|_| NetworkError::NoData)?;
        serde_json::from_slice(&body).map_err(|err| {
            debug!(error = %err, %url, "decode failed");
            NetworkError::Decoding
        })
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn fetch_categories(&self) -> Result<Vec<Category>, NetworkError> {
        let response: CategoriesResponse = self.fetch(Endpoint::Categories).await?;
        Ok(response.categories)
    }

    async fn fetch_meals(&self, category: &str) -> Result<Vec<Meal>, NetworkError> {
        let response: MealsResponse = self
            .fetch(Endpoint::Meals {
                category: category.to_string(),
            })
            .await?;
        Ok(response.meals.unwrap_or_default())
    }

    async fn fetch_meal_detail(&self, id: &str) -> Result<Option<MealDetail>, NetworkError> {
        let response: MealDetailResponse = self
            .fetch(Endpoint::MealDetail { id: id.to_string() })
            .await?;
        Ok(response.meals.and_then(|meals| meals.into_iter().next()))
    }
}
