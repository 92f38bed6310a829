//! Mock recipe API for testing.
//!
//! Each operation returns a scripted result and records its calls, so
//! store tests can verify which operation ran and with which parameter.
//!
//! # Example
//!
//! ```
//! use mealdeck::adapters::MockRecipeApi;
//! use mealdeck::mealdb::NetworkError;
//!
//! let api = MockRecipeApi::new();
//! api.set_meals(Err(NetworkError::ServerError(500)));
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::mealdb::NetworkError;
use crate::models::{Category, Meal, MealDetail};
use crate::traits::RecipeApi;

#[derive(Default)]
struct MockState {
    categories: Option<Result<Vec<Category>, NetworkError>>,
    meals: Option<Result<Vec<Meal>, NetworkError>>,
    meal_detail: Option<Result<Option<MealDetail>, NetworkError>>,
    categories_calls: usize,
    meals_calls: usize,
    meal_detail_calls: usize,
    last_meals_category: Option<String>,
    last_meal_detail_id: Option<String>,
}

/// Mock [`RecipeApi`] implementation with scripted responses.
///
/// Unscripted operations succeed with an empty payload (`[]` / `None`).
/// Scripted results persist until rescripted, so a test can fail a first
/// load and succeed the retry.
#[derive(Clone, Default)]
pub struct MockRecipeApi {
    state: Arc<Mutex<MockState>>,
}

impl MockRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the categories result.
    pub fn set_categories(&self, result: Result<Vec<Category>, NetworkError>) {
        self.state.lock().unwrap().categories = Some(result);
    }

    /// Script the meals result.
    pub fn set_meals(&self, result: Result<Vec<Meal>, NetworkError>) {
        self.state.lock().unwrap().meals = Some(result);
    }

    /// Script the meal-detail result.
    pub fn set_meal_detail(&self, result: Result<Option<MealDetail>, NetworkError>) {
        self.state.lock().unwrap().meal_detail = Some(result);
    }

    /// Number of `fetch_categories` calls so far.
    pub fn categories_calls(&self) -> usize {
        self.state.lock().unwrap().categories_calls
    }

    /// Number of `fetch_meals` calls so far.
    pub fn meals_calls(&self) -> usize {
        self.state.lock().unwrap().meals_calls
    }

    /// Number of `fetch_meal_detail` calls so far.
    pub fn meal_detail_calls(&self) -> usize {
        self.state.lock().unwrap().meal_detail_calls
    }

    /// Category passed to the most recent `fetch_meals` call.
    pub fn last_meals_category(&self) -> Option<String> {
        self.state.lock().unwrap().last_meals_category.clone()
    }

    /// Id passed to the most recent `fetch_meal_detail` call.
    pub fn last_meal_detail_id(&self) -> Option<String> {
        self.state.lock().unwrap().last_meal_detail_id.clone()
    }
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn fetch_categories(&self) -> Result<Vec<Category>, NetworkError> {
        let mut state = self.state.lock().unwrap();
        state.categories_calls += 1;
        state.categories.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_meals(&self, category: &str) -> Result<Vec<Meal>, NetworkError> {
        let mut state = self.state.lock().unwrap();
        state.meals_calls += 1;
        state.last_meals_category = Some(category.to_string());
        state.meals.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_meal_detail(&self, id: &str) -> Result<Option<MealDetail>, NetworkError> {
        let mut state = self.state.lock().unwrap();
        state.meal_detail_calls += 1;
        state.last_meal_detail_id = Some(id.to_string());
        state.meal_detail.clone().unwrap_or_else(|| Ok(None))
    }
}
