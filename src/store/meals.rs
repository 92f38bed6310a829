//! Meals-by-category screen store.

use std::sync::Arc;

use async_trait::async_trait;

use super::fetch_store::{FetchOperation, FetchStore, Intent};
use crate::models::Meal;
use crate::traits::RecipeApi;

/// Fetch operation behind the meals screen: category name in, meal
/// summaries out. An empty listing is a valid loaded state.
pub struct MealsOp {
    api: Arc<dyn RecipeApi>,
}

#[async_trait]
impl FetchOperation for MealsOp {
    type Param = String;
    type Output = Vec<Meal>;

    fn name(&self) -> &'static str {
        "meals"
    }

    async fn fetch(&self, category: &String) -> Result<Vec<Meal>, String> {
        self.api
            .fetch_meals(category)
            .await
            .map_err(|err| err.to_string())
    }
}

/// Store for the meals-by-category screen.
pub type MealsStore = FetchStore<MealsOp>;

impl MealsStore {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        FetchStore::with_operation(MealsOp { api }, None)
    }

    /// Load the meals for `category` and record it for replay.
    pub fn load(&self, category: impl Into<String>) {
        self.send(Intent::Load(category.into()));
    }

    /// Reload the last requested category.
    pub fn retry(&self) {
        self.send(Intent::Retry);
    }
}
