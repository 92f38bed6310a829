//! Meal-detail screen store.

use std::sync::Arc;

use async_trait::async_trait;

use super::fetch_store::{FetchOperation, FetchStore, Intent};
use crate::models::MealDetail;
use crate::traits::RecipeApi;

/// Error message shown when a lookup succeeds but matches no record.
pub const MEAL_NOT_FOUND: &str = "Meal not found";

/// Fetch operation behind the detail screen: meal id in, one full record
/// out.
pub struct MealDetailOp {
    api: Arc<dyn RecipeApi>,
}

#[async_trait]
impl FetchOperation for MealDetailOp {
    type Param = String;
    type Output = MealDetail;

    fn name(&self) -> &'static str {
        "meal_detail"
    }

    async fn fetch(&self, id: &String) -> Result<MealDetail, String> {
        // A successful lookup that matches nothing is an error state for
        // this screen, never an empty loaded state.
        match self.api.fetch_meal_detail(id).await {
            Ok(Some(detail)) => Ok(detail),
            Ok(None) => Err(MEAL_NOT_FOUND.to_string()),
            Err(err) => Err(err.to_string()),
        }
    }
}

/// Store for the meal-detail screen.
pub type MealDetailStore = FetchStore<MealDetailOp>;

impl MealDetailStore {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        FetchStore::with_operation(MealDetailOp { api }, None)
    }

    /// Load the record for `id` and record it for replay.
    pub fn load(&self, id: impl Into<String>) {
        self.send(Intent::Load(id.into()));
    }

    /// Reload the last requested id.
    pub fn retry(&self) {
        self.send(Intent::Retry);
    }
}
