//! Recipe lookup trait abstraction.

use async_trait::async_trait;

use crate::mealdb::NetworkError;
use crate::models::{Category, Meal, MealDetail};

/// The recipe lookup operations screen stores depend on.
///
/// Implementations include the production `mealdb::MealDbClient` and
/// `adapters::mock::MockRecipeApi` for tests. Every failure is one of the
/// closed [`NetworkError`] variants; implementations never surface any
/// other error type.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch all recipe categories. An empty listing is an empty list,
    /// never null.
    async fn fetch_categories(&self) -> Result<Vec<Category>, NetworkError>;

    /// Fetch the meal summaries for a category. A null listing maps to an
    /// empty list.
    async fn fetch_meals(&self, category: &str) -> Result<Vec<Meal>, NetworkError>;

    /// Fetch one meal's full record, or `None` when the id matches nothing.
    async fn fetch_meal_detail(&self, id: &str) -> Result<Option<MealDetail>, NetworkError>;
}
