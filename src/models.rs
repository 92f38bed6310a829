//! Typed payloads for TheMealDB endpoints.
//!
//! Each type decodes directly from the backend's JSON field names
//! (`idMeal`, `strMeal`, ...). Values are immutable once decoded; identity
//! is the backend id.

pub mod category;
pub mod meal;
pub mod meal_detail;

pub use category::{CategoriesResponse, Category};
pub use meal::{Meal, MealsResponse};
pub use meal_detail::{Ingredient, MealDetail, MealDetailResponse};

/// Backend identity of an entity.
///
/// Loaded screen states compare payloads by these ids only, never by full
/// field equality.
pub trait Identity {
    fn identity(&self) -> &str;
}
