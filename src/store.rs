//! Per-screen fetch-state stores.
//!
//! Each screen owns one [`FetchState`] value driven by a store: callers
//! send intents, the store runs the matching API operation as an
//! independent task and republishes the resulting state through a watch
//! channel. One generic container ([`FetchStore`]) is instantiated three
//! ways - categories, meals-by-category, and meal detail.

pub mod categories;
pub mod fetch_state;
pub mod fetch_store;
pub mod meal_detail;
pub mod meals;

pub use categories::{CategoriesOp, CategoriesStore};
pub use fetch_state::{FetchState, IdentityEq};
pub use fetch_store::{FetchOperation, FetchStore, Intent};
pub use meal_detail::{MealDetailOp, MealDetailStore, MEAL_NOT_FOUND};
pub use meals::{MealsOp, MealsStore};
