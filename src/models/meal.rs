use serde::{Deserialize, Serialize};

use super::Identity;

/// Response envelope for the filter endpoint.
///
/// The backend returns `{"meals": null}` for a category with no matches;
/// the client maps that to an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealsResponse {
    pub meals: Option<Vec<Meal>>,
}

/// A meal summary from a category listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

impl Identity for Meal {
    fn identity(&self) -> &str {
        &self.id
    }
}
