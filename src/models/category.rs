use serde::{Deserialize, Serialize};

use super::Identity;

/// Response envelope for the categories endpoint.
///
/// Unlike the filter and lookup endpoints, the backend never returns null
/// here: an empty listing decodes to an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// A recipe category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb")]
    pub thumbnail_url: String,
    #[serde(rename = "strCategoryDescription")]
    pub description: String,
}

impl Identity for Category {
    fn identity(&self) -> &str {
        &self.id
    }
}
