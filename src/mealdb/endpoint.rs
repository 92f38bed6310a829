//! Logical endpoints of TheMealDB JSON API.

/// Production base URL for TheMealDB JSON API.
pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// A logical API request, rendered to a full URL against a base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// All recipe categories.
    Categories,
    /// Meal summaries filtered by category name.
    Meals { category: String },
    /// One meal's full record by id.
    MealDetail { id: String },
}

impl Endpoint {
    /// Render the request URL against `base_url`.
    ///
    /// Query values are interpolated verbatim, without percent-encoding;
    /// callers pass category names and meal ids exactly as returned by the
    /// API.
    pub fn url(&self, base_url: &str) -> String {
        match self {
            Endpoint::Categories => format!("{base_url}/categories.php"),
            Endpoint::Meals { category } => format!("{base_url}/filter.php?c={category}"),
            Endpoint::MealDetail { id } => format!("{base_url}/lookup.php?i={id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_url() {
        assert_eq!(
            Endpoint::Categories.url(MEALDB_BASE_URL),
            "https://www.themealdb.com/api/json/v1/1/categories.php"
        );
    }

    #[test]
    fn meals_url_carries_category_query() {
        let endpoint = Endpoint::Meals {
            category: "Chicken".to_string(),
        };
        assert_eq!(
            endpoint.url(MEALDB_BASE_URL),
            "https://www.themealdb.com/api/json/v1/1/filter.php?c=Chicken"
        );
    }

    #[test]
    fn meal_detail_url_carries_id_query() {
        let endpoint = Endpoint::MealDetail {
            id: "52772".to_string(),
        };
        assert_eq!(
            endpoint.url(MEALDB_BASE_URL),
            "https://www.themealdb.com/api/json/v1/1/lookup.php?i=52772"
        );
    }

    #[test]
    fn category_values_are_not_encoded() {
        let endpoint = Endpoint::Meals {
            category: "Side Dish".to_string(),
        };
        assert!(endpoint.url(MEALDB_BASE_URL).contains("c=Side Dish"));
    }
}
