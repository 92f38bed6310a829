use serde::{Deserialize, Serialize};

use super::Identity;

/// Response envelope for the lookup endpoint.
///
/// The backend returns `{"meals": null}` for an unknown id; a known id
/// yields a single-element list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDetailResponse {
    pub meals: Option<Vec<MealDetail>>,
}

/// One (ingredient, measure) pair assembled from a detail record's slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// A meal's full record from the lookup endpoint.
///
/// The backend stores ingredients and measures as 20 parallel indexed
/// fields; [`MealDetail::ingredients`] folds them into an ordered list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags_raw: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube_url: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source_url: Option<String>,

    #[serde(rename = "strIngredient1", default)]
    pub ingredient1: Option<String>,
    #[serde(rename = "strIngredient2", default)]
    pub ingredient2: Option<String>,
    #[serde(rename = "strIngredient3", default)]
    pub ingredient3: Option<String>,
    #[serde(rename = "strIngredient4", default)]
    pub ingredient4: Option<String>,
    #[serde(rename = "strIngredient5", default)]
    pub ingredient5: Option<String>,
    #[serde(rename = "strIngredient6", default)]
    pub ingredient6: Option<String>,
    #[serde(rename = "strIngredient7", default)]
    pub ingredient7: Option<String>,
    #[serde(rename = "strIngredient8", default)]
    pub ingredient8: Option<String>,
    #[serde(rename = "strIngredient9", default)]
    pub ingredient9: Option<String>,
    #[serde(rename = "strIngredient10", default)]
    pub ingredient10: Option<String>,
    #[serde(rename = "strIngredient11", default)]
    pub ingredient11: Option<String>,
    #[serde(rename = "strIngredient12", default)]
    pub ingredient12: Option<String>,
    #[serde(rename = "strIngredient13", default)]
    pub ingredient13: Option<String>,
    #[serde(rename = "strIngredient14", default)]
    pub ingredient14: Option<String>,
    #[serde(rename = "strIngredient15", default)]
    pub ingredient15: Option<String>,
    #[serde(rename = "strIngredient16", default)]
    pub ingredient16: Option<String>,
    #[serde(rename = "strIngredient17", default)]
    pub ingredient17: Option<String>,
    #[serde(rename = "strIngredient18", default)]
    pub ingredient18: Option<String>,
    #[serde(rename = "strIngredient19", default)]
    pub ingredient19: Option<String>,
    #[serde(rename = "strIngredient20", default)]
    pub ingredient20: Option<String>,

    #[serde(rename = "strMeasure1", default)]
    pub measure1: Option<String>,
    #[serde(rename = "strMeasure2", default)]
    pub measure2: Option<String>,
    #[serde(rename = "strMeasure3", default)]
    pub measure3: Option<String>,
    #[serde(rename = "strMeasure4", default)]
    pub measure4: Option<String>,
    #[serde(rename = "strMeasure5", default)]
    pub measure5: Option<String>,
    #[serde(rename = "strMeasure6", default)]
    pub measure6: Option<String>,
    #[serde(rename = "strMeasure7", default)]
    pub measure7: Option<String>,
    #[serde(rename = "strMeasure8", default)]
    pub measure8: Option<String>,
    #[serde(rename = "strMeasure9", default)]
    pub measure9: Option<String>,
    #[serde(rename = "strMeasure10", default)]
    pub measure10: Option<String>,
    #[serde(rename = "strMeasure11", default)]
    pub measure11: Option<String>,
    #[serde(rename = "strMeasure12", default)]
    pub measure12: Option<String>,
    #[serde(rename = "strMeasure13", default)]
    pub measure13: Option<String>,
    #[serde(rename = "strMeasure14", default)]
    pub measure14: Option<String>,
    #[serde(rename = "strMeasure15", default)]
    pub measure15: Option<String>,
    #[serde(rename = "strMeasure16", default)]
    pub measure16: Option<String>,
    #[serde(rename = "strMeasure17", default)]
    pub measure17: Option<String>,
    #[serde(rename = "strMeasure18", default)]
    pub measure18: Option<String>,
    #[serde(rename = "strMeasure19", default)]
    pub measure19: Option<String>,
    #[serde(rename = "strMeasure20", default)]
    pub measure20: Option<String>,
}

impl MealDetail {
    /// Fold the 20 ingredient/measure slots into an ordered list.
    ///
    /// A slot is included only when its ingredient is present and non-blank
    /// after trimming; the paired measure falls back to the empty string
    /// when absent. Values are carried through untrimmed.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let slots: [(&Option<String>, &Option<String>); 20] = [
            (&self.ingredient1, &self.measure1),
            (&self.ingredient2, &self.measure2),
            (&self.ingredient3, &self.measure3),
            (&self.ingredient4, &self.measure4),
            (&self.ingredient5, &self.measure5),
            (&self.ingredient6, &self.measure6),
            (&self.ingredient7, &self.measure7),
            (&self.ingredient8, &self.measure8),
            (&self.ingredient9, &self.measure9),
            (&self.ingredient10, &self.measure10),
            (&self.ingredient11, &self.measure11),
            (&self.ingredient12, &self.measure12),
            (&self.ingredient13, &self.measure13),
            (&self.ingredient14, &self.measure14),
            (&self.ingredient15, &self.measure15),
            (&self.ingredient16, &self.measure16),
            (&self.ingredient17, &self.measure17),
            (&self.ingredient18, &self.measure18),
            (&self.ingredient19, &self.measure19),
            (&self.ingredient20, &self.measure20),
        ];

        let mut result = Vec::new();
        for (ingredient, measure) in slots {
            let Some(name) = ingredient else { continue };
            if name.trim().is_empty() {
                continue;
            }
            result.push(Ingredient {
                name: name.clone(),
                measure: measure.clone().unwrap_or_default(),
            });
        }
        result
    }

    /// Split the raw comma-separated tags into trimmed elements.
    ///
    /// Returns an empty list when the record carries no tags. Empty elements
    /// between commas are kept, only trimmed.
    pub fn tags(&self) -> Vec<String> {
        match &self.tags_raw {
            Some(raw) => raw.split(',').map(|tag| tag.trim().to_string()).collect(),
            None => Vec::new(),
        }
    }
}

impl Identity for MealDetail {
    fn identity(&self) -> &str {
        &self.id
    }
}
