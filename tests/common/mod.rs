//! Shared fixtures for integration tests.

#![allow(dead_code)]

use mealdeck::models::{Category, Meal, MealDetail};

/// Install a test subscriber so `RUST_LOG` controls store/client logging.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn beef_category() -> Category {
    Category {
        id: "1".to_string(),
        name: "Beef".to_string(),
        thumbnail_url: "https://www.themealdb.com/images/category/beef.png".to_string(),
        description: "Beef is the culinary name for meat from cattle.".to_string(),
    }
}

pub fn chicken_category() -> Category {
    Category {
        id: "2".to_string(),
        name: "Chicken".to_string(),
        thumbnail_url: "https://www.themealdb.com/images/category/chicken.png".to_string(),
        description: "Chicken is a type of domesticated fowl.".to_string(),
    }
}

pub fn categories() -> Vec<Category> {
    vec![beef_category(), chicken_category()]
}

pub fn teriyaki_meal() -> Meal {
    Meal {
        id: "52772".to_string(),
        name: "Teriyaki Chicken Casserole".to_string(),
        thumbnail_url: "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg"
            .to_string(),
    }
}

pub fn salmon_meal() -> Meal {
    Meal {
        id: "52773".to_string(),
        name: "Honey Teriyaki Salmon".to_string(),
        thumbnail_url: "https://www.themealdb.com/images/media/meals/xxyupu1468262513.jpg"
            .to_string(),
    }
}

pub fn meals() -> Vec<Meal> {
    vec![teriyaki_meal(), salmon_meal()]
}

/// Full detail record with tags and a handful of ingredient slots.
pub fn teriyaki_detail() -> MealDetail {
    MealDetail {
        id: "52772".to_string(),
        name: "Teriyaki Chicken Casserole".to_string(),
        category: Some("Chicken".to_string()),
        area: Some("Japanese".to_string()),
        instructions: Some("Preheat oven to 350F. Combine and bake.".to_string()),
        thumbnail_url: Some(
            "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg".to_string(),
        ),
        tags_raw: Some("Meat,Casserole".to_string()),
        youtube_url: Some("https://www.youtube.com/watch?v=4aZr5hZXP_s".to_string()),
        ingredient1: Some("soy sauce".to_string()),
        ingredient2: Some("water".to_string()),
        ingredient3: Some("brown sugar".to_string()),
        measure1: Some("3/4 cup".to_string()),
        measure2: Some("1/2 cup".to_string()),
        measure3: Some("1/4 cup".to_string()),
        ..MealDetail::default()
    }
}

/// Minimal detail record without tags or optional links.
pub fn plain_detail() -> MealDetail {
    MealDetail {
        id: "52773".to_string(),
        name: "Simple Dish".to_string(),
        category: Some("Miscellaneous".to_string()),
        ingredient1: Some("Rice".to_string()),
        measure1: Some("2 cups".to_string()),
        ..MealDetail::default()
    }
}
