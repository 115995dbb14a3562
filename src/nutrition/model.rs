use serde::{Deserialize, Serialize};

/// Meal category stamped on every record. Menu pages carry no meal-time
/// signal, so this is a fixed default rather than an inferred value.
pub const DEFAULT_MEAL_CATEGORY: &str = "Lunch";

/// Nutrition profile of a single menu item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub name: String,
    pub location: Option<String>,
    pub meal_category: Option<String>,
    pub serving_size: Option<String>,
    pub calories: Option<u32>,
    pub total_fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub trans_fat: Option<f64>,
    pub cholesterol_mg: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub total_carbohydrates: Option<f64>,
    pub dietary_fiber: Option<f64>,
    pub total_sugars: Option<f64>,
    pub protein: Option<f64>,
}

impl NutritionRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when at least one of calories, protein, total fat or total
    /// carbohydrates is present. A present zero counts.
    pub fn has_substantive_data(&self) -> bool {
        self.calories.is_some()
            || self.protein.is_some()
            || self.total_fat.is_some()
            || self.total_carbohydrates.is_some()
    }

    /// Lowercased name used as the deduplication key.
    pub fn dedup_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Names shorter than this are treated as noise.
pub const MIN_NAME_CHARS: usize = 2;

pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_CHARS
}
