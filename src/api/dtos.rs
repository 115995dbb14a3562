use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::nutrition::NutritionRecord;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
    pub total_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub location: String,
    pub items_count: usize,
    pub nutrition_data: Vec<NutritionRecord>,
    pub scraped_at: DateTime<Utc>,
}

/// Every location's records keyed by location; failed locations map to an
/// empty list.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrapeAllResponse {
    pub locations_scraped: usize,
    pub total_items: usize,
    pub data: BTreeMap<String, Vec<NutritionRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub food_name: String,
    pub location: Option<String>,
}

impl SearchQuery {
    /// Blank `location` parameters mean "all locations".
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|location| !location.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub food_name: String,
    pub location: Option<String>,
    pub results_count: usize,
    pub nutrition_items: Vec<NutritionRecord>,
}
