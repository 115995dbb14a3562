use std::collections::HashSet;

use crate::nutrition::model::NutritionRecord;

/// Keep the first record for each case-insensitive name and stamp the
/// survivors with `location` (human formatted) and `meal_category`.
///
/// Callers pass attribute-based records ahead of text-pattern records, so
/// the more reliable source wins a name collision.
pub fn merge(
    candidates: impl IntoIterator<Item = NutritionRecord>,
    location: &str,
    meal_category: &str,
) -> Vec<NutritionRecord> {
    let display_location = format_location(location);
    let mut seen = HashSet::new();

    candidates
        .into_iter()
        .filter(|record| seen.insert(record.dedup_key()))
        .map(|mut record| {
            record.location = Some(display_location.clone());
            record.meal_category = Some(meal_category.to_string());
            record
        })
        .collect()
}

/// `"peoples_organic_coffee"` becomes `"Peoples Organic Coffee"`: underscores
/// turn into spaces and every word is title-cased.
pub fn format_location(key: &str) -> String {
    let mut formatted = String::with_capacity(key.len());
    let mut previous_alphabetic = false;

    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if previous_alphabetic {
            formatted.extend(ch.to_lowercase());
        } else {
            formatted.extend(ch.to_uppercase());
        }
        previous_alphabetic = ch.is_alphabetic();
    }

    formatted
}
