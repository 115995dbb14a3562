//! Card-style layouts where nutrition facts only appear in free text,
//! e.g. `"Veggie Wrap · 450 cal · 8g protein"`.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::nutrition::{
    attributes::{self, CORE_FIELDS},
    dom::{class_matches, element_text},
    errors::EntryError,
    model::{NutritionRecord, is_valid_name},
};

static CONTAINER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div, article").unwrap());

static NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6, div, span").unwrap());

static CONTAINER_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)card|item|dish|food|menu-item").unwrap());

static NAME_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name|title|dish|food").unwrap());

static CALORIES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*cal").unwrap());

static PROTEIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g?\s*protein").unwrap());

static FAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g?\s*fat").unwrap());

static CARBS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g?\s*carb").unwrap());

static SERVING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)serving.*?(\d+(?:\.\d+)?)\s*(oz|g|ml|cup|tbsp)").unwrap()
});

/// Extract records from card containers, followed by any attribute-tagged
/// entries found in the same document.
///
/// The trailing attribute pass means this output overlaps with
/// [`attributes::extract`]; the merge stage resolves the duplicates.
pub fn extract(document: &Html) -> Vec<NutritionRecord> {
    let mut records = Vec::new();

    for (index, container) in document
        .select(&CONTAINER_SELECTOR)
        .filter(|el| class_matches(*el, &CONTAINER_CLASS))
        .enumerate()
    {
        match parse_card(container) {
            Ok(record) => records.push(record),
            Err(EntryError::MissingName | EntryError::NoSubstantiveData) => {}
            Err(err) => warn!(index, error = %err, "skipping malformed card"),
        }
    }

    let card_count = records.len();
    records.extend(attributes::extract_fields(document, CORE_FIELDS));
    if records.len() > card_count {
        debug!(
            cards = card_count,
            tagged = records.len() - card_count,
            "text extractor picked up attribute-tagged entries"
        );
    }

    records
}

fn parse_card(container: ElementRef<'_>) -> Result<NutritionRecord, EntryError> {
    let name_element = container
        .select(&NAME_SELECTOR)
        .find(|el| class_matches(*el, &NAME_CLASS))
        .ok_or(EntryError::MissingName)?;

    let name = element_text(name_element);
    if !is_valid_name(&name) {
        return Err(EntryError::NameTooShort(name));
    }

    // Line breaks between block elements are kept so `serving.*?` stays on
    // the line where "serving" appears.
    let text: String = container.text().collect();
    let mut record = NutritionRecord::named(name);

    record.calories = capture(&CALORIES, &text).and_then(|raw| match raw.parse::<u32>() {
        Ok(calories) => Some(calories),
        Err(err) => {
            warn!(name = %record.name, raw, error = %err, "calorie count out of range");
            None
        }
    });
    record.protein = capture_decimal(&PROTEIN, &text);
    record.total_fat = capture_decimal(&FAT, &text);
    record.total_carbohydrates = capture_decimal(&CARBS, &text);
    record.serving_size = SERVING
        .captures(&text)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]));

    if !record.has_substantive_data() {
        return Err(EntryError::NoSubstantiveData);
    }

    Ok(record)
}

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn capture_decimal(pattern: &Regex, text: &str) -> Option<f64> {
    capture(pattern, text).and_then(|raw| raw.parse::<f64>().ok())
}
