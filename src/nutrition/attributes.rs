//! Menu entries that publish nutrition facts as `data-*` attributes on the
//! link inside each `li.lightbox-nutrition` element.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::nutrition::{
    dom::{element_text, non_empty_attr},
    errors::EntryError,
    model::{NutritionRecord, is_valid_name},
    numeric::{extract_number, parse_calories},
};

static ENTRY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.lightbox-nutrition").unwrap());

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// A nutrition attribute on the entry link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Calories,
    Protein,
    TotalFat,
    SaturatedFat,
    TransFat,
    Cholesterol,
    Sodium,
    TotalCarbohydrates,
    DietaryFiber,
    Sugars,
    ServingSize,
}

pub const ALL_FIELDS: &[Field] = &[
    Field::Calories,
    Field::Protein,
    Field::TotalFat,
    Field::SaturatedFat,
    Field::TransFat,
    Field::Cholesterol,
    Field::Sodium,
    Field::TotalCarbohydrates,
    Field::DietaryFiber,
    Field::Sugars,
    Field::ServingSize,
];

/// The subset read when the card extractor re-scans attribute entries.
pub const CORE_FIELDS: &[Field] = &[
    Field::Calories,
    Field::Protein,
    Field::TotalFat,
    Field::TotalCarbohydrates,
    Field::ServingSize,
];

impl Field {
    pub fn attribute(self) -> &'static str {
        match self {
            Field::Calories => "data-calories",
            Field::Protein => "data-protein",
            Field::TotalFat => "data-total-fat",
            Field::SaturatedFat => "data-sat-fat",
            Field::TransFat => "data-trans-fat",
            Field::Cholesterol => "data-cholesterol",
            Field::Sodium => "data-sodium",
            Field::TotalCarbohydrates => "data-total-carb",
            Field::DietaryFiber => "data-dietary-fiber",
            Field::Sugars => "data-sugars",
            Field::ServingSize => "data-serving-size",
        }
    }

    /// Store `raw` on the record. Values that fail to parse leave the field
    /// absent.
    fn apply(self, record: &mut NutritionRecord, raw: &str) {
        match self {
            Field::Calories => record.calories = parse_calories(raw),
            Field::ServingSize => record.serving_size = Some(raw.to_string()),
            Field::Protein => record.protein = extract_number(raw),
            Field::TotalFat => record.total_fat = extract_number(raw),
            Field::SaturatedFat => record.saturated_fat = extract_number(raw),
            Field::TransFat => record.trans_fat = extract_number(raw),
            Field::Cholesterol => record.cholesterol_mg = extract_number(raw),
            Field::Sodium => record.sodium_mg = extract_number(raw),
            Field::TotalCarbohydrates => record.total_carbohydrates = extract_number(raw),
            Field::DietaryFiber => record.dietary_fiber = extract_number(raw),
            Field::Sugars => record.total_sugars = extract_number(raw),
        }
    }
}

/// Extract every attribute-tagged entry in document order.
pub fn extract(document: &Html) -> Vec<NutritionRecord> {
    extract_fields(document, ALL_FIELDS)
}

/// Like [`extract`] but only reads `fields` from each entry.
pub fn extract_fields(document: &Html, fields: &[Field]) -> Vec<NutritionRecord> {
    let mut records = Vec::new();

    for (index, entry) in document.select(&ENTRY_SELECTOR).enumerate() {
        match parse_entry(entry, fields) {
            Ok(record) => records.push(record),
            Err(EntryError::NoSubstantiveData) => {
                debug!(index, "attribute entry has no nutrition values")
            }
            Err(err) => warn!(index, error = %err, "skipping attribute entry"),
        }
    }

    records
}

fn parse_entry(entry: ElementRef<'_>, fields: &[Field]) -> Result<NutritionRecord, EntryError> {
    let link = entry
        .select(&LINK_SELECTOR)
        .next()
        .ok_or(EntryError::MissingLink)?;

    let name = non_empty_attr(link, "data-dish-name")
        .map(str::to_string)
        .unwrap_or_else(|| element_text(link));
    if !is_valid_name(&name) {
        return Err(EntryError::NameTooShort(name));
    }

    let mut record = NutritionRecord::named(name);
    for field in fields {
        if let Some(raw) = non_empty_attr(link, field.attribute()) {
            field.apply(&mut record, raw);
        }
    }

    if !record.has_substantive_data() {
        return Err(EntryError::NoSubstantiveData);
    }

    Ok(record)
}
