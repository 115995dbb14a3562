//! Nutrition extraction from dining-menu markup.
//!
//! Two independent strategies run over the same parsed document:
//! [`attributes`] reads `data-*` tagged menu entries and [`text`] mines
//! card layouts with regular expressions. Their outputs meet only in
//! [`merge`], which deduplicates and stamps per-scrape context.

pub mod attributes;
pub mod dom;
pub mod errors;
pub mod merge;
pub mod model;
pub mod numeric;
pub mod text;

#[cfg(test)]
mod tests;

pub use errors::EntryError;
pub use model::{DEFAULT_MEAL_CATEGORY, NutritionRecord};

use scraper::Html;
use tracing::debug;

/// Run both extractors over `html`, attribute results first. The output is
/// not deduplicated and carries no location.
pub fn extract_candidates(html: &str) -> Vec<NutritionRecord> {
    let document = Html::parse_document(html);

    let mut candidates = attributes::extract(&document);
    let tagged = candidates.len();
    candidates.extend(text::extract(&document));
    debug!(
        tagged,
        text = candidates.len() - tagged,
        "extracted candidate records"
    );

    candidates
}

/// Full pipeline for one menu page: extract, deduplicate and stamp with
/// `location` and the default meal category.
pub fn scrape_document(html: &str, location: &str) -> Vec<NutritionRecord> {
    merge::merge(extract_candidates(html), location, DEFAULT_MEAL_CATEGORY)
}
