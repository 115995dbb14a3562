//! Location-aware entry points: resolve a dining location, fetch its menu
//! through a [`PageSource`] and run the extraction pipeline.

pub mod errors;

pub use errors::ScrapeError;

use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use url::Url;

use crate::{
    config::Config,
    fetcher::{FetchError, HttpPageSource, PageSource},
    locations::{self, DINING_LOCATIONS},
    nutrition::{self, NutritionRecord},
};

/// Records scraped from one location during a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMenu {
    pub location: String,
    pub items: Vec<NutritionRecord>,
}

#[derive(Clone)]
pub struct NutritionService {
    source: Arc<dyn PageSource>,
    base_url: Url,
}

impl NutritionService {
    pub fn new(source: Arc<dyn PageSource>, base_url: Url) -> Self {
        Self { source, base_url }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let source = HttpPageSource::from_config(config)?;
        Ok(Self::new(Arc::new(source), config.menu_base_url().clone()))
    }

    pub fn available_locations(&self) -> Vec<&'static str> {
        locations::keys()
    }

    /// Fetch and extract the menu of one location.
    #[instrument(skip(self))]
    pub async fn scrape_location(
        &self,
        location: &str,
    ) -> Result<Vec<NutritionRecord>, ScrapeError> {
        let entry =
            locations::find(location).ok_or_else(|| ScrapeError::invalid_location(location))?;

        let fetch_failed = |source: FetchError| ScrapeError::FetchFailed {
            location: entry.key.to_string(),
            source,
        };

        let url = entry
            .menu_url(&self.base_url)
            .map_err(|e| fetch_failed(e.into()))?;
        info!(%url, "scraping nutrition data");

        let html = self.source.fetch_page(&url).await.map_err(fetch_failed)?;
        let records = nutrition::scrape_document(&html, entry.key);

        info!(count = records.len(), "scraped nutrition items");
        Ok(records)
    }

    /// Scrape every location in turn. A location that fails to load is
    /// reported with no items instead of aborting the sweep.
    pub async fn scrape_all_locations(&self) -> Vec<LocationMenu> {
        let mut menus = Vec::with_capacity(DINING_LOCATIONS.len());

        for location in DINING_LOCATIONS {
            let items = match self.scrape_location(location.key).await {
                Ok(items) => items,
                Err(err) => {
                    error!(location = location.key, error = %err, "failed to scrape location");
                    Vec::new()
                }
            };
            menus.push(LocationMenu {
                location: location.key.to_string(),
                items,
            });
        }

        menus
    }

    /// Records whose name contains `term`, ignoring case.
    ///
    /// With a `location` only that menu is searched. An unknown location is
    /// an error, but a menu that fails to load is logged and yields no
    /// matches, the same as in the all-locations search. Matches from
    /// different locations are never merged, even when the names agree.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        term: &str,
        location: Option<&str>,
    ) -> Result<Vec<NutritionRecord>, ScrapeError> {
        if let Some(location) = location {
            return match self.scrape_location(location).await {
                Ok(records) => Ok(filter_by_name(records, term)),
                Err(err @ ScrapeError::InvalidLocation { .. }) => Err(err),
                Err(err) => {
                    error!(location, error = %err, "search failed for location");
                    Ok(Vec::new())
                }
            };
        }

        let mut results = Vec::new();
        for location in DINING_LOCATIONS {
            match self.scrape_location(location.key).await {
                Ok(records) => results.extend(filter_by_name(records, term)),
                Err(err) => {
                    warn!(location = location.key, error = %err, "skipping location in search")
                }
            }
        }

        info!(count = results.len(), "search finished");
        Ok(results)
    }
}

pub fn filter_by_name(records: Vec<NutritionRecord>, term: &str) -> Vec<NutritionRecord> {
    records
        .into_iter()
        .filter(|record| record.name_matches(term))
        .collect()
}
