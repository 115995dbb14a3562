use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("unknown location '{requested}', available locations: {}", .valid.join(", "))]
    InvalidLocation {
        requested: String,
        valid: Vec<String>,
    },

    #[error("failed to fetch menu for {location}: {source}")]
    FetchFailed {
        location: String,
        #[source]
        source: FetchError,
    },
}

impl ScrapeError {
    pub fn invalid_location(requested: &str) -> Self {
        Self::InvalidLocation {
            requested: requested.to_string(),
            valid: crate::locations::keys()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
