use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, warn};

use crate::{
    api::dtos::{
        ErrorResponse, LocationsResponse, ScrapeAllResponse, ScrapeResponse, SearchQuery,
        SearchResponse,
    },
    app_state::AppState,
    service::ScrapeError,
};

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = match &self {
            ScrapeError::InvalidLocation { .. } => StatusCode::BAD_REQUEST,
            ScrapeError::FetchFailed { .. } => StatusCode::BAD_GATEWAY,
        };
        warn!(%status, error = %self, "nutrition request failed");

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn list_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    let locations: Vec<String> = state
        .service
        .available_locations()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(LocationsResponse {
        total_count: locations.len(),
        locations,
    })
}

pub async fn scrape_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<ScrapeResponse>, ScrapeError> {
    let nutrition_data = state.service.scrape_location(&location).await?;

    Ok(Json(ScrapeResponse {
        location,
        items_count: nutrition_data.len(),
        nutrition_data,
        scraped_at: Utc::now(),
    }))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ScrapeError> {
    let nutrition_items = state
        .service
        .search(&query.food_name, query.location())
        .await?;

    Ok(Json(SearchResponse {
        location: query.location().map(str::to_string),
        results_count: nutrition_items.len(),
        food_name: query.food_name,
        nutrition_items,
    }))
}

pub async fn scrape_all(State(state): State<AppState>) -> Json<ScrapeAllResponse> {
    let menus = state.service.scrape_all_locations().await;

    let locations_scraped = menus.len();
    let total_items = menus.iter().map(|menu| menu.items.len()).sum();
    info!(locations_scraped, total_items, "scraped every location");

    Json(ScrapeAllResponse {
        locations_scraped,
        total_items,
        data: menus
            .into_iter()
            .map(|menu| (menu.location, menu.items))
            .collect(),
    })
}
