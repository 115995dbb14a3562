pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, health::health_check};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/nutrition/locations", get(handlers::list_locations))
        .route("/nutrition/scrape/{location}", get(handlers::scrape_location))
        .route("/nutrition/scrape-all", post(handlers::scrape_all))
        .route("/nutrition/search", get(handlers::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
