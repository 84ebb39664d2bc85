use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Create the API application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))

        // Reference data
        .route("/api/cities", get(handlers::list_cities))
        .route("/api/cities/locations", get(handlers::list_city_locations))
        .route("/api/commodities", get(handlers::list_commodities))

        // Optimization
        .route("/api/optimize-transport", post(handlers::optimize_transport))

        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
