use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Player endpoints
        .route("/api/players", get(handlers::list_players))
        .route("/api/players/:id/stats", get(handlers::get_player_stats))
        .route(
            "/api/players/:id/suggestions",
            get(handlers::get_player_suggestions),
        )
        // System endpoints
        .route("/health", get(handlers::health_handler))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
