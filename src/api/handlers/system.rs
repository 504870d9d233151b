use axum::{extract::State, Json};
use chrono::Utc;

use crate::api::{state::AppState, types::*};

/// GET /health -- liveness probe, also reports which data source is active
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        environment: state.environment.clone(),
        data_source: state.provider.source(),
        uptime_secs: state.uptime_seconds(),
    })
}
