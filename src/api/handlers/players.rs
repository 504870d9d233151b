use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use crate::api::{state::AppState, types::*};
use crate::domain::{PlayerProfile, PlayerRecord, SuggestionRecord};
use crate::strategy::PlayerAnalysis;

/// GET /api/players
pub async fn list_players(
    State(state): State<AppState>,
) -> std::result::Result<Json<ApiResponse<Vec<PlayerProfile>>>, ApiError> {
    let players = state.provider.players().await.map_err(|e| {
        error!(error = %e, "failed to list players");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load players")
    })?;

    Ok(Json(ApiResponse::ok(players).with_timestamp()))
}

/// GET /api/players/:id/stats
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<Json<ApiResponse<PlayerAnalysis>>, ApiError> {
    let record = load_player(&state, &id).await?;
    let analysis = state.engine.analyze(&record);

    info!(
        player_id = record.id(),
        suggestions = analysis.suggestions.len(),
        trend = %analysis.trend,
        "served player stats"
    );
    Ok(Json(ApiResponse::ok(analysis)))
}

/// GET /api/players/:id/suggestions
pub async fn get_player_suggestions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<Json<ApiResponse<Vec<SuggestionRecord>>>, ApiError> {
    let record = load_player(&state, &id).await?;
    let suggestions = state.engine.suggest(&record.snapshot);

    info!(
        player_id = record.id(),
        suggestions = suggestions.len(),
        "served player suggestions"
    );
    Ok(Json(ApiResponse::ok(suggestions)))
}

async fn load_player(state: &AppState, raw_id: &str) -> std::result::Result<PlayerRecord, ApiError> {
    let id: u32 = raw_id
        .trim()
        .parse()
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, format!("Invalid player id: {}", raw_id)))?;

    match state.provider.player(id).await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(api_error(StatusCode::NOT_FOUND, "Player not found")),
        Err(e) => {
            error!(player_id = id, error = %e, "failed to load player");
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load player",
            ))
        }
    }
}
