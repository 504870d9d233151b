//! Per-player analysis view served by the API and CLI.

use serde::{Deserialize, Serialize};

use super::engine::SuggestionEngine;
use super::series::trend;
use crate::domain::{PlayerProfile, PlayerRecord, SeasonAverages, SuggestionRecord, Trend};

/// Suggestions plus the context a consumer renders next to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAnalysis {
    pub player: PlayerProfile,
    pub stats: SeasonAverages,
    pub recent_games: Vec<f64>,
    pub trend: Trend,
    pub suggestions: Vec<SuggestionRecord>,
}

impl SuggestionEngine {
    /// Score a player and attach their recent scoring trend
    pub fn analyze(&self, record: &PlayerRecord) -> PlayerAnalysis {
        let snapshot = &record.snapshot;
        PlayerAnalysis {
            player: record.profile.clone(),
            stats: snapshot.season_averages,
            recent_games: snapshot.recent_games.clone(),
            trend: trend(&snapshot.recent_games),
            suggestions: self.suggest(snapshot),
        }
    }
}
