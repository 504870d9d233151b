//! SportsDataIO NBA REST adapter.
//!
//! Normalizes player and per-game payloads into [`PlayerRecord`]s. A
//! snapshot is built from the player's most recent games: season averages are
//! the per-stat means over that window, and the recent series is each game's
//! points in chronological order.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{DataSource, StatsProvider};
use crate::domain::{PlayerProfile, PlayerRecord, PlayerStatSnapshot, SeasonAverages};
use crate::error::{PropError, Result};
use crate::strategy::series::mean;

/// Upstream player list is truncated to this many entries
pub const MAX_LISTED_PLAYERS: usize = 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiPlayer {
    #[serde(rename = "PlayerID")]
    pub player_id: u32,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl ApiPlayer {
    fn into_profile(self) -> PlayerProfile {
        let name = [self.first_name, self.last_name]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        PlayerProfile {
            id: self.player_id,
            name,
            team: self.team.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiGameStats {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// Game date, ISO-8601
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub assists: Option<f64>,
    #[serde(default)]
    pub rebounds: Option<f64>,
    #[serde(default)]
    pub three_pointers_made: Option<f64>,
}

#[derive(Clone)]
pub struct SportsDataClient {
    http: Client,
    base_url: String,
    api_key: String,
    recent_games: usize,
}

impl SportsDataClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
        recent_games: usize,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent("propline/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| PropError::Internal(format!("failed to build SportsDataIO client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            recent_games: recent_games.max(1),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, "SportsDataIO request");

        let resp = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(PropError::Upstream(format!(
                "SportsDataIO GET {} failed: status={}",
                path, status
            )));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl StatsProvider for SportsDataClient {
    fn source(&self) -> DataSource {
        DataSource::Live
    }

    async fn players(&self) -> Result<Vec<PlayerProfile>> {
        let players: Vec<ApiPlayer> = self.get_json("/scores/json/Players").await?;
        Ok(profiles_from_players(players))
    }

    async fn player(&self, id: u32) -> Result<Option<PlayerRecord>> {
        let games: Vec<ApiGameStats> = self
            .get_json(&format!("/stats/json/PlayerGameStatsByPlayer/{}", id))
            .await?;
        Ok(record_from_games(id, games, self.recent_games))
    }
}

/// Map the upstream roster, keeping the first [`MAX_LISTED_PLAYERS`] entries
pub fn profiles_from_players(players: Vec<ApiPlayer>) -> Vec<PlayerProfile> {
    players
        .into_iter()
        .take(MAX_LISTED_PLAYERS)
        .map(ApiPlayer::into_profile)
        .collect()
}

/// Build a record from a player's game log, keeping the latest `window` games.
///
/// `None` for an empty log.
pub fn record_from_games(
    id: u32,
    mut games: Vec<ApiGameStats>,
    window: usize,
) -> Option<PlayerRecord> {
    if games.is_empty() {
        return None;
    }

    // Undated games sort first and fall out of the window first
    games.sort_by(|a, b| a.day.cmp(&b.day));
    let start = games.len().saturating_sub(window);
    let recent = &games[start..];

    let averages = SeasonAverages::new(
        window_mean(recent, |g| g.points),
        window_mean(recent, |g| g.assists),
        window_mean(recent, |g| g.rebounds),
        window_mean(recent, |g| g.three_pointers_made),
    );
    let recent_points = recent.iter().map(|g| g.points.unwrap_or(0.0)).collect();

    let latest = recent.last()?;
    let profile = PlayerProfile {
        id,
        name: latest
            .name
            .clone()
            .unwrap_or_else(|| "Unknown Player".to_string()),
        team: latest
            .team
            .clone()
            .unwrap_or_else(|| "Unknown Team".to_string()),
        position: latest
            .position
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
    };

    Some(PlayerRecord {
        profile,
        snapshot: PlayerStatSnapshot::new(averages, recent_points),
    })
}

/// Missing stats count as zero
fn window_mean(games: &[ApiGameStats], stat: impl Fn(&ApiGameStats) -> Option<f64>) -> f64 {
    let values: Vec<f64> = games.iter().map(|g| stat(g).unwrap_or(0.0)).collect();
    mean(&values)
}
