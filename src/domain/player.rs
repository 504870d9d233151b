use serde::{Deserialize, Serialize};

/// Per-game season averages for the four stats the engine prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonAverages {
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub threes: f64,
}

impl SeasonAverages {
    pub fn new(points: f64, assists: f64, rebounds: f64, threes: f64) -> Self {
        Self {
            points,
            assists,
            rebounds,
            threes,
        }
    }
}

/// Immutable engine input: season averages plus the recent points series.
///
/// `recent_games` holds point totals in chronological order, oldest first,
/// so the last element is the most recent game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatSnapshot {
    pub season_averages: SeasonAverages,
    #[serde(default)]
    pub recent_games: Vec<f64>,
}

impl PlayerStatSnapshot {
    pub fn new(season_averages: SeasonAverages, recent_games: Vec<f64>) -> Self {
        Self {
            season_averages,
            recent_games,
        }
    }
}

/// Player identity as listed by a stats provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub position: String,
}

/// A player together with the snapshot the engine scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub profile: PlayerProfile,
    pub snapshot: PlayerStatSnapshot,
}

impl PlayerRecord {
    pub fn id(&self) -> u32 {
        self.profile.id
    }
}
