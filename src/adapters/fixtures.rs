//! Built-in player fixtures.
//!
//! Served when no SportsDataIO key is configured and whenever a live request
//! fails. Recent games are point totals, oldest first.

use async_trait::async_trait;

use super::{DataSource, StatsProvider};
use crate::domain::{PlayerProfile, PlayerRecord, PlayerStatSnapshot, SeasonAverages};
use crate::error::Result;

struct Fixture {
    id: u32,
    name: &'static str,
    team: &'static str,
    position: &'static str,
    averages: [f64; 4], // points, assists, rebounds, threes
    recent: [f64; 5],
}

const FIXTURES: [Fixture; 5] = [
    Fixture {
        id: 1,
        name: "LeBron James",
        team: "Los Angeles Lakers",
        position: "SF",
        averages: [25.3, 7.9, 7.1, 2.2],
        recent: [28.0, 32.0, 22.0, 26.0, 29.0],
    },
    Fixture {
        id: 2,
        name: "Stephen Curry",
        team: "Golden State Warriors",
        position: "PG",
        averages: [29.4, 6.3, 6.1, 4.9],
        recent: [35.0, 28.0, 31.0, 27.0, 33.0],
    },
    Fixture {
        id: 3,
        name: "Kevin Durant",
        team: "Phoenix Suns",
        position: "SF",
        averages: [27.1, 5.6, 6.7, 2.1],
        recent: [25.0, 30.0, 28.0, 24.0, 29.0],
    },
    Fixture {
        id: 4,
        name: "Giannis Antetokounmpo",
        team: "Milwaukee Bucks",
        position: "PF",
        averages: [31.1, 5.7, 11.8, 0.7],
        recent: [34.0, 28.0, 36.0, 30.0, 32.0],
    },
    Fixture {
        id: 5,
        name: "Luka Dončić",
        team: "Dallas Mavericks",
        position: "PG",
        averages: [32.4, 8.6, 8.6, 3.1],
        recent: [35.0, 40.0, 28.0, 33.0, 30.0],
    },
];

impl Fixture {
    fn profile(&self) -> PlayerProfile {
        PlayerProfile {
            id: self.id,
            name: self.name.to_string(),
            team: self.team.to_string(),
            position: self.position.to_string(),
        }
    }

    fn record(&self) -> PlayerRecord {
        let [points, assists, rebounds, threes] = self.averages;
        PlayerRecord {
            profile: self.profile(),
            snapshot: PlayerStatSnapshot::new(
                SeasonAverages::new(points, assists, rebounds, threes),
                self.recent.to_vec(),
            ),
        }
    }
}

/// Static five-player fixture set
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProvider;

impl FixtureProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn all(&self) -> Vec<PlayerRecord> {
        FIXTURES.iter().map(Fixture::record).collect()
    }

    pub fn find(&self, id: u32) -> Option<PlayerRecord> {
        FIXTURES.iter().find(|f| f.id == id).map(Fixture::record)
    }
}

#[async_trait]
impl StatsProvider for FixtureProvider {
    fn source(&self) -> DataSource {
        DataSource::Fixtures
    }

    async fn players(&self) -> Result<Vec<PlayerProfile>> {
        Ok(FIXTURES.iter().map(Fixture::profile).collect())
    }

    async fn player(&self, id: u32) -> Result<Option<PlayerRecord>> {
        Ok(self.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_by_id() {
        let provider = FixtureProvider::new();

        let curry = provider.player(2).await.unwrap().unwrap();
        assert_eq!(curry.profile.name, "Stephen Curry");
        assert_eq!(curry.snapshot.season_averages.threes, 4.9);
        assert_eq!(curry.snapshot.recent_games.len(), 5);

        assert!(provider.player(99).await.unwrap().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let records = FixtureProvider::new().all();
        for (i, a) in records.iter().enumerate() {
            assert!(records.iter().skip(i + 1).all(|b| b.id() != a.id()));
        }
    }
}
