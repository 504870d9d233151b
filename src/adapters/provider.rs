use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::{FixtureProvider, SportsDataClient};
use crate::config::ProviderConfig;
use crate::domain::{PlayerProfile, PlayerRecord};
use crate::error::Result;

/// Where player data is coming from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Fixtures,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fixtures => "fixtures",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supplies player snapshots to the suggestion engine
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    fn source(&self) -> DataSource;

    async fn players(&self) -> Result<Vec<PlayerProfile>>;

    /// `Ok(None)` when the provider has no such player
    async fn player(&self, id: u32) -> Result<Option<PlayerRecord>>;
}

/// Live provider backed by fixtures.
///
/// Without a live provider every call is answered from fixtures. With one,
/// any live error is logged and the fixture answer is returned instead.
/// `source()` reports where the most recent answer came from.
pub struct FallbackProvider {
    live: Option<Arc<dyn StatsProvider>>,
    fixtures: FixtureProvider,
    /// Set while the last live call failed
    degraded: AtomicBool,
}

impl FallbackProvider {
    pub fn new(live: Option<Arc<dyn StatsProvider>>, fixtures: FixtureProvider) -> Self {
        Self {
            live,
            fixtures,
            degraded: AtomicBool::new(false),
        }
    }

    pub fn fixtures_only() -> Self {
        Self::new(None, FixtureProvider::new())
    }

    pub fn fixtures(&self) -> &FixtureProvider {
        &self.fixtures
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    fn mark_live(&self, ok: bool) {
        let was_degraded = self.degraded.swap(!ok, Ordering::Relaxed);
        if ok && was_degraded {
            info!("live stats recovered");
        }
    }
}

#[async_trait]
impl StatsProvider for FallbackProvider {
    fn source(&self) -> DataSource {
        match self.live {
            Some(ref live) if !self.is_degraded() => live.source(),
            _ => DataSource::Fixtures,
        }
    }

    async fn players(&self) -> Result<Vec<PlayerProfile>> {
        if let Some(ref live) = self.live {
            match live.players().await {
                Ok(players) => {
                    self.mark_live(true);
                    return Ok(players);
                }
                Err(e) => {
                    self.mark_live(false);
                    warn!(error = %e, "live player list failed, serving fixtures");
                }
            }
        }
        self.fixtures.players().await
    }

    async fn player(&self, id: u32) -> Result<Option<PlayerRecord>> {
        if let Some(ref live) = self.live {
            match live.player(id).await {
                Ok(record) => {
                    self.mark_live(true);
                    return Ok(record);
                }
                Err(e) => {
                    self.mark_live(false);
                    warn!(player_id = id, error = %e, "live player stats failed, serving fixtures");
                }
            }
        }
        self.fixtures.player(id).await
    }
}

/// Create the runtime stats provider from `ProviderConfig`.
///
/// Uses the live SportsDataIO client when a usable API key is configured,
/// fixtures otherwise.
pub fn build_stats_provider(config: &ProviderConfig) -> Result<Arc<dyn StatsProvider>> {
    let fixtures = FixtureProvider::new();

    let Some(api_key) = config.usable_api_key() else {
        warn!("No SportsDataIO API key configured, using fixture data");
        return Ok(Arc::new(FallbackProvider::new(None, fixtures)));
    };

    let client = SportsDataClient::new(
        &config.base_url,
        api_key,
        Duration::from_millis(config.timeout_ms),
        config.recent_games,
    )?;
    info!(base_url = %config.base_url, "Using SportsDataIO live stats");

    Ok(Arc::new(FallbackProvider::new(Some(Arc::new(client)), fixtures)))
}
