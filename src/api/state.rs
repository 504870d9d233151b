use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::adapters::StatsProvider;
use crate::strategy::SuggestionEngine;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Player data source (live with fixture fallback, or fixtures only)
    pub provider: Arc<dyn StatsProvider>,

    /// Stateless suggestion engine
    pub engine: SuggestionEngine,

    /// Deployment environment name
    pub environment: String,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(provider: Arc<dyn StatsProvider>, environment: impl Into<String>) -> Self {
        Self {
            provider,
            engine: SuggestionEngine::new(),
            environment: environment.into(),
            start_time: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds().max(0)
    }
}
