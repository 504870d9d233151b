pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod strategy;

pub use adapters::{DataSource, FallbackProvider, FixtureProvider, StatsProvider};
pub use config::AppConfig;
pub use domain::{
    MarketKind, PlayerProfile, PlayerRecord, PlayerStatSnapshot, SeasonAverages, Strength,
    SuggestionRecord, Trend,
};
pub use error::{PropError, Result};
pub use strategy::{suggest, PlayerAnalysis, SuggestionEngine};
