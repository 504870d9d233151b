pub mod fixtures;
pub mod provider;
pub mod sportsdata;

pub use fixtures::FixtureProvider;
pub use provider::{build_stats_provider, DataSource, FallbackProvider, StatsProvider};
pub use sportsdata::SportsDataClient;
