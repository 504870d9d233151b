pub mod analysis;
pub mod calculations;
pub mod engine;
pub mod markets;
pub mod series;

pub use analysis::PlayerAnalysis;
pub use calculations::{
    calculate_confidence, consistency_bonus, odds_for_confidence, suggested_threshold,
    EstimationMode, MAX_CONFIDENCE,
};
pub use engine::{suggest, SuggestionEngine};
pub use markets::{MarketSpec, SeriesSource, StatSource, MARKETS};
pub use series::{coefficient_of_variation, mean, trend, variance};
