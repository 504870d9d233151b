//! Centralized calculations for prop suggestions
//!
//! Threshold derivation, confidence scoring and the confidence-to-price
//! mapping live here so every market is scored the same way.

use super::series::{coefficient_of_variation, MIN_GAMES_FOR_CONSISTENCY};

// =============================================================================
// Constants
// =============================================================================

/// Hard ceiling for any confidence score
pub const MAX_CONFIDENCE: u8 = 95;

/// CV below this earns the full consistency bonus
const VERY_CONSISTENT_CV: f64 = 0.15;
/// CV below this earns the partial consistency bonus
const CONSISTENT_CV: f64 = 0.25;

const VERY_CONSISTENT_BONUS: u8 = 5;
const CONSISTENT_BONUS: u8 = 2;

/// Price bands, highest confidence first. First match wins.
const ODDS_BANDS: [(u8, &str); 6] = [
    (85, "-140"),
    (80, "-130"),
    (75, "+110"),
    (70, "+120"),
    (65, "+150"),
    (60, "+180"),
];

/// Price for anything below the lowest band
const LONGSHOT_ODDS: &str = "+200";

// =============================================================================
// Estimation Mode
// =============================================================================

/// How a recent-game value is turned into the number compared to the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimationMode {
    /// Compare the recorded value itself
    Direct,
    /// Add an estimated secondary stat worth `weight` of the primary value.
    /// Used when only the primary series is known (assists inferred from points).
    Composite { weight: f64 },
}

impl EstimationMode {
    /// Estimated secondary stat for a primary value. Zero in direct mode.
    pub fn estimate_secondary(&self, primary: f64) -> f64 {
        match self {
            EstimationMode::Direct => 0.0,
            EstimationMode::Composite { weight } => primary * weight,
        }
    }

    /// Value compared against the threshold
    pub fn comparison_value(&self, primary: f64) -> f64 {
        primary + self.estimate_secondary(primary)
    }
}

// =============================================================================
// Threshold
// =============================================================================

/// Suggested "over" line: average scaled by the market's shrink factor, floored.
///
/// Negative or non-finite products give 0.
pub fn suggested_threshold(average: f64, shrink: f64) -> u32 {
    let line = (average * shrink).floor();
    if line.is_finite() && line > 0.0 {
        line as u32
    } else {
        0
    }
}

// =============================================================================
// Confidence
// =============================================================================

/// Confidence that the next game goes over `threshold`, in `[base_floor, 95]`.
///
/// Share of recent games strictly over the line, clamped to the floor and
/// ceiling, plus a bonus for low game-to-game variation. An empty series
/// scores exactly `base_floor`.
pub fn calculate_confidence(
    recent_games: &[f64],
    threshold: u32,
    mode: EstimationMode,
    base_floor: u8,
) -> u8 {
    if recent_games.is_empty() {
        return base_floor;
    }

    let line = f64::from(threshold);
    let above = recent_games
        .iter()
        .filter(|&&value| mode.comparison_value(value) > line)
        .count();

    let percentage = (100.0 * above as f64 / recent_games.len() as f64).round() as u8;
    let baseline = percentage.max(base_floor).min(MAX_CONFIDENCE);

    baseline
        .saturating_add(consistency_bonus(recent_games))
        .min(MAX_CONFIDENCE)
}

/// +5 when CV < 0.15, +2 when CV < 0.25, otherwise 0.
/// No bonus without at least three games and a positive mean.
pub fn consistency_bonus(games: &[f64]) -> u8 {
    if games.len() < MIN_GAMES_FOR_CONSISTENCY {
        return 0;
    }

    match coefficient_of_variation(games) {
        Some(cv) if cv < VERY_CONSISTENT_CV => VERY_CONSISTENT_BONUS,
        Some(cv) if cv < CONSISTENT_CV => CONSISTENT_BONUS,
        _ => 0,
    }
}

// =============================================================================
// Odds
// =============================================================================

/// Map a confidence score to an American-odds price string
pub fn odds_for_confidence(confidence: u8) -> &'static str {
    ODDS_BANDS
        .iter()
        .find(|(min, _)| confidence >= *min)
        .map(|(_, price)| *price)
        .unwrap_or(LONGSHOT_ODDS)
}

// =============================================================================
// Tests
// =============================================================================
