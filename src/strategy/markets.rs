//! Declarative table of supported prop markets.
//!
//! The engine iterates [`MARKETS`] in order; adding a market is a new table
//! entry, not a new branch.

use super::calculations::EstimationMode;
use crate::domain::{MarketKind, SeasonAverages};

/// Which season statistic a market reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSource {
    Points,
    Rebounds,
    Threes,
    /// Points plus assists
    PointsAssists,
}

impl StatSource {
    pub fn value(&self, averages: &SeasonAverages) -> f64 {
        match self {
            StatSource::Points => averages.points,
            StatSource::Rebounds => averages.rebounds,
            StatSource::Threes => averages.threes,
            StatSource::PointsAssists => averages.points + averages.assists,
        }
    }
}

/// Recent-game series a market is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    /// The snapshot's recent points series
    RecentPoints,
    /// No per-game history; confidence is the market floor
    Unavailable,
}

/// Static definition of one market
#[derive(Debug, Clone, Copy)]
pub struct MarketSpec {
    pub kind: MarketKind,
    pub label: &'static str,
    /// Noun used in descriptions ("points", "rebounds", ...)
    pub stat_noun: &'static str,
    pub stat: StatSource,
    /// Eligible only when the stat average is strictly above this
    pub min_average: f64,
    /// Multiplier applied to the average before flooring (0.75 - 0.90)
    pub shrink: f64,
    pub mode: EstimationMode,
    pub series: SeriesSource,
    /// Confidence returned when no series is available, and the lower clamp otherwise
    pub base_confidence: u8,
}

impl MarketSpec {
    /// Average feeding this market
    pub fn average(&self, averages: &SeasonAverages) -> f64 {
        self.stat.value(averages)
    }

    /// Non-finite, zero and below-minimum averages are not eligible
    pub fn is_eligible(&self, averages: &SeasonAverages) -> bool {
        let avg = self.average(averages);
        avg.is_finite() && avg > self.min_average
    }

    /// Series the confidence calculator should see for this market
    pub fn series<'a>(&self, recent_points: &'a [f64]) -> &'a [f64] {
        match self.series {
            SeriesSource::RecentPoints => recent_points,
            SeriesSource::Unavailable => &[],
        }
    }
}

/// Assists estimated as a quarter of points when only points are known
pub const ASSIST_ESTIMATE_WEIGHT: f64 = 0.25;

/// Supported markets in declaration order. Ties in confidence keep this order.
pub const MARKETS: [MarketSpec; 4] = [
    MarketSpec {
        kind: MarketKind::Points,
        label: "Points",
        stat_noun: "points",
        stat: StatSource::Points,
        min_average: 10.0,
        shrink: 0.85,
        mode: EstimationMode::Direct,
        series: SeriesSource::RecentPoints,
        base_confidence: 60,
    },
    MarketSpec {
        kind: MarketKind::PointsAssists,
        label: "Points + Assists",
        stat_noun: "points + assists",
        stat: StatSource::PointsAssists,
        min_average: 15.0,
        shrink: 0.82,
        mode: EstimationMode::Composite {
            weight: ASSIST_ESTIMATE_WEIGHT,
        },
        series: SeriesSource::RecentPoints,
        base_confidence: 60,
    },
    MarketSpec {
        kind: MarketKind::Rebounds,
        label: "Rebounds",
        stat_noun: "rebounds",
        stat: StatSource::Rebounds,
        min_average: 3.0,
        shrink: 0.88,
        mode: EstimationMode::Direct,
        series: SeriesSource::Unavailable,
        base_confidence: 65,
    },
    MarketSpec {
        kind: MarketKind::Threes,
        label: "Three-Pointers Made",
        stat_noun: "three-pointers made",
        stat: StatSource::Threes,
        min_average: 0.5,
        shrink: 0.75,
        mode: EstimationMode::Direct,
        series: SeriesSource::Unavailable,
        base_confidence: 60,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::calculations::MAX_CONFIDENCE;

    #[test]
    fn test_table_invariants() {
        for spec in MARKETS.iter() {
            assert!(
                (0.75..=0.90).contains(&spec.shrink),
                "{} shrink {}",
                spec.kind,
                spec.shrink
            );
            assert!(spec.base_confidence <= MAX_CONFIDENCE, "{}", spec.kind);
            assert!(spec.min_average >= 0.0, "{}", spec.kind);
        }
    }

    #[test]
    fn test_market_kinds_are_unique() {
        for (i, a) in MARKETS.iter().enumerate() {
            for b in MARKETS.iter().skip(i + 1) {
                assert_ne!(a.kind, b.kind);
            }
        }
    }

    #[test]
    fn test_eligibility_is_strict() {
        let rebounds = MARKETS[2];
        assert!(!rebounds.is_eligible(&SeasonAverages::new(20.0, 5.0, 3.0, 1.0)));
        assert!(rebounds.is_eligible(&SeasonAverages::new(20.0, 5.0, 3.1, 1.0)));
    }

    #[test]
    fn test_degenerate_averages_are_ineligible() {
        let points = MARKETS[0];
        assert!(!points.is_eligible(&SeasonAverages::new(0.0, 0.0, 0.0, 0.0)));
        assert!(!points.is_eligible(&SeasonAverages::new(-12.0, 0.0, 0.0, 0.0)));
        assert!(!points.is_eligible(&SeasonAverages::new(f64::NAN, 0.0, 0.0, 0.0)));
        assert!(!points.is_eligible(&SeasonAverages::new(f64::INFINITY, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_composite_average_sums_points_and_assists() {
        let spec = MARKETS[1];
        let averages = SeasonAverages::new(12.0, 4.0, 0.0, 0.0);
        assert_eq!(spec.average(&averages), 16.0);
        assert!(spec.is_eligible(&averages));
    }

    #[test]
    fn test_series_selection() {
        let recent = [20.0, 25.0];
        assert_eq!(MARKETS[0].series(&recent), &recent[..]);
        assert!(MARKETS[2].series(&recent).is_empty());
    }
}
