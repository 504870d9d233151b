//! Suggestion engine
//!
//! Turns a [`PlayerStatSnapshot`] into an ordered list of
//! [`SuggestionRecord`]s, one per eligible market, highest confidence first.

use tracing::{debug, trace};

use super::calculations::{calculate_confidence, odds_for_confidence, suggested_threshold};
use super::markets::{MarketSpec, MARKETS};
use crate::domain::{MarketKind, PlayerStatSnapshot, Strength, SuggestionRecord};

/// Stateless scorer over a fixed market table.
///
/// Holds no mutable state, so one engine can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine {
    markets: &'static [MarketSpec],
}

impl SuggestionEngine {
    /// Engine over the built-in market table
    pub fn new() -> Self {
        Self { markets: &MARKETS }
    }

    /// Engine over a custom market table
    pub fn with_markets(markets: &'static [MarketSpec]) -> Self {
        Self { markets }
    }

    pub fn markets(&self) -> &'static [MarketSpec] {
        self.markets
    }

    /// Score every eligible market, sorted by confidence descending.
    ///
    /// Ties keep market declaration order. An empty result is valid.
    pub fn suggest(&self, snapshot: &PlayerStatSnapshot) -> Vec<SuggestionRecord> {
        let mut suggestions: Vec<SuggestionRecord> = self
            .markets
            .iter()
            .filter_map(|spec| self.score_market(spec, snapshot))
            .collect();

        // sort_by is stable
        suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        suggestions
    }

    /// Build the record for one market, or `None` if the player is not eligible
    pub fn score_market(
        &self,
        spec: &MarketSpec,
        snapshot: &PlayerStatSnapshot,
    ) -> Option<SuggestionRecord> {
        let averages = &snapshot.season_averages;
        if !spec.is_eligible(averages) {
            trace!(market = %spec.kind, average = spec.average(averages), "market not eligible");
            return None;
        }

        let average = spec.average(averages);
        let threshold = suggested_threshold(average, spec.shrink);
        let series = spec.series(&snapshot.recent_games);
        let confidence = calculate_confidence(series, threshold, spec.mode, spec.base_confidence);

        debug!(
            market = %spec.kind,
            average,
            threshold,
            games = series.len(),
            confidence,
            "scored market"
        );

        Some(SuggestionRecord {
            kind: spec.kind,
            market: spec.label.to_string(),
            suggestion: format!("More than {}", threshold),
            threshold,
            confidence,
            odds: odds_for_confidence(confidence).to_string(),
            average,
            description: describe(spec, average, series.len()),
            strength: Strength::from_confidence(confidence),
        })
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Score a snapshot against the built-in markets
pub fn suggest(snapshot: &PlayerStatSnapshot) -> Vec<SuggestionRecord> {
    SuggestionEngine::new().suggest(snapshot)
}

/// Only the points line is backed by the game window; combined markets
/// report the season figure.
fn describe(spec: &MarketSpec, average: f64, games: usize) -> String {
    match spec.kind {
        MarketKind::Points if games > 0 => format!(
            "Average of {:.1} {} over the last {} games",
            average, spec.stat_noun, games
        ),
        _ => format!("Average of {:.1} {}", average, spec.stat_noun),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeasonAverages;
    use crate::strategy::calculations::EstimationMode;
    use crate::strategy::markets::{SeriesSource, StatSource};

    fn lebron() -> PlayerStatSnapshot {
        PlayerStatSnapshot::new(
            SeasonAverages::new(25.3, 7.9, 7.1, 2.2),
            vec![28.0, 32.0, 22.0, 26.0, 29.0],
        )
    }

    #[test]
    fn test_lebron_points_market() {
        let suggestions = suggest(&lebron());
        let points = suggestions
            .iter()
            .find(|s| s.kind == MarketKind::Points)
            .unwrap();

        assert_eq!(points.threshold, 21);
        assert_eq!(points.suggestion, "More than 21");
        assert_eq!(points.confidence, 95);
        assert_eq!(points.odds, "-140");
        assert_eq!(points.strength, Strength::High);
        assert_eq!(points.average, 25.3);
        assert_eq!(
            points.description,
            "Average of 25.3 points over the last 5 games"
        );
    }

    #[test]
    fn test_lebron_full_ordering() {
        let suggestions = suggest(&lebron());
        let kinds: Vec<_> = suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MarketKind::Points,
                MarketKind::PointsAssists,
                MarketKind::Rebounds,
                MarketKind::Threes,
            ]
        );

        let confidences: Vec<_> = suggestions.iter().map(|s| s.confidence).collect();
        assert_eq!(confidences, vec![95, 95, 65, 60]);

        // floor(33.2 * 0.82) = 27
        assert_eq!(suggestions[1].threshold, 27);
        // floor(7.1 * 0.88) = 6, floor(2.2 * 0.75) = 1
        assert_eq!(suggestions[2].threshold, 6);
        assert_eq!(suggestions[3].threshold, 1);
        assert_eq!(suggestions[2].odds, "+150");
        assert_eq!(suggestions[3].odds, "+180");
        assert_eq!(suggestions[2].description, "Average of 7.1 rebounds");
    }

    #[test]
    fn test_combined_market_description_has_no_window() {
        let suggestions = suggest(&lebron());
        let combined = suggestions
            .iter()
            .find(|s| s.kind == MarketKind::PointsAssists)
            .unwrap();
        assert_eq!(combined.description, "Average of 33.2 points + assists");
    }

    #[test]
    fn test_rebounds_at_exact_floor_not_emitted() {
        let snapshot = PlayerStatSnapshot::new(SeasonAverages::new(20.0, 4.0, 3.0, 1.0), vec![]);
        let suggestions = suggest(&snapshot);
        assert!(suggestions.iter().all(|s| s.kind != MarketKind::Rebounds));
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn test_no_eligible_markets() {
        let snapshot = PlayerStatSnapshot::new(SeasonAverages::default(), vec![10.0, 12.0]);
        assert!(suggest(&snapshot).is_empty());
    }

    #[test]
    fn test_empty_series_scores_floors() {
        let snapshot = PlayerStatSnapshot::new(SeasonAverages::new(25.3, 7.9, 7.1, 2.2), vec![]);
        for s in suggest(&snapshot) {
            let spec = MARKETS.iter().find(|m| m.kind == s.kind).unwrap();
            assert_eq!(s.confidence, spec.base_confidence, "{}", s.kind);
        }
    }

    #[test]
    fn test_sorted_descending() {
        let snapshot = PlayerStatSnapshot::new(
            SeasonAverages::new(18.0, 2.0, 9.0, 3.0),
            vec![4.0, 30.0, 8.0, 25.0, 6.0],
        );
        let suggestions = suggest(&snapshot);
        assert!(!suggestions.is_empty());
        for pair in suggestions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    static TIED_MARKETS: [MarketSpec; 2] = [
        MarketSpec {
            kind: MarketKind::Threes,
            label: "Three-Pointers Made",
            stat_noun: "three-pointers made",
            stat: StatSource::Threes,
            min_average: 0.5,
            shrink: 0.75,
            mode: EstimationMode::Direct,
            series: SeriesSource::Unavailable,
            base_confidence: 70,
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
            base_confidence: 70,
        },
    ];

    #[test]
    fn test_ties_keep_declaration_order() {
        let engine = SuggestionEngine::with_markets(&TIED_MARKETS);
        let snapshot = PlayerStatSnapshot::new(SeasonAverages::new(20.0, 5.0, 8.0, 2.0), vec![]);

        let suggestions = engine.suggest(&snapshot);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].confidence, suggestions[1].confidence);
        assert_eq!(suggestions[0].kind, MarketKind::Threes);
        assert_eq!(suggestions[1].kind, MarketKind::Rebounds);
    }

    #[test]
    fn test_deterministic_output() {
        let snapshot = lebron();
        let engine = SuggestionEngine::new();

        let first = serde_json::to_vec(&engine.suggest(&snapshot)).unwrap();
        let second = serde_json::to_vec(&engine.suggest(&snapshot)).unwrap();
        assert_eq!(first, second);
    }
}
