//! Summary statistics over a short run of game results.
//!
//! Series are chronological (oldest first). All functions are total: short
//! or degenerate input yields a neutral value rather than a NaN.

use crate::domain::Trend;

/// Minimum games before volatility says anything about consistency
pub const MIN_GAMES_FOR_CONSISTENCY: usize = 3;

/// Second-half mean must beat the first half by this factor to count as upward
const UPWARD_FACTOR: f64 = 1.1;
/// Second-half mean must fall below the first half by this factor to count as downward
const DOWNWARD_FACTOR: f64 = 0.9;

/// Arithmetic mean, 0.0 for an empty series
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Population variance (N denominator), 0.0 for an empty series
pub fn variance(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let avg = mean(series);
    series.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / series.len() as f64
}

/// Population standard deviation divided by the mean.
///
/// `None` when there are fewer than three games, the mean is not positive,
/// or the input contains non-finite values.
pub fn coefficient_of_variation(series: &[f64]) -> Option<f64> {
    if series.len() < MIN_GAMES_FOR_CONSISTENCY {
        return None;
    }

    let avg = mean(series);
    if !avg.is_finite() || avg <= 0.0 {
        return None;
    }

    let cv = variance(series).sqrt() / avg;
    cv.is_finite().then_some(cv)
}

/// Compare the first ceil(n/2) games against the last floor(n/2) games.
///
/// For odd lengths the middle game is counted in the first half only.
pub fn trend(series: &[f64]) -> Trend {
    let n = series.len();
    if n < 2 {
        return Trend::Stable;
    }

    let first_half = &series[..n.div_ceil(2)];
    let second_half = &series[n - n / 2..];

    let first_avg = mean(first_half);
    let second_avg = mean(second_half);

    if second_avg > first_avg * UPWARD_FACTOR {
        Trend::Upward
    } else if second_avg < first_avg * DOWNWARD_FACTOR {
        Trend::Downward
    } else {
        Trend::Stable
    }
}
