use serde::{Deserialize, Serialize};

/// Statistical market a suggestion is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketKind {
    Points,
    PointsAssists,
    Rebounds,
    Threes,
}

impl MarketKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketKind::Points => "points",
            MarketKind::PointsAssists => "points_assists",
            MarketKind::Rebounds => "rebounds",
            MarketKind::Threes => "threes",
        }
    }
}

impl std::fmt::Display for MarketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative bucket for a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    High,
    Medium,
    Low,
}

impl Strength {
    /// high >= 80, medium >= 65, low otherwise
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= 80 {
            Strength::High
        } else if confidence >= 65 {
            Strength::Medium
        } else {
            Strength::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::High => "high",
            Strength::Medium => "medium",
            Strength::Low => "low",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a recent-game series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Upward,
    Downward,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Upward => "upward",
            Trend::Downward => "downward",
            Trend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One "over" suggestion for an eligible market.
///
/// Built once by the suggestion engine and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    #[serde(rename = "type")]
    pub kind: MarketKind,
    pub market: String,
    pub suggestion: String,
    pub threshold: u32,
    pub confidence: u8,
    pub odds: String,
    pub average: f64,
    pub description: String,
    pub strength: Strength,
}
