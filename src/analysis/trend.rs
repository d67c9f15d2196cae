use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction implied by the latest price against its medium and long moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrendDirection::Bullish => write!(f, "bullish"),
            TrendDirection::Bearish => write!(f, "bearish"),
            TrendDirection::Neutral => write!(f, "neutral"),
        }
    }
}

/// Bullish when `price > medium > long`, bearish when `price < medium < long`.
/// Anything else, including an average still in warm-up, is neutral.
pub fn detect_trend(price: f64, medium_ma: Option<f64>, long_ma: Option<f64>) -> TrendDirection {
    match (medium_ma, long_ma) {
        (Some(medium), Some(long)) if price > medium && medium > long => TrendDirection::Bullish,
        (Some(medium), Some(long)) if price < medium && medium < long => TrendDirection::Bearish,
        _ => TrendDirection::Neutral,
    }
}
