use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::domain::validate_prices;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::utils::maths_utils::get_min;

/// Percentage distance of each price below its running peak.
///
/// Single forward pass with the peak seeded at `prices[0]`. Every element is `<= 0`
/// and is exactly `0` on days that set a new running high.
pub fn compute_drawdowns(prices: &[f64]) -> AnalyticsResult<Vec<f64>> {
    validate_prices(prices)?;

    let mut peak = prices[0];
    let drawdowns = prices
        .iter()
        .map(|&price| {
            if price >= peak {
                peak = price;
                0.0
            } else {
                (price - peak) / peak * 100.0
            }
        })
        .collect();

    Ok(drawdowns)
}

/// Aggregates shown on the drawdowns page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownStats {
    /// Drawdown on the last day of the series.
    pub current: f64,
    /// Deepest (most negative) drawdown.
    pub max_drawdown: f64,
    /// Mean drawdown level over all days.
    pub average: f64,
    /// Days strictly below `significant_threshold_pct`.
    pub significant_days: usize,
}

pub fn drawdown_stats(
    drawdowns: &[f64],
    significant_threshold_pct: f64,
) -> AnalyticsResult<DrawdownStats> {
    let max_drawdown = get_min(drawdowns).ok_or(AnalyticsError::EmptySeries)?;
    let current = drawdowns[drawdowns.len() - 1];

    Ok(DrawdownStats {
        current,
        max_drawdown,
        average: drawdowns.mean(),
        significant_days: drawdowns
            .iter()
            .filter(|&&dd| dd < significant_threshold_pct)
            .count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn drawdowns_follow_running_peak() {
        let dd = compute_drawdowns(&[100.0, 110.0, 99.0, 99.0]).unwrap();
        assert_eq!(dd[0], 0.0);
        assert_eq!(dd[1], 0.0);
        assert!(approx_eq(dd[2], -10.0));
        assert!(approx_eq(dd[3], -10.0));
    }

    #[test]
    fn zero_exactly_at_new_peaks() {
        let prices = [50.0, 48.0, 52.0, 52.0, 49.0, 60.0, 30.0];
        let dd = compute_drawdowns(&prices).unwrap();
        let mut peak = prices[0];
        for (i, &price) in prices.iter().enumerate() {
            peak = peak.max(price);
            assert!(dd[i] <= 0.0);
            assert_eq!(dd[i] == 0.0, price == peak, "index {i}");
        }
    }

    #[test]
    fn rising_series_never_draws_down() {
        let prices: Vec<f64> = (1..=30).map(|i| 100.0 + i as f64).collect();
        assert!(compute_drawdowns(&prices).unwrap().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(compute_drawdowns(&[]), Err(AnalyticsError::EmptySeries));
        assert!(drawdown_stats(&[], -5.0).is_err());
    }

    #[test]
    fn stats_count_significant_days() {
        let stats = drawdown_stats(&[0.0, -2.0, -6.0, -5.0, -8.0], -5.0).unwrap();
        assert_eq!(stats.current, -8.0);
        assert_eq!(stats.max_drawdown, -8.0);
        assert_eq!(stats.significant_days, 2);
        assert!(approx_eq(stats.average, -4.2));
    }
}
