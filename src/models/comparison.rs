use serde::Serialize;

use crate::analysis::{CorrelationStrength, SummaryStats, correlate};
use crate::config::AnalysisConfig;
use crate::domain::PriceSeries;
use crate::error::{AnalyticsResult, ensure_same_len};
use crate::models::MarketPipeline;

/// Side-by-side view of two markets observed over the same days.
#[derive(Serialize, Debug, Clone)]
pub struct MarketComparison {
    pub left_name: String,
    pub right_name: String,
    pub left: SummaryStats,
    pub right: SummaryStats,
    /// Pearson correlation of the raw price levels.
    pub price_correlation: f64,
    pub price_strength: CorrelationStrength,
    /// Pearson correlation of daily returns, leading zero excluded.
    /// `None` when either market has fewer than two observed returns or a flat return series.
    pub return_correlation: Option<f64>,
}

impl MarketComparison {
    pub fn from_pipelines(left: &MarketPipeline, right: &MarketPipeline) -> AnalyticsResult<Self> {
        ensure_same_len(left.len(), right.len())?;

        let price_correlation = correlate(left.series().prices(), right.series().prices())?;
        let return_correlation = correlate(
            &left.derived().returns[1..],
            &right.derived().returns[1..],
        )
        .ok();

        Ok(Self {
            left_name: left.series().name().to_string(),
            right_name: right.series().name().to_string(),
            left: left.summary()?,
            right: right.summary()?,
            price_correlation,
            price_strength: CorrelationStrength::from_coefficient(price_correlation),
            return_correlation,
        })
    }
}

/// Build both pipelines concurrently and compare them.
pub fn compare(
    left: PriceSeries,
    right: PriceSeries,
    config: &AnalysisConfig,
) -> AnalyticsResult<MarketComparison> {
    ensure_same_len(left.len(), right.len())?;

    let (left, right) = rayon::join(
        || MarketPipeline::new(left, config),
        || MarketPipeline::new(right, config),
    );
    MarketComparison::from_pipelines(&left?, &right?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use crate::error::AnalyticsError;

    fn series(name: &str, prices: Vec<f64>) -> PriceSeries {
        PriceSeries::new(name, prices).unwrap()
    }

    fn wave(days: usize, scale: f64, phase: f64) -> Vec<f64> {
        (0..days)
            .map(|i| 1000.0 + ((i as f64 * 0.2) + phase).sin() * scale + i as f64)
            .collect()
    }

    #[test]
    fn comparison_matches_direct_correlation() {
        let a = wave(120, 30.0, 0.0);
        let b = wave(120, 45.0, 0.4);
        let expected = correlate(&a, &b).unwrap();

        let comparison = compare(series("SENSEX", a), series("NIFTY", b), &ANALYSIS).unwrap();
        assert_eq!(comparison.price_correlation, expected);
        assert_eq!(comparison.left_name, "SENSEX");
        assert_eq!(comparison.right_name, "NIFTY");
        assert_eq!(
            comparison.price_strength,
            CorrelationStrength::from_coefficient(expected)
        );
        assert!(comparison.return_correlation.is_some());
    }

    #[test]
    fn scaled_market_is_perfectly_correlated() {
        let a = wave(60, 20.0, 0.0);
        let b = a.iter().map(|p| p * 3.0).collect::<Vec<_>>();
        let comparison = compare(series("A", a), series("B", b), &ANALYSIS).unwrap();
        assert!((comparison.price_correlation - 1.0).abs() < 1e-9);
        assert_eq!(comparison.price_strength, CorrelationStrength::Strong);
        // Scaling leaves percentage returns unchanged.
        assert!((comparison.return_correlation.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = compare(
            series("A", wave(50, 10.0, 0.0)),
            series("B", wave(40, 10.0, 0.0)),
            &ANALYSIS,
        )
        .unwrap_err();
        assert_eq!(err, AnalyticsError::LengthMismatch { left: 50, right: 40 });
    }

    #[test]
    fn flat_market_has_no_correlation() {
        let err = compare(
            series("A", wave(30, 10.0, 0.0)),
            series("FLAT", vec![100.0; 30]),
            &ANALYSIS,
        )
        .unwrap_err();
        assert_eq!(err, AnalyticsError::ZeroVariance);

        let err = compare(
            series("A", wave(30, 10.0, 0.0)),
            series("FLAT", vec![58123.45; 30]),
            &ANALYSIS,
        )
        .unwrap_err();
        assert_eq!(err, AnalyticsError::ZeroVariance);
    }
}
