use serde::Serialize;

use crate::analysis::{
    AnnualizedRatios, HistogramBucket, RegimeCounts, RegimePolicy, RiskAdjustedPolicy,
    SummaryStats, ThresholdRegimePolicy, TrendDirection, bin_returns, build_returns,
    compute_drawdowns, compute_stress_index_with, detect_regimes, detect_trend, rolling_mean,
    rolling_std_dev, simple_moving_average, summarize_with,
};
use crate::config::{ANALYSIS, AnalysisConfig, PRINT_PIPELINE_STAGES};
use crate::domain::{PriceSeries, RegimeLabel, WindowedSeries};
use crate::error::AnalyticsResult;

/// Every series derived from one price series, index-aligned with it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    pub returns: Vec<f64>,
    pub volatility: WindowedSeries,
    pub rolling_mean: WindowedSeries,
    pub drawdowns: Vec<f64>,
    pub ma_short: WindowedSeries,
    pub ma_medium: WindowedSeries,
    pub ma_long: WindowedSeries,
    pub stress: Vec<f64>,
    pub regimes: Vec<RegimeLabel>,
}

/// Analytics for one caller-supplied price series.
///
/// All derived series are computed once in the constructor; the pipeline holds no
/// shared state, so independent pipelines can be built and read concurrently.
#[derive(Serialize, Debug, Clone)]
pub struct MarketPipeline {
    series: PriceSeries,
    config: AnalysisConfig,
    derived: DerivedSeries,
}

impl MarketPipeline {
    pub fn new(series: PriceSeries, config: &AnalysisConfig) -> AnalyticsResult<Self> {
        Self::with_regime_policy(series, config, &ThresholdRegimePolicy::default())
    }

    pub fn with_defaults(series: PriceSeries) -> AnalyticsResult<Self> {
        Self::new(series, &ANALYSIS)
    }

    pub fn with_regime_policy(
        series: PriceSeries,
        config: &AnalysisConfig,
        policy: &dyn RegimePolicy,
    ) -> AnalyticsResult<Self> {
        let prices = series.prices();
        let returns = build_returns(prices)?;

        // Return-based windows and price-based series do not depend on each other.
        let (return_windows, price_series) = rayon::join(
            || -> AnalyticsResult<_> {
                Ok((
                    rolling_std_dev(&returns, config.windows.volatility)?,
                    rolling_mean(&returns, config.windows.rolling_mean)?,
                ))
            },
            || -> AnalyticsResult<_> {
                Ok((
                    compute_drawdowns(prices)?,
                    simple_moving_average(prices, config.moving_averages.short)?,
                    simple_moving_average(prices, config.moving_averages.medium)?,
                    simple_moving_average(prices, config.moving_averages.long)?,
                ))
            },
        );
        let (volatility, rolling_mean) = return_windows?;
        let (drawdowns, ma_short, ma_medium, ma_long) = price_series?;

        let stress = compute_stress_index_with(&volatility, &drawdowns, &returns, &config.stress)?;
        let regimes = detect_regimes(&stress, policy)?;

        if PRINT_PIPELINE_STAGES {
            log::info!(
                "Pipeline for {} ({} days): volatility warm-up {}, MA{} warm-up {}, regimes via {}",
                series.name(),
                series.len(),
                volatility.warm_up_len(),
                config.moving_averages.long,
                ma_long.warm_up_len(),
                policy.signature()
            );
        }

        Ok(Self {
            series,
            config: *config,
            derived: DerivedSeries {
                returns,
                volatility,
                rolling_mean,
                drawdowns,
                ma_short,
                ma_medium,
                ma_long,
                stress,
                regimes,
            },
        })
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn derived(&self) -> &DerivedSeries {
        &self.derived
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Whole-period summary with the default ratio policy.
    pub fn summary(&self) -> AnalyticsResult<SummaryStats> {
        self.summary_with(&AnnualizedRatios::from_settings(&self.config.risk))
    }

    pub fn summary_with(&self, policy: &dyn RiskAdjustedPolicy) -> AnalyticsResult<SummaryStats> {
        summarize_with(
            self.series.prices(),
            &self.derived.returns,
            &self.derived.volatility,
            &self.derived.drawdowns,
            policy,
        )
    }

    /// Whole-period return distribution.
    pub fn histogram(&self) -> Vec<HistogramBucket> {
        bin_returns(&self.derived.returns)
    }

    pub fn regime_counts(&self) -> RegimeCounts {
        RegimeCounts::from_labels(&self.derived.regimes)
    }

    pub fn current_regime(&self) -> RegimeLabel {
        // A validated series is never empty, so there is always a last label.
        self.derived.regimes.last().copied().unwrap_or_default()
    }

    /// Trend on the last day of the series.
    pub fn trend(&self) -> TrendDirection {
        detect_trend(
            self.series.last_price(),
            self.derived.ma_medium.last(),
            self.derived.ma_long.last(),
        )
    }
}
