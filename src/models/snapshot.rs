use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::{
    DrawdownStats, HistogramBucket, RegimeCounts, ReturnStats, StressStats, SummaryStats,
    TrendDirection, VolatilityStats, drawdown_stats, return_stats, stress_stats,
    volatility_stats,
};
use crate::domain::RegimeLabel;
use crate::error::AnalyticsResult;
use crate::models::MarketPipeline;

/// One chart row. Window-based fields are `None` while their window is still filling.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailySnapshot {
    /// Position in the full series, not in the trailing view.
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub price: f64,
    pub returns: f64,
    pub volatility: Option<f64>,
    pub drawdown: f64,
    pub ma_short: Option<f64>,
    pub ma_medium: Option<f64>,
    pub ma_long: Option<f64>,
    pub rolling_mean: Option<f64>,
    pub stress: f64,
    pub regime: RegimeLabel,
}

impl MarketPipeline {
    /// First index of the trailing `limit`-day view.
    fn view_start(&self, limit: usize) -> usize {
        self.len().saturating_sub(limit)
    }

    /// Rows for the trailing `limit` days, oldest first. A `limit` of zero yields no rows.
    pub fn snapshot(&self, limit: usize) -> Vec<DailySnapshot> {
        let derived = self.derived();
        let prices = self.series().prices();

        (self.view_start(limit)..self.len())
            .map(|idx| DailySnapshot {
                index: idx,
                date: self.series().date_at(idx),
                price: prices[idx],
                returns: derived.returns[idx],
                volatility: derived.volatility.get(idx),
                drawdown: derived.drawdowns[idx],
                ma_short: derived.ma_short.get(idx),
                ma_medium: derived.ma_medium.get(idx),
                ma_long: derived.ma_long.get(idx),
                rolling_mean: derived.rolling_mean.get(idx),
                stress: derived.stress[idx],
                regime: derived.regimes[idx],
            })
            .collect()
    }
}

/// Everything the dashboard pages show for one series.
///
/// `summary` and `histogram` cover the whole period. The page aggregates are taken over the
/// same trailing window as `rows`, so they match what the charts display.
#[derive(Serialize, Debug, Clone)]
pub struct DashboardReport {
    pub name: String,
    pub total_days: usize,
    pub limit: usize,
    pub trend: TrendDirection,
    pub summary: SummaryStats,
    pub histogram: Vec<HistogramBucket>,
    pub regimes: RegimeCounts,
    pub stress: StressStats,
    pub drawdowns: DrawdownStats,
    pub volatility: VolatilityStats,
    pub returns: ReturnStats,
    pub rows: Vec<DailySnapshot>,
}

impl DashboardReport {
    pub fn build(pipeline: &MarketPipeline, limit: usize) -> AnalyticsResult<Self> {
        // The page aggregates need at least one day.
        let limit = limit.max(1);
        let config = pipeline.config();
        let derived = pipeline.derived();
        let start = pipeline.view_start(limit);

        // Day 0 has no prior price, so its return is not an observation.
        let observed_returns = &derived.returns[start.max(1)..];

        Ok(Self {
            name: pipeline.series().name().to_string(),
            total_days: pipeline.len(),
            limit,
            trend: pipeline.trend(),
            summary: pipeline.summary()?,
            histogram: pipeline.histogram(),
            regimes: RegimeCounts::from_labels(&derived.regimes[start..]),
            stress: stress_stats(
                &derived.stress[start..],
                config.stress.high_stress_threshold,
                &config.regime,
            )?,
            drawdowns: drawdown_stats(
                &derived.drawdowns[start..],
                config.risk.significant_drawdown_pct,
            )?,
            volatility: volatility_stats(
                &derived.volatility.tail(limit),
                config.risk.high_volatility_multiplier,
            ),
            returns: return_stats(observed_returns, &derived.rolling_mean.tail(limit)),
            rows: pipeline.snapshot(limit),
        })
    }
}
