//! Period-level aggregates derived from the pipeline series.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::config::{ANALYSIS, RiskSettings};
use crate::domain::{WindowedSeries, validate_prices};
use crate::error::{AnalyticsError, AnalyticsResult, ensure_same_len};
use crate::utils::maths_utils::{get_min, get_min_max, share_pct};

/// Scalar summary of one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// `(last / first - 1) * 100`.
    pub total_return: f64,
    /// Mean of all daily returns, including the defined zero on day 0.
    pub average_return: f64,
    /// Mean of computed rolling volatility values; warm-up days are excluded from the
    /// denominator. `None` when the window never filled.
    pub average_volatility: Option<f64>,
    /// Most negative drawdown.
    pub max_drawdown: f64,
    pub sharpe_ratio: Option<f64>,
    pub calmar_ratio: Option<f64>,
    /// Signature of the policy that produced the two ratios.
    pub ratio_policy: String,
}

/// Source of the risk-adjusted ratios. The pipeline does not mandate a formula, but
/// series that are compared must be summarized with the same policy.
pub trait RiskAdjustedPolicy: Send + Sync {
    fn sharpe_ratio(&self, returns: &[f64]) -> Option<f64>;

    fn calmar_ratio(&self, prices: &[f64], drawdowns: &[f64]) -> Option<f64>;

    /// A unique identifier for this policy (reported in [`SummaryStats::ratio_policy`]).
    fn signature(&self) -> &'static str;
}

/// Default ratios from daily percentage returns.
///
/// * Sharpe: `(mean(r[1..]) - rf / days) / popstd(r[1..]) * sqrt(days)`, where `rf` is
///   the annual risk-free rate in percent. Day 0 is excluded as it is not an observation.
/// * Calmar: annualized return `((last / first)^(days / (n - 1)) - 1) * 100` divided by
///   `|max drawdown|`.
///
/// Either ratio is `None` when its denominator is zero or there are too few days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualizedRatios {
    pub trading_days_per_year: f64,
    pub risk_free_rate_pct: f64,
}

impl Default for AnnualizedRatios {
    fn default() -> Self {
        Self::from_settings(&ANALYSIS.risk)
    }
}

impl AnnualizedRatios {
    pub fn from_settings(settings: &RiskSettings) -> Self {
        Self {
            trading_days_per_year: settings.trading_days_per_year,
            risk_free_rate_pct: settings.risk_free_rate_pct,
        }
    }
}

impl RiskAdjustedPolicy for AnnualizedRatios {
    fn sharpe_ratio(&self, returns: &[f64]) -> Option<f64> {
        let observed = returns.get(1..).filter(|r| r.len() >= 2)?;
        let std_dev = observed.population_std_dev();
        if !std_dev.is_finite() || std_dev == 0.0 {
            return None;
        }
        let daily_risk_free = self.risk_free_rate_pct / self.trading_days_per_year;
        let excess = observed.mean() - daily_risk_free;
        Some(excess / std_dev * self.trading_days_per_year.sqrt())
    }

    fn calmar_ratio(&self, prices: &[f64], drawdowns: &[f64]) -> Option<f64> {
        if prices.len() < 2 {
            return None;
        }
        let max_drawdown = get_min(drawdowns).filter(|dd| *dd < 0.0)?;
        let growth = prices[prices.len() - 1] / prices[0];
        let years_exponent = self.trading_days_per_year / (prices.len() - 1) as f64;
        let annualized_return = (growth.powf(years_exponent) - 1.0) * 100.0;
        Some(annualized_return / max_drawdown.abs())
    }

    fn signature(&self) -> &'static str {
        "annualized-daily"
    }
}

/// Externally supplied ratios passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SuppliedRatios {
    pub sharpe: Option<f64>,
    pub calmar: Option<f64>,
}

impl RiskAdjustedPolicy for SuppliedRatios {
    fn sharpe_ratio(&self, _returns: &[f64]) -> Option<f64> {
        self.sharpe
    }

    fn calmar_ratio(&self, _prices: &[f64], _drawdowns: &[f64]) -> Option<f64> {
        self.calmar
    }

    fn signature(&self) -> &'static str {
        "supplied"
    }
}

/// Summarize a period with the default [`AnnualizedRatios`] policy.
pub fn summarize(
    prices: &[f64],
    returns: &[f64],
    volatility: &WindowedSeries,
    drawdowns: &[f64],
) -> AnalyticsResult<SummaryStats> {
    summarize_with(
        prices,
        returns,
        volatility,
        drawdowns,
        &AnnualizedRatios::default(),
    )
}

pub fn summarize_with(
    prices: &[f64],
    returns: &[f64],
    volatility: &WindowedSeries,
    drawdowns: &[f64],
    policy: &dyn RiskAdjustedPolicy,
) -> AnalyticsResult<SummaryStats> {
    validate_prices(prices)?;
    ensure_same_len(prices.len(), returns.len())?;
    ensure_same_len(prices.len(), volatility.len())?;
    ensure_same_len(prices.len(), drawdowns.len())?;

    let total_return = (prices[prices.len() - 1] / prices[0] - 1.0) * 100.0;
    let max_drawdown = get_min(drawdowns).ok_or(AnalyticsError::EmptySeries)?;

    Ok(SummaryStats {
        total_return,
        average_return: returns.mean(),
        average_volatility: mean_of_defined(volatility),
        max_drawdown,
        sharpe_ratio: policy.sharpe_ratio(returns),
        calmar_ratio: policy.calmar_ratio(prices, drawdowns),
        ratio_policy: policy.signature().to_string(),
    })
}

fn mean_of_defined(series: &WindowedSeries) -> Option<f64> {
    if series.defined_count() == 0 {
        return None;
    }
    Some(series.defined().mean())
}

/// Aggregates shown on the volatility and rolling-statistics pages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityStats {
    pub current: Option<f64>,
    pub average: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    /// `max - min`.
    pub range: Option<f64>,
    /// Computed days strictly above `average * high_volatility_multiplier`.
    pub high_volatility_days: usize,
}

pub fn volatility_stats(
    volatility: &WindowedSeries,
    high_volatility_multiplier: f64,
) -> VolatilityStats {
    let defined: Vec<f64> = volatility.defined().collect();
    let average = mean_of_defined(volatility);
    let extremes = get_min_max(&defined);
    let high_volatility_days = average.map_or(0, |avg| {
        let cutoff = avg * high_volatility_multiplier;
        defined.iter().filter(|&&v| v > cutoff).count()
    });

    VolatilityStats {
        current: volatility.last(),
        average,
        max: extremes.map(|(_, max)| max),
        min: extremes.map(|(min, _)| min),
        range: extremes.map(|(min, max)| max - min),
        high_volatility_days,
    }
}

/// Aggregates shown on the returns page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnStats {
    /// Share of observed days with a strictly positive return.
    pub positive_days_pct: f64,
    pub best_day: Option<f64>,
    pub worst_day: Option<f64>,
    /// Mean of computed rolling-mean values.
    pub average_rolling_mean: Option<f64>,
}

/// `observed` holds real day-over-day returns only, so a full series is passed without its
/// leading zero.
pub fn return_stats(observed: &[f64], rolling_mean: &WindowedSeries) -> ReturnStats {
    let positive = observed.iter().filter(|&&r| r > 0.0).count();
    let extremes = get_min_max(observed);

    ReturnStats {
        positive_days_pct: share_pct(positive, observed.len()),
        best_day: extremes.map(|(_, max)| max),
        worst_day: extremes.map(|(min, _)| min),
        average_rolling_mean: mean_of_defined(rolling_mean),
    }
}
