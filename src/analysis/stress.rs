//! Composite market stress index (0-100).
//!
//! The score for a day combines three components with fixed weights (40/40/20 by
//! default): rolling volatility relative to the largest observed volatility, drawdown
//! depth relative to the deepest observed drawdown, and the size of that day's move.
//!
//! Scoring is split into a statistic pass ([`StressNormalization`]) and a pure per-day
//! scoring pass ([`score_day`]).
//!
//! NOTE: [`compute_stress_index`] normalizes against extremes of the *whole* series, so
//! each day's value depends on data that lies in its future. That is fine for
//! retrospective analysis but not for causal/online use; use
//! [`compute_causal_stress_index`] when a day may only see its own past.

use itertools::izip;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::config::{ANALYSIS, PRINT_STRESS_NORMALIZATION, RegimeSettings, StressSettings};
use crate::domain::WindowedSeries;
use crate::error::{AnalyticsError, AnalyticsResult, ensure_same_len};
use crate::utils::maths_utils::{get_max, get_min};

/// Extremes that the volatility and drawdown components are scaled against.
///
/// `None` means the component can never be non-zero (no computed volatility above
/// zero, or a series that never declines), and the component scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressNormalization {
    pub max_volatility: Option<f64>,
    pub min_drawdown: Option<f64>,
}

impl StressNormalization {
    pub fn new(max_volatility: Option<f64>, min_drawdown: Option<f64>) -> Self {
        Self {
            max_volatility: max_volatility.filter(|v| *v > 0.0),
            min_drawdown: min_drawdown.filter(|d| *d < 0.0),
        }
    }

    /// Extremes over the entire series (look-ahead; see module docs).
    pub fn whole_sample(volatility: &WindowedSeries, drawdowns: &[f64]) -> Self {
        let defined: Vec<f64> = volatility.defined().collect();
        let normalization = Self::new(get_max(&defined), get_min(drawdowns));

        if PRINT_STRESS_NORMALIZATION {
            log::info!(
                "Stress normalization: max volatility {:?}, min drawdown {:?}",
                normalization.max_volatility,
                normalization.min_drawdown
            );
        }

        normalization
    }
}

/// Stress for a single day given precomputed normalization extremes.
///
/// `volatility` is `None` during the rolling-window warm-up.
pub fn score_day(
    volatility: Option<f64>,
    drawdown: f64,
    ret: f64,
    normalization: &StressNormalization,
    weights: &StressSettings,
) -> f64 {
    let vol_score = match (volatility, normalization.max_volatility) {
        (Some(vol), Some(max_vol)) if vol > 0.0 => vol / max_vol * weights.volatility_weight,
        _ => 0.0,
    };

    let dd_score = match normalization.min_drawdown {
        Some(min_dd) if drawdown < 0.0 => drawdown.abs() / min_dd.abs() * weights.drawdown_weight,
        _ => 0.0,
    };

    let abs_ret = ret.abs();
    let momentum_score = if abs_ret > weights.momentum_cap_pct {
        weights.momentum_weight
    } else {
        abs_ret * weights.momentum_multiplier
    };

    (vol_score + dd_score + momentum_score).clamp(0.0, 100.0)
}

/// Whole-sample normalized stress index with the default weights.
pub fn compute_stress_index(
    volatility: &WindowedSeries,
    drawdowns: &[f64],
    returns: &[f64],
) -> AnalyticsResult<Vec<f64>> {
    compute_stress_index_with(volatility, drawdowns, returns, &ANALYSIS.stress)
}

pub fn compute_stress_index_with(
    volatility: &WindowedSeries,
    drawdowns: &[f64],
    returns: &[f64],
    weights: &StressSettings,
) -> AnalyticsResult<Vec<f64>> {
    check_inputs(volatility, drawdowns, returns)?;

    let normalization = StressNormalization::whole_sample(volatility, drawdowns);
    Ok(
        izip!(volatility.values(), drawdowns, returns)
            .map(|(vol, &dd, &ret)| score_day(*vol, dd, ret, &normalization, weights))
            .collect(),
    )
}

/// Stress index where day `i` is normalized only by extremes observed on days `0..=i`.
pub fn compute_causal_stress_index(
    volatility: &WindowedSeries,
    drawdowns: &[f64],
    returns: &[f64],
    weights: &StressSettings,
) -> AnalyticsResult<Vec<f64>> {
    check_inputs(volatility, drawdowns, returns)?;

    let mut max_vol: Option<f64> = None;
    let mut min_dd: Option<f64> = None;

    Ok(izip!(volatility.values(), drawdowns, returns)
        .map(|(vol, &dd, &ret)| {
            if let Some(v) = *vol {
                max_vol = Some(max_vol.map_or(v, |m| m.max(v)));
            }
            min_dd = Some(min_dd.map_or(dd, |m| m.min(dd)));
            let normalization = StressNormalization::new(max_vol, min_dd);
            score_day(*vol, dd, ret, &normalization, weights)
        })
        .collect())
}

fn check_inputs(
    volatility: &WindowedSeries,
    drawdowns: &[f64],
    returns: &[f64],
) -> AnalyticsResult<()> {
    if returns.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }
    ensure_same_len(volatility.len(), drawdowns.len())?;
    ensure_same_len(drawdowns.len(), returns.len())
}

/// Display band for a stress value (same breakpoints as the regime labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn from_stress(stress: f64, thresholds: &RegimeSettings) -> Self {
        if stress < thresholds.volatile_from {
            StressLevel::Low
        } else if stress < thresholds.crisis_from {
            StressLevel::Moderate
        } else {
            StressLevel::High
        }
    }
}

/// Aggregates shown on the stress index page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressStats {
    pub current: f64,
    pub current_level: StressLevel,
    pub average: f64,
    pub peak: f64,
    /// Days strictly above the high-stress threshold.
    pub high_stress_days: usize,
}

pub fn stress_stats(
    stress: &[f64],
    high_stress_threshold: f64,
    thresholds: &RegimeSettings,
) -> AnalyticsResult<StressStats> {
    let peak = get_max(stress).ok_or(AnalyticsError::EmptySeries)?;
    let current = stress[stress.len() - 1];

    Ok(StressStats {
        current,
        current_level: StressLevel::from_stress(current, thresholds),
        average: stress.mean(),
        peak,
        high_stress_days: stress
            .iter()
            .filter(|&&s| s > high_stress_threshold)
            .count(),
    })
}
