//! Analysis and computation configuration

use serde::{Deserialize, Serialize};

/// Window sizes for the return-based rolling statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    // Trailing days for rolling (population) standard deviation of returns
    pub volatility: usize,
    // Trailing days for the rolling mean of returns
    pub rolling_mean: usize,
}

/// Price moving averages shown on the trend page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageSettings {
    pub short: usize,
    pub medium: usize,
    pub long: usize,
}

/// Weights of the composite stress index (sum must be 100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressSettings {
    pub volatility_weight: f64,
    pub drawdown_weight: f64,
    pub momentum_weight: f64,
    // Absolute daily return (in %) above which the full momentum weight applies
    pub momentum_cap_pct: f64,
    // Below the cap the momentum score is |return| * multiplier
    pub momentum_multiplier: f64,
    // Days strictly above this stress value count as high-stress days
    pub high_stress_threshold: f64,
}

/// Fixed breakpoints of the regime labeler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeSettings {
    // Lowest stress value labelled Volatile
    pub volatile_from: f64,
    // Lowest stress value labelled Crisis
    pub crisis_from: f64,
}

/// Settings for the risk-adjusted ratios and the risk pages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    pub trading_days_per_year: f64,
    // Annual risk-free rate in percent, used by the Sharpe ratio
    pub risk_free_rate_pct: f64,
    // Drawdowns below this level (in %) count as significant drawdown days
    pub significant_drawdown_pct: f64,
    // Volatility above average * multiplier counts as a high-volatility day
    pub high_volatility_multiplier: f64,
}

/// The Master Analysis Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub windows: WindowSettings,
    pub moving_averages: MovingAverageSettings,
    pub stress: StressSettings,
    pub regime: RegimeSettings,
    pub risk: RiskSettings,
    // Number of trailing days in a dashboard snapshot when the caller gives no limit
    pub default_snapshot_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        ANALYSIS
    }
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    windows: WindowSettings {
        volatility: 20,
        rolling_mean: 20,
    },

    moving_averages: MovingAverageSettings {
        short: 10,
        medium: 20,
        long: 50,
    },

    stress: StressSettings {
        volatility_weight: 40.0,
        drawdown_weight: 40.0,
        momentum_weight: 20.0,
        momentum_cap_pct: 2.0,
        momentum_multiplier: 5.0,
        high_stress_threshold: 60.0,
    },

    regime: RegimeSettings {
        volatile_from: 30.0,
        crisis_from: 60.0,
    },

    risk: RiskSettings {
        trading_days_per_year: 252.0,
        risk_free_rate_pct: 0.0,
        significant_drawdown_pct: -5.0,
        high_volatility_multiplier: 1.5,
    },

    default_snapshot_limit: 100,
};
