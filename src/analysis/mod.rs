// Pure analytics transforms over ordered daily series
pub mod correlation;
pub mod drawdown;
pub mod histogram;
pub mod regime;
pub mod returns;
pub mod rolling;
pub mod stress;
pub mod summary;
pub mod trend;

// Re-export commonly used types
pub use correlation::{CorrelationStrength, correlate};
pub use drawdown::{DrawdownStats, compute_drawdowns, drawdown_stats};
pub use histogram::{HistogramBucket, ReturnBucket, bin_returns};
pub use regime::{
    RegimeCounts, RegimePolicy, RegimeShare, ThresholdRegimePolicy, classify_regime,
    detect_regimes,
};
pub use returns::build_returns;
pub use rolling::{rolling_mean, rolling_std_dev, simple_moving_average};
pub use stress::{
    StressLevel, StressNormalization, StressStats, compute_causal_stress_index,
    compute_stress_index, compute_stress_index_with, score_day, stress_stats,
};
pub use summary::{
    AnnualizedRatios, ReturnStats, RiskAdjustedPolicy, SummaryStats, SuppliedRatios,
    VolatilityStats, return_stats, summarize, summarize_with, volatility_stats,
};
pub use trend::{TrendDirection, detect_trend};
