//! Configuration module for the strata analytics pipeline.

pub mod analysis;

mod debug; // Private: callers use crate::config::PRINT_* not crate::config::debug::PRINT_*
pub use debug::{PRINT_HISTOGRAM, PRINT_PIPELINE_STAGES, PRINT_SERDE, PRINT_STRESS_NORMALIZATION};

pub mod persistence;

// Re-export commonly used items
pub use analysis::{
    ANALYSIS, AnalysisConfig, MovingAverageSettings, RegimeSettings, RiskSettings, StressSettings,
    WindowSettings,
};
pub use persistence::{SERIES_FILE_VERSION, SERIES_PATH, series_filename};
