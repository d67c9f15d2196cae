// Pipeline objects built from a caller-supplied series, and the views derived from them
pub mod comparison;
pub mod pipeline;
pub mod snapshot;

// Re-export key types for convenience
pub use comparison::{MarketComparison, compare};
pub use pipeline::{DerivedSeries, MarketPipeline};
pub use snapshot::{DailySnapshot, DashboardReport};
