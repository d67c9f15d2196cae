// Domain types and value objects
pub mod price_series;
pub mod regime;
pub mod windowed;

// Re-export commonly used types
pub use price_series::{PriceSeries, validate_prices};
pub use regime::RegimeLabel;
pub use windowed::WindowedSeries;
