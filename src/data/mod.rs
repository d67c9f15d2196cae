// Loading and saving price series files
pub mod series_file;

// Re-export commonly used types
pub use series_file::{SeriesFile, load_price_series};
