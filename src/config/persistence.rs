//! File persistence and serialization configuration

/// Directory path for price series files
pub const SERIES_PATH: &str = "series_data";

/// Base filename for price series files (without extension)
pub const SERIES_FILENAME_WITHOUT_EXT: &str = "prices";

/// Current version of the series file format
pub const SERIES_FILE_VERSION: f64 = 1.0;

/// Generate a series filename for a named index
/// Example: "prices_sensex_v1.json"
pub fn series_filename(name: &str) -> String {
    format!(
        "{}_{}_v{}.json",
        SERIES_FILENAME_WITHOUT_EXT,
        name.to_lowercase().replace(' ', "_"),
        SERIES_FILE_VERSION
    )
}
