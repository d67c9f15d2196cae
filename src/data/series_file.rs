use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::PRINT_SERDE;
use crate::config::{SERIES_FILE_VERSION, SERIES_PATH, series_filename};
use crate::domain::PriceSeries;
use crate::utils::time_utils::consecutive_days;

fn current_version() -> f64 {
    SERIES_FILE_VERSION
}

/// On-disk JSON form of a price series.
///
/// Dates are optional. With only `start_date`, consecutive calendar days are assigned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeriesFile {
    #[serde(default = "current_version")]
    pub version: f64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<NaiveDate>>,
    pub prices: Vec<f64>,
}

impl SeriesFile {
    pub fn from_series(series: &PriceSeries) -> Self {
        Self {
            version: SERIES_FILE_VERSION,
            name: series.name().to_string(),
            start_date: None,
            dates: series.dates().map(<[NaiveDate]>::to_vec),
            prices: series.prices().to_vec(),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).context(format!("Failed to open series file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let series_file: SeriesFile = serde_json::from_reader(reader)
            .context(format!("Failed to parse series file: {}", path.display()))?;

        if series_file.version != SERIES_FILE_VERSION {
            bail!(
                "Series file version mismatch: file v{} vs required v{}",
                series_file.version,
                SERIES_FILE_VERSION
            );
        }

        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!(
                "Loaded {} ({} prices) from {}",
                series_file.name,
                series_file.prices.len(),
                path.display()
            );
        }
        Ok(series_file)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .context(format!("Failed to write series to: {}", path.display()))
    }

    /// Validate into a [`PriceSeries`]. Explicit `dates` win over `start_date`.
    pub fn into_price_series(self) -> Result<PriceSeries> {
        let dates = match (self.dates, self.start_date) {
            (Some(dates), _) => Some(dates),
            (None, Some(start)) => Some(
                consecutive_days(start, self.prices.len())
                    .context(format!("Dates starting {start} run past the calendar"))?,
            ),
            (None, None) => None,
        };

        let series = match dates {
            Some(dates) => PriceSeries::with_dates(self.name, self.prices, dates),
            None => PriceSeries::new(self.name, self.prices),
        };
        Ok(series?)
    }

    pub fn default_path(name: &str) -> PathBuf {
        PathBuf::from(SERIES_PATH).join(series_filename(name))
    }
}

/// Load and validate a series file in one step.
pub fn load_price_series(path: &Path) -> Result<PriceSeries> {
    SeriesFile::load_from_path(path)?
        .into_price_series()
        .context(format!("Invalid price series in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(file: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("strata_series_{}", std::process::id()))
            .join(file)
    }

    #[test]
    fn save_and_load_keeps_dates() {
        let dates = consecutive_days(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 3).unwrap();
        let series = PriceSeries::with_dates("SENSEX", vec![72000.0, 72450.5, 71980.0], dates)
            .unwrap();
        let path = temp_path("sensex.json");

        SeriesFile::from_series(&series).save_to_path(&path).unwrap();
        let loaded = load_price_series(&path).unwrap();
        assert_eq!(loaded, series);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn start_date_expands_to_consecutive_days() {
        let json = r#"{ "name": "NIFTY", "start_date": "2024-02-28", "prices": [1.0, 2.0, 3.0] }"#;
        let file: SeriesFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.version, SERIES_FILE_VERSION);

        let series = file.into_price_series().unwrap();
        assert_eq!(
            series.date_at(2),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn invalid_prices_are_reported() {
        let json = r#"{ "name": "BAD", "prices": [100.0, -1.0] }"#;
        let file: SeriesFile = serde_json::from_str(json).unwrap();
        let err = file.into_price_series().unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn missing_file_has_context() {
        let err = SeriesFile::load_from_path(Path::new("/no/such/series.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open series file"));
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let path = temp_path("old.json");
        let file = SeriesFile {
            version: 0.5,
            name: "OLD".to_string(),
            start_date: None,
            dates: None,
            prices: vec![1.0],
        };
        file.save_to_path(&path).unwrap();
        let err = SeriesFile::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("version mismatch"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn default_path_uses_series_directory() {
        let path = SeriesFile::default_path("Nifty 50");
        assert_eq!(path, PathBuf::from("series_data/prices_nifty_50_v1.json"));
    }
}
