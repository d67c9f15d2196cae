// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use analysis::{
    bin_returns, build_returns, classify_regime, compute_drawdowns, compute_stress_index,
    correlate, rolling_mean, rolling_std_dev, simple_moving_average, summarize,
};
pub use config::{ANALYSIS, AnalysisConfig};
pub use data::{SeriesFile, load_price_series};
pub use domain::{PriceSeries, RegimeLabel, WindowedSeries};
pub use error::{AnalyticsError, AnalyticsResult, ErrorKind};
pub use models::{DashboardReport, MarketComparison, MarketPipeline, compare};
pub use report::CliReport;

use std::path::PathBuf;

use anyhow::{Context, Result};
// CLI argument parsing
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Market stress and regime analytics over daily price series", long_about = None)]
pub struct Cli {
    /// Series file to analyse
    #[arg(long)]
    pub series: PathBuf,

    /// Second series file, compared day by day against the first
    #[arg(long)]
    pub compare: Option<PathBuf>,

    /// Number of trailing days in the dashboard view
    #[arg(long)]
    pub limit: Option<usize>,

    /// Rolling volatility window in days
    #[arg(long)]
    pub volatility_window: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl Cli {
    /// The analysis configuration with any command-line overrides applied.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = ANALYSIS;
        if let Some(window) = self.volatility_window {
            config.windows.volatility = window;
        }
        config
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(ANALYSIS.default_snapshot_limit)
    }
}

/// Load the requested series, run the pipeline(s) and build the report.
pub fn run_cli(args: &Cli) -> Result<CliReport> {
    let config = args.analysis_config();
    let primary = load_price_series(&args.series)?;

    let (pipeline, other) = match &args.compare {
        Some(path) => {
            let secondary = load_price_series(path)?;
            let (left, right) = rayon::join(
                || MarketPipeline::new(primary, &config),
                || MarketPipeline::new(secondary, &config),
            );
            (left?, Some(right?))
        }
        None => (MarketPipeline::new(primary, &config)?, None),
    };

    let dashboard = DashboardReport::build(&pipeline, args.limit())
        .context(format!("Failed to build report for {}", pipeline.series().name()))?;
    let comparison = other
        .map(|other| MarketComparison::from_pipelines(&pipeline, &other))
        .transpose()
        .context("Failed to compare series")?;

    Ok(CliReport {
        dashboard,
        comparison,
    })
}
