use anyhow::Result;
use clap::Parser;

use strata_analytics::{Cli, OutputFormat, run_cli};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Run the pipeline(s)
    let report = run_cli(&args)?;
    log::info!(
        "Analysed {} days of {} ({})",
        report.dashboard.total_days,
        report.dashboard.name,
        report.dashboard.summary.ratio_policy
    );

    // D. Print
    match args.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print!("{report}"),
    }
    Ok(())
}
