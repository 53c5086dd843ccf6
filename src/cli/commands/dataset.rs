//! `fuelgen dataset` command - monthly fuel-analysis dataset

use std::path::PathBuf;

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::calendar::{month_starts, parse_month};
use crate::core::config::Config;
use crate::core::dataset::{build_dataset, failure_report, DatasetOptions};
use crate::core::rng;
use crate::entities::fleet::{standard_fleet, PumpNaming};
use crate::entities::sample::Sampling;

use super::{confirm_overwrite, report_written, stamp_output, write_csv};

#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// Output CSV path
    #[arg(long, short = 'o', default_value = "complete_ship_fuel_analysis.csv")]
    pub out: PathBuf,

    /// Append a generation timestamp to the filename
    #[arg(long)]
    pub timestamp: bool,

    /// Overwrite an existing output file without prompting
    #[arg(long)]
    pub force: bool,

    /// First month of the range (YYYY-MM)
    #[arg(long, default_value = "2021-01")]
    pub start: String,

    /// Last month of the range, inclusive (YYYY-MM)
    #[arg(long, default_value = "2024-10")]
    pub end: String,

    /// Sampling scheme for the monthly series
    #[arg(long, value_enum, default_value = "drift")]
    pub sampling: Sampling,

    /// Pump identifier style
    #[arg(long, value_enum, default_value = "numeric")]
    pub pump_naming: PumpNaming,

    /// Also write the failure-report table to this path
    #[arg(long)]
    pub failure_report: Option<PathBuf>,
}

pub fn run(args: DatasetArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let seed = rng::resolve_seed(global.seed.or(config.seed));
    let mut rng = rng::seeded(seed);

    let start = parse_month(&args.start).map_err(|e| miette::miette!("{}", e))?;
    let end = parse_month(&args.end).map_err(|e| miette::miette!("{}", e))?;
    let months = month_starts(start, end).map_err(|e| miette::miette!("{}", e))?;

    let fleet = standard_fleet();
    let opts = DatasetOptions {
        months,
        sampling: args.sampling,
        pump_naming: args.pump_naming,
    };

    if global.verbose {
        let pumps: u32 = fleet.iter().map(|s| s.pump_total()).sum();
        println!(
            "Generating {} months x {} pumps, {:?} sampling",
            opts.months.len(),
            pumps,
            args.sampling
        );
    }

    let rows = build_dataset(&mut rng, &fleet, &opts);

    let out = stamp_output(&config.resolve_output(&args.out), args.timestamp);
    confirm_overwrite(&out, args.force)?;
    write_csv(&rows, &out)?;
    report_written(rows.len(), &out, seed, global.quiet);

    if let Some(report_path) = args.failure_report {
        let report = failure_report(&rows);
        let report_path = stamp_output(&config.resolve_output(&report_path), args.timestamp);
        confirm_overwrite(&report_path, args.force)?;
        write_csv(&report, &report_path)?;
        if !global.quiet {
            println!(
                "{} Wrote {} failure events to {}",
                style("✓").green(),
                report.len(),
                style(report_path.display()).cyan()
            );
        }
    }

    Ok(())
}
