//! `fuelgen failures` command - renewal-process failure log

use std::path::PathBuf;

use chrono::NaiveDate;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::renewal::{simulate_failures, RenewalOptions};
use crate::core::rng;
use crate::entities::fleet::{standard_fleet, PumpNaming};

use super::{confirm_overwrite, report_written, stamp_output, write_csv};

#[derive(clap::Args, Debug)]
pub struct FailuresArgs {
    /// Output CSV path
    #[arg(long, short = 'o', default_value = "pump_failure_log.csv")]
    pub out: PathBuf,

    /// Append a generation timestamp to the filename
    #[arg(long)]
    pub timestamp: bool,

    /// Overwrite an existing output file without prompting
    #[arg(long)]
    pub force: bool,

    /// Date the simulation starts from (YYYY-MM-DD)
    #[arg(long, default_value = "2021-01-01")]
    pub base_date: String,

    /// Failure events to simulate per pump
    #[arg(long, default_value_t = 12)]
    pub events: u32,

    /// Pump identifier style
    #[arg(long, value_enum, default_value = "numeric")]
    pub pump_naming: PumpNaming,
}

pub fn run(args: FailuresArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let seed = rng::resolve_seed(global.seed.or(config.seed));
    let mut rng = rng::seeded(seed);

    let base_date =
        NaiveDate::parse_from_str(&args.base_date, "%Y-%m-%d").into_diagnostic()?;

    let fleet = standard_fleet();
    let opts = RenewalOptions {
        base_date,
        events_per_pump: args.events,
        pump_naming: args.pump_naming,
    };

    if global.verbose {
        let pumps: u32 = fleet.iter().map(|s| s.pump_total()).sum();
        println!(
            "Simulating {} events for each of {} pumps from {}",
            args.events, pumps, base_date
        );
    }

    let rows = simulate_failures(&mut rng, &fleet, &opts);

    let out = stamp_output(&config.resolve_output(&args.out), args.timestamp);
    confirm_overwrite(&out, args.force)?;
    write_csv(&rows, &out)?;
    report_written(rows.len(), &out, seed, global.quiet);

    Ok(())
}
