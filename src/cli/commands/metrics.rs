//! `fuelgen metrics` command - fuel-quality metric ranges and drifts

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::args::{GlobalOpts, ListFormat};
use crate::entities::sample::{METRICS, NOISE_SIGMA, RESET_EVENTS};

use super::write_output;

#[derive(clap::Args, Debug)]
pub struct MetricsArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: ListFormat,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: MetricsArgs, _global: &GlobalOpts) -> Result<()> {
    let content = match args.format {
        ListFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["Metric", "Low", "High", "Drift/Month"]);
            for spec in METRICS {
                builder.push_record([
                    spec.label.to_string(),
                    spec.low.to_string(),
                    spec.high.to_string(),
                    spec.drift.to_string(),
                ]);
            }
            let mut out = builder.build().with(Style::markdown()).to_string();
            out.push('\n');
            out.push_str(&format!(
                "\nNoise sigma {} on every series; {} cleaning resets per tank.\n",
                NOISE_SIGMA, RESET_EVENTS
            ));
            out
        }
        ListFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["metric", "low", "high", "drift_per_month"])
                .into_diagnostic()?;
            for spec in METRICS {
                wtr.write_record([
                    spec.label.to_string(),
                    spec.low.to_string(),
                    spec.high.to_string(),
                    spec.drift.to_string(),
                ])
                .into_diagnostic()?;
            }
            let bytes = wtr.into_inner().map_err(|e| miette::miette!("{}", e))?;
            String::from_utf8(bytes).into_diagnostic()?
        }
        ListFormat::Json => {
            let mut out = serde_json::to_string_pretty(&METRICS).into_diagnostic()?;
            out.push('\n');
            out
        }
    };

    write_output(&content, args.output)
}
