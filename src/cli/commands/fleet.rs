//! `fuelgen fleet` command - inspect the built-in fleet

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::args::{GlobalOpts, ListFormat};
use crate::entities::fleet::standard_fleet;

use super::write_output;

#[derive(clap::Args, Debug)]
pub struct FleetArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: ListFormat,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: FleetArgs, _global: &GlobalOpts) -> Result<()> {
    let fleet = standard_fleet();

    let content = match args.format {
        ListFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["Ship", "Fuel Tank Feed", "Engine", "Engine ID", "Pumps"]);
            for ship in &fleet {
                for tank in &ship.tanks {
                    for engine in &tank.engines {
                        builder.push_record([
                            ship.name.to_string(),
                            tank.name.to_string(),
                            engine.name.to_string(),
                            ship.engine_id(engine),
                            engine.pump_count.to_string(),
                        ]);
                    }
                }
            }
            let mut out = builder.build().with(Style::markdown()).to_string();
            out.push('\n');
            out
        }
        ListFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["ship", "fuel_tank", "engine", "engine_id", "pumps"])
                .into_diagnostic()?;
            for ship in &fleet {
                for tank in &ship.tanks {
                    for engine in &tank.engines {
                        wtr.write_record([
                            ship.name.to_string(),
                            tank.name.to_string(),
                            engine.name.to_string(),
                            ship.engine_id(engine),
                            engine.pump_count.to_string(),
                        ])
                        .into_diagnostic()?;
                    }
                }
            }
            let bytes = wtr.into_inner().map_err(|e| miette::miette!("{}", e))?;
            String::from_utf8(bytes).into_diagnostic()?
        }
        ListFormat::Json => {
            let mut out = serde_json::to_string_pretty(&fleet).into_diagnostic()?;
            out.push('\n');
            out
        }
    };

    write_output(&content, args.output)
}
