//! Monthly dataset assembly
//!
//! Cross product of ships x tank feeds x months x engines x pumps, with
//! per-pump cumulative running hours deciding whether a failure is
//! recorded in a given month.

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;

use crate::core::failure::{failure_time, round2, round3};
use crate::entities::fleet::{pump_label, PumpNaming, Ship};
use crate::entities::record::{FailureReportRow, SampleRow};
use crate::entities::sample::{Sampling, TankSeries};

/// Average running hours a pump accumulates per month
pub const HOURS_PER_MONTH: f64 = 730.0;

/// Knobs for one dataset build
#[derive(Debug, Clone)]
pub struct DatasetOptions {
    /// Month-start dates, in order
    pub months: Vec<NaiveDate>,

    /// Sampling scheme for the metric series
    pub sampling: Sampling,

    /// Pump identifier style
    pub pump_naming: PumpNaming,
}

/// Exact row count a build will produce
pub fn expected_rows(fleet: &[Ship], months: usize) -> usize {
    fleet.iter().map(|s| s.pump_total() as usize).sum::<usize>() * months
}

/// Build the full dataset in ship -> tank -> month -> engine -> pump order
pub fn build_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    fleet: &[Ship],
    opts: &DatasetOptions,
) -> Vec<SampleRow> {
    let mut rows = Vec::with_capacity(expected_rows(fleet, opts.months.len()));

    for ship in fleet {
        for tank in &ship.tanks {
            let series = TankSeries::generate(rng, opts.months.len(), opts.sampling);
            // Running-hours counters survive across months within this
            // tank block, one per (engine, pump).
            let mut cumulative: HashMap<(usize, u32), f64> = HashMap::new();

            for (i, &date) in opts.months.iter().enumerate() {
                let sample = series.sample_at(i);

                for (engine_idx, engine) in tank.engines.iter().enumerate() {
                    for pump in 1..=engine.pump_count {
                        let hours = cumulative.entry((engine_idx, pump)).or_insert(0.0);

                        // A pump fails in its first month, or once its
                        // running hours reach a freshly drawn threshold.
                        // The recorded time is an independent draw.
                        let time_til_failure =
                            if *hours == 0.0 || *hours >= failure_time(rng, &sample) {
                                *hours = 0.0;
                                Some(failure_time(rng, &sample))
                            } else {
                                None
                            };
                        *hours += HOURS_PER_MONTH;

                        rows.push(SampleRow {
                            ship: ship.name.to_string(),
                            engine: engine.name.to_string(),
                            engine_id: ship.engine_id(engine),
                            pump_id: pump_label(engine, pump, opts.pump_naming),
                            time_til_failure,
                            fuel_tank: tank.name.to_string(),
                            date,
                            density: round2(sample.density),
                            water_reaction: round2(sample.water_reaction),
                            flash_point: round2(sample.flash_point),
                            filter_block: round2(sample.filter_block),
                            cloud_point: round2(sample.cloud_point),
                            sulphur: round3(sample.sulphur),
                            cfu: round2(sample.cfu),
                            water_content: round2(sample.water_content),
                        });
                    }
                }
            }
        }
    }

    rows
}

/// Derive the secondary failure-report table: the dataset's failure
/// events keyed by fuel tank and date
pub fn failure_report(rows: &[SampleRow]) -> Vec<FailureReportRow> {
    let mut report: Vec<FailureReportRow> = rows
        .iter()
        .filter_map(|r| {
            r.time_til_failure.map(|t| FailureReportRow {
                fuel_tank: r.fuel_tank.clone(),
                date: r.date,
                ship: r.ship.clone(),
                engine: r.engine.clone(),
                pump_id: r.pump_id.clone(),
                time_til_failure: t,
            })
        })
        .collect();

    report.sort_by(|a, b| {
        (a.fuel_tank.as_str(), a.date, a.ship.as_str(), a.pump_id.as_str()).cmp(&(
            b.fuel_tank.as_str(),
            b.date,
            b.ship.as_str(),
            b.pump_id.as_str(),
        ))
    });
    report
}
