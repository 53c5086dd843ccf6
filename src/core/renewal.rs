//! Per-pump renewal-process failure simulation
//!
//! Each pump walks forward from a base date: derive a failure time from
//! the current fuel sample, step the calendar, record an event. After an
//! event the tank-side fuel baseline may be re-drawn, emulating periodic
//! maintenance.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::core::failure::{failure_time, round2};
use crate::entities::fleet::{pump_label, PumpNaming, Ship};
use crate::entities::record::FailureLogRow;
use crate::entities::sample::FuelSample;

/// Chance that a failure is followed by a maintenance reset of the
/// pump's fuel baseline
pub const RESET_PROBABILITY: f64 = 1.0 / 6.0;

/// Knobs for one simulation run
#[derive(Debug, Clone)]
pub struct RenewalOptions {
    /// Date the walk starts from
    pub base_date: NaiveDate,

    /// Failure events to generate per pump
    pub events_per_pump: u32,

    /// Pump identifier style
    pub pump_naming: PumpNaming,
}

/// Simulate the failure log for the whole fleet. Events are spaced one
/// calendar day per failure hour.
pub fn simulate_failures<R: Rng + ?Sized>(
    rng: &mut R,
    fleet: &[Ship],
    opts: &RenewalOptions,
) -> Vec<FailureLogRow> {
    let mut rows = Vec::new();

    for ship in fleet {
        for tank in &ship.tanks {
            let baseline = FuelSample::draw(rng);

            for engine in &tank.engines {
                for pump in 1..=engine.pump_count {
                    let mut sample = baseline;
                    let mut clock = opts.base_date;

                    for _ in 0..opts.events_per_pump {
                        let hours = failure_time(rng, &sample);
                        clock = clock + Duration::days(hours as i64);

                        rows.push(FailureLogRow {
                            ship: ship.name.to_string(),
                            engine: engine.name.to_string(),
                            engine_id: ship.engine_id(engine),
                            pump_id: pump_label(engine, pump, opts.pump_naming),
                            fuel_tank: tank.name.to_string(),
                            failure_date: clock,
                            time_til_failure: hours,
                            cfu: round2(sample.cfu),
                            water_content: round2(sample.water_content),
                            filter_block: round2(sample.filter_block),
                        });

                        if rng.random_bool(RESET_PROBABILITY) {
                            sample = FuelSample::draw(rng);
                        }
                    }
                }
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::failure::MIN_FAILURE_HOURS;
    use crate::entities::fleet::standard_fleet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn options(events: u32) -> RenewalOptions {
        RenewalOptions {
            base_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            events_per_pump: events,
            pump_naming: PumpNaming::Numeric,
        }
    }

    #[test]
    fn test_event_count_is_pumps_times_events() {
        let fleet = standard_fleet();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let rows = simulate_failures(&mut rng, &fleet, &options(5));
        // 2 ships x 56 pumps x 5 events
        assert_eq!(rows.len(), 560);
    }

    #[test]
    fn test_dates_strictly_increase_per_pump() {
        let fleet = standard_fleet();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let rows = simulate_failures(&mut rng, &fleet, &options(8));
        // Rows for one pump are contiguous, eight at a time
        for walk in rows.chunks(8) {
            assert!(walk.iter().all(|r| r.pump_id == walk[0].pump_id));
            assert!(walk.windows(2).all(|w| w[0].failure_date < w[1].failure_date));
        }
    }

    #[test]
    fn test_failure_times_respect_floor() {
        let fleet = standard_fleet();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for row in simulate_failures(&mut rng, &fleet, &options(6)) {
            assert!(row.time_til_failure >= MIN_FAILURE_HOURS);
        }
    }

    #[test]
    fn test_zero_events_yields_empty_log() {
        let fleet = standard_fleet();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(simulate_failures(&mut rng, &fleet, &options(0)).is_empty());
    }
}
