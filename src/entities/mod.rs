//! Domain entities - the synthetic fleet and its measurements
//!
//! - [`Ship`], [`TankFeed`], [`Engine`] - the fixed fleet hierarchy
//! - [`FuelSample`], [`TankSeries`] - fuel-quality measurements over time
//! - [`SampleRow`], [`FailureReportRow`], [`FailureLogRow`] - flat CSV records

pub mod fleet;
pub mod record;
pub mod sample;

pub use fleet::{pump_label, standard_fleet, Engine, PumpNaming, Ship, TankFeed};
pub use record::{FailureLogRow, FailureReportRow, SampleRow};
pub use sample::{FuelSample, MetricSpec, Sampling, TankSeries, METRICS};
