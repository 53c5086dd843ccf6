//! Fuel-quality metrics, samples and per-tank monthly series
//!
//! Eight measured properties of a fuel sample, each with a plausible base
//! range and a monthly drift rate. Series values are clipped at zero only;
//! drift may carry a value below its base range, and noise may push it
//! above the range's upper bound.

use clap::ValueEnum;
use rand::seq::index;
use rand::Rng;
use serde::Serialize;

use crate::core::degrade::degrade_series;

/// Base range and monthly drift for one fuel-quality metric
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricSpec {
    /// Column label, including units
    pub label: &'static str,

    /// Lower bound of the base range
    pub low: f64,

    /// Upper bound of the base range
    pub high: f64,

    /// Decline per month under the drift sampling scheme
    pub drift: f64,
}

impl MetricSpec {
    /// Fresh uniform draw from the base range
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.low..=self.high)
    }
}

pub const DENSITY: MetricSpec =
    MetricSpec { label: "Density (kg/m3)", low: 800.0, high: 820.0, drift: 0.5 };
pub const WATER_REACTION: MetricSpec =
    MetricSpec { label: "Water Reaction Vol Change (ml)", low: 0.5, high: 2.5, drift: 0.1 };
pub const FLASH_POINT: MetricSpec =
    MetricSpec { label: "Flash Point (celsius)", low: 60.0, high: 70.0, drift: 0.5 };
pub const FILTER_BLOCK: MetricSpec =
    MetricSpec { label: "Filter Blocking Tendency", low: 1.0, high: 3.0, drift: 0.2 };
pub const CLOUD_POINT: MetricSpec =
    MetricSpec { label: "Cloud Point (celsius)", low: -10.0, high: 5.0, drift: 0.2 };
pub const SULPHUR: MetricSpec =
    MetricSpec { label: "Sulphur (%)", low: 0.05, high: 0.3, drift: 0.01 };
pub const CFU: MetricSpec =
    MetricSpec { label: "Colony Forming Units (CFU/ml)", low: 10.0, high: 100.0, drift: 5.0 };
pub const WATER_CONTENT: MetricSpec =
    MetricSpec { label: "Water content (mg/kg)", low: 50.0, high: 200.0, drift: 10.0 };

/// All metrics in column order
pub const METRICS: [MetricSpec; 8] = [
    DENSITY,
    WATER_REACTION,
    FLASH_POINT,
    FILTER_BLOCK,
    CLOUD_POINT,
    SULPHUR,
    CFU,
    WATER_CONTENT,
];

/// Gaussian noise sigma shared by every degradation series
pub const NOISE_SIGMA: f64 = 0.005;

/// Cleaning/refuel discontinuities injected per tank series
pub const RESET_EVENTS: usize = 3;

/// One fuel-quality measurement across all eight metrics
#[derive(Debug, Clone, Copy)]
pub struct FuelSample {
    pub density: f64,
    pub water_reaction: f64,
    pub flash_point: f64,
    pub filter_block: f64,
    pub cloud_point: f64,
    pub sulphur: f64,
    pub cfu: f64,
    pub water_content: f64,
}

impl FuelSample {
    /// Fresh sample drawn uniformly from the base ranges
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            density: DENSITY.draw(rng),
            water_reaction: WATER_REACTION.draw(rng),
            flash_point: FLASH_POINT.draw(rng),
            filter_block: FILTER_BLOCK.draw(rng),
            cloud_point: CLOUD_POINT.draw(rng),
            sulphur: SULPHUR.draw(rng),
            cfu: CFU.draw(rng),
            water_content: WATER_CONTENT.draw(rng),
        }
    }
}

/// Sampling scheme for the monthly series
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Linear drift plus gaussian noise, with cleaning resets
    #[default]
    Drift,
    /// Independent uniform draw per step, no drift or resets
    Resample,
}

/// Monthly series for every metric of one tank feed
#[derive(Debug, Clone)]
pub struct TankSeries {
    pub density: Vec<f64>,
    pub water_reaction: Vec<f64>,
    pub flash_point: Vec<f64>,
    pub filter_block: Vec<f64>,
    pub cloud_point: Vec<f64>,
    pub sulphur: Vec<f64>,
    pub cfu: Vec<f64>,
    pub water_content: Vec<f64>,
}

impl TankSeries {
    /// Synthesize series of length `steps` for one tank feed
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, steps: usize, sampling: Sampling) -> Self {
        let mut series = match sampling {
            Sampling::Drift => Self {
                density: drifted(rng, &DENSITY, steps),
                water_reaction: drifted(rng, &WATER_REACTION, steps),
                flash_point: drifted(rng, &FLASH_POINT, steps),
                filter_block: drifted(rng, &FILTER_BLOCK, steps),
                cloud_point: drifted(rng, &CLOUD_POINT, steps),
                sulphur: drifted(rng, &SULPHUR, steps),
                cfu: drifted(rng, &CFU, steps),
                water_content: drifted(rng, &WATER_CONTENT, steps),
            },
            Sampling::Resample => Self {
                density: resampled(rng, &DENSITY, steps),
                water_reaction: resampled(rng, &WATER_REACTION, steps),
                flash_point: resampled(rng, &FLASH_POINT, steps),
                filter_block: resampled(rng, &FILTER_BLOCK, steps),
                cloud_point: resampled(rng, &CLOUD_POINT, steps),
                sulphur: resampled(rng, &SULPHUR, steps),
                cfu: resampled(rng, &CFU, steps),
                water_content: resampled(rng, &WATER_CONTENT, steps),
            },
        };

        // A cleaning event resets the whole tank at once: the same indices
        // are re-drawn across all eight series.
        if sampling == Sampling::Drift && steps > 0 {
            for i in index::sample(rng, steps, steps.min(RESET_EVENTS)) {
                series.density[i] = DENSITY.draw(rng);
                series.water_reaction[i] = WATER_REACTION.draw(rng);
                series.flash_point[i] = FLASH_POINT.draw(rng);
                series.filter_block[i] = FILTER_BLOCK.draw(rng);
                series.cloud_point[i] = CLOUD_POINT.draw(rng);
                series.sulphur[i] = SULPHUR.draw(rng);
                series.cfu[i] = CFU.draw(rng);
                series.water_content[i] = WATER_CONTENT.draw(rng);
            }
        }

        series
    }

    /// The sample measured at step `i`
    pub fn sample_at(&self, i: usize) -> FuelSample {
        FuelSample {
            density: self.density[i],
            water_reaction: self.water_reaction[i],
            flash_point: self.flash_point[i],
            filter_block: self.filter_block[i],
            cloud_point: self.cloud_point[i],
            sulphur: self.sulphur[i],
            cfu: self.cfu[i],
            water_content: self.water_content[i],
        }
    }

    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }
}

fn drifted<R: Rng + ?Sized>(rng: &mut R, spec: &MetricSpec, steps: usize) -> Vec<f64> {
    let start = spec.draw(rng);
    degrade_series(rng, start, steps, spec.drift, NOISE_SIGMA)
}

fn resampled<R: Rng + ?Sized>(rng: &mut R, spec: &MetricSpec, steps: usize) -> Vec<f64> {
    (0..steps).map(|_| spec.draw(rng)).collect()
}
