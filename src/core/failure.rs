//! Failure-time model
//!
//! Maps a fuel-quality sample to simulated hours-of-operation before a
//! fuel pump fails. Stateless: purely a function of the sample and the
//! noise multiplier.

use rand::Rng;

use crate::entities::sample::FuelSample;

/// Hours a pump lasts on perfectly clean fuel
pub const BASE_FAILURE_HOURS: f64 = 10_000.0;

/// Floor below which failure times are clamped
pub const MIN_FAILURE_HOURS: f64 = 200.0;

/// Noise multiplier range applied to the degradation factor
pub const MULTIPLIER_LOW: f64 = 0.8;
pub const MULTIPLIER_HIGH: f64 = 1.2;

/// Deterministic part of the degradation factor. Divisor inputs are
/// floored at 1 so a pristine sample cannot zero the factor.
pub fn degradation_factor(sample: &FuelSample) -> f64 {
    sample.cfu.max(1.0) / 100.0
        + sample.water_content.max(1.0) / 200.0
        + sample.filter_block.max(1.0) / 3.0
}

/// Failure time in hours with a pinned noise multiplier
pub fn failure_time_with_multiplier(sample: &FuelSample, multiplier: f64) -> f64 {
    let hours = BASE_FAILURE_HOURS / (degradation_factor(sample) * multiplier);
    round2(hours.max(MIN_FAILURE_HOURS))
}

/// Failure time in hours with the usual U(0.8, 1.2) noise multiplier
pub fn failure_time<R: Rng + ?Sized>(rng: &mut R, sample: &FuelSample) -> f64 {
    failure_time_with_multiplier(sample, rng.random_range(MULTIPLIER_LOW..=MULTIPLIER_HIGH))
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample(cfu: f64, water_content: f64, filter_block: f64) -> FuelSample {
        FuelSample {
            density: 810.0,
            water_reaction: 1.5,
            flash_point: 65.0,
            filter_block,
            cloud_point: 0.0,
            sulphur: 0.1,
            cfu,
            water_content,
        }
    }

    #[test]
    fn test_worked_example_bad_fuel() {
        // factor = 100/100 + 200/200 + 3/3 = 3.0
        let t = failure_time_with_multiplier(&sample(100.0, 200.0, 3.0), 1.0);
        assert_eq!(t, 3333.33);
    }

    #[test]
    fn test_worked_example_good_fuel_has_no_upper_clamp() {
        // factor = 0.01 + 0.005 + 1/3; well above the 200h floor
        let t = failure_time_with_multiplier(&sample(1.0, 1.0, 1.0), 1.0);
        assert!((t - 28708.13).abs() < 0.01);
    }

    #[test]
    fn test_floor_at_200_hours() {
        let t = failure_time_with_multiplier(&sample(1_000_000.0, 1.0, 1.0), 1.0);
        assert_eq!(t, 200.0);
    }

    #[test]
    fn test_inputs_floored_at_one() {
        // Zeroed inputs behave exactly like inputs of 1
        let zeroed = failure_time_with_multiplier(&sample(0.0, 0.0, 0.0), 1.0);
        let ones = failure_time_with_multiplier(&sample(1.0, 1.0, 1.0), 1.0);
        assert_eq!(zeroed, ones);
    }

    #[test]
    fn test_worse_quality_never_extends_life() {
        let base = sample(50.0, 100.0, 2.0);
        let t0 = failure_time_with_multiplier(&base, 1.0);
        for bump in [1.0, 10.0, 50.0] {
            assert!(failure_time_with_multiplier(&sample(50.0 + bump, 100.0, 2.0), 1.0) <= t0);
            assert!(failure_time_with_multiplier(&sample(50.0, 100.0 + bump, 2.0), 1.0) <= t0);
            assert!(failure_time_with_multiplier(&sample(50.0, 100.0, 2.0 + bump), 1.0) <= t0);
        }
    }

    #[test]
    fn test_randomized_failure_times_respect_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let s = FuelSample::draw(&mut rng);
            let t = failure_time(&mut rng, &s);
            assert!(t >= MIN_FAILURE_HOURS);
            assert!(t.is_finite());
        }
    }
}
