//! Degradation curve synthesis
//!
//! Emulates slow fuel-quality decline: a linear drift with gaussian noise,
//! clipped at zero. There is no upper clip, so noise can push a value past
//! its physical range.

use rand::Rng;

/// Draw from N(0, sigma) using the Box-Muller transform
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, sigma: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0_f64 * u1.ln()).sqrt() * (2.0_f64 * std::f64::consts::PI * u2).cos();
    sigma * z
}

/// Series of length `steps` where element i = max(0, start - i*drift + N(0, noise))
pub fn degrade_series<R: Rng + ?Sized>(
    rng: &mut R,
    start: f64,
    steps: usize,
    drift: f64,
    noise: f64,
) -> Vec<f64> {
    (0..steps)
        .map(|i| (start - i as f64 * drift + gaussian(rng, noise)).max(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_series_has_requested_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(degrade_series(&mut rng, 10.0, 46, 0.1, 0.005).len(), 46);
        assert!(degrade_series(&mut rng, 10.0, 0, 0.1, 0.005).is_empty());
    }

    #[test]
    fn test_series_never_negative() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let series = degrade_series(&mut rng, 1.0, 100, 0.5, 2.0);
            assert!(series.iter().all(|&v| v >= 0.0), "seed {seed} went negative");
        }
    }

    #[test]
    fn test_zero_noise_is_pure_clipped_drift() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let series = degrade_series(&mut rng, 5.0, 20, 0.5, 0.0);
        for (i, &v) in series.iter().enumerate() {
            assert_eq!(v, (5.0 - i as f64 * 0.5).max(0.0));
        }
    }

    #[test]
    fn test_gaussian_sigma_scales_spread() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let tight: f64 = (0..1000).map(|_| gaussian(&mut rng, 0.001).abs()).sum();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let wide: f64 = (0..1000).map(|_| gaussian(&mut rng, 1.0).abs()).sum();
        assert!(wide > tight * 100.0);
    }
}
