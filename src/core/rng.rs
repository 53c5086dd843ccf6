//! Seedable random streams
//!
//! Every run is driven by a single u64 seed feeding a ChaCha8 stream, so
//! a run can be reproduced by passing the echoed seed back via `--seed`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Resolve the run seed: an explicit seed wins, otherwise OS entropy
pub fn resolve_seed(explicit: Option<u64>) -> u64 {
    explicit.unwrap_or_else(|| rand::rng().random())
}

/// Deterministic stream for a resolved seed
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_seed_wins() {
        assert_eq!(resolve_seed(Some(42)), 42);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a: Vec<u64> = {
            let mut rng = seeded(7);
            (0..8).map(|_| rng.random()).collect()
        };
        let b: Vec<u64> = {
            let mut rng = seeded(7);
            (0..8).map(|_| rng.random()).collect()
        };
        assert_eq!(a, b);

        let mut rng = seeded(8);
        let c: Vec<u64> = (0..8).map(|_| rng.random()).collect();
        assert_ne!(a, c);
    }
}
