//! Process randomness behind an injectable seam.
//!
//! Problem seeds and the courtesy pre-request delay both draw from an
//! [`Entropy`] source, so callers and tests can pin them.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Smallest randomly chosen problem seed.
pub const MIN_RANDOM_SEED: i64 = 1;
/// Largest randomly chosen problem seed.
pub const MAX_RANDOM_SEED: i64 = 999_999;

pub trait Entropy {
    /// A problem seed in `MIN_RANDOM_SEED..=MAX_RANDOM_SEED`.
    fn problem_seed(&mut self) -> i64;

    /// A delay drawn uniformly from `[0, max)`. Zero when `max` is zero.
    fn throttle_delay(&mut self, max: Duration) -> Duration;
}

/// [`Entropy`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl RngEntropy<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Entropy for RngEntropy<R> {
    fn problem_seed(&mut self) -> i64 {
        self.rng.gen_range(MIN_RANDOM_SEED..=MAX_RANDOM_SEED)
    }

    fn throttle_delay(&mut self, max: Duration) -> Duration {
        if max.is_zero() {
            return Duration::ZERO;
        }
        max.mul_f64(self.rng.gen_range(0.0..1.0))
    }
}

/// Deterministic [`Entropy`] for tests and scripted runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEntropy {
    pub seed: i64,
    pub delay: Duration,
}

impl FixedEntropy {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            delay: Duration::ZERO,
        }
    }
}

impl Entropy for FixedEntropy {
    fn problem_seed(&mut self) -> i64 {
        self.seed
    }

    fn throttle_delay(&mut self, max: Duration) -> Duration {
        self.delay.min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_entropy_stays_in_bounds() {
        let mut entropy = RngEntropy::new(StdRng::seed_from_u64(7));
        let max = Duration::from_millis(250);

        for _ in 0..500 {
            let seed = entropy.problem_seed();
            assert!((MIN_RANDOM_SEED..=MAX_RANDOM_SEED).contains(&seed));

            let delay = entropy.throttle_delay(max);
            assert!(delay <= max, "{delay:?} exceeds {max:?}");
        }
    }

    #[test]
    fn seeded_rng_entropy_is_reproducible() {
        let mut first = RngEntropy::new(StdRng::seed_from_u64(42));
        let mut second = RngEntropy::new(StdRng::seed_from_u64(42));
        assert_eq!(first.problem_seed(), second.problem_seed());
    }

    #[test]
    fn zero_max_disables_delay() {
        let mut entropy = RngEntropy::new(StdRng::seed_from_u64(1));
        assert_eq!(entropy.throttle_delay(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn fixed_entropy_caps_delay_at_max() {
        let mut entropy = FixedEntropy {
            seed: 5,
            delay: Duration::from_secs(3),
        };
        assert_eq!(entropy.problem_seed(), 5);
        assert_eq!(
            entropy.throttle_delay(Duration::from_millis(10)),
            Duration::from_millis(10)
        );
    }
}
