use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest jitter added to a score (inclusive)
pub const MAX_JITTER: u32 = 9;

/// Source of the small random bonus that spreads otherwise-tied scores
///
/// Implementations are owned by a single ranking call; nothing here is shared
/// between calls.
pub trait JitterSource {
    /// Next jitter value, expected within `0..=MAX_JITTER`
    fn next_jitter(&mut self) -> u32;
}

/// Uniform jitter drawn from a random number generator
pub struct RandomJitter<R = StdRng> {
    rng: R,
}

impl RandomJitter<StdRng> {
    /// Fresh generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator (tests, `--seed`)
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_jitter(&mut self) -> u32 {
        self.rng.gen_range(0..=MAX_JITTER)
    }
}

/// Constant jitter, used to pin exact scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedJitter(pub u32);

impl FixedJitter {
    pub const ZERO: FixedJitter = FixedJitter(0);
}

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_jitter_stays_in_range() {
        let mut jitter = RandomJitter::seeded(7);
        let mut seen = [false; (MAX_JITTER + 1) as usize];

        for _ in 0..2_000 {
            let value = jitter.next_jitter();
            assert!(value <= MAX_JITTER);
            seen[value as usize] = true;
        }

        // Uniform over 0..=9, so every value shows up in 2000 draws
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);

        let first: Vec<u32> = (0..20).map(|_| a.next_jitter()).collect();
        let second: Vec<u32> = (0..20).map(|_| b.next_jitter()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_jitter() {
        let mut jitter = FixedJitter(4);
        assert_eq!(jitter.next_jitter(), 4);
        assert_eq!(FixedJitter::ZERO.next_jitter(), 0);
    }
}
