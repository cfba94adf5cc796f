//! RNG oracle for deterministic random number generation.
//!
//! Damage variance, monster counts, template picks and loot drops all draw
//! from an [`RngOracle`]. Implementations are pure functions of a seed, so a
//! session replays identically when started from the same session seed.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// One LCG step followed by the xorshift/rotate permutation; no state is kept
/// between calls, every value is derived from the seed it is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Compute a roll seed from session components.
///
/// * `session_seed` - Seed chosen when the [`crate::GameState`] was created
/// * `nonce` - Operation sequence number (advances once per randomized operation)
/// * `subject` - Id of the character or dungeon the roll belongs to
/// * `context` - Distinguishes independent rolls inside one operation
pub fn compute_seed(session_seed: u64, nonce: u64, subject: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing constants
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(subject).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Sequence of independent rolls for one operation.
///
/// Each call advances the context counter, so consecutive rolls inside the
/// same operation never share a seed.
pub struct RollStream<'a> {
    rng: &'a dyn RngOracle,
    session_seed: u64,
    nonce: u64,
    subject: u32,
    context: u32,
}

impl<'a> RollStream<'a> {
    pub fn new(rng: &'a dyn RngOracle, session_seed: u64, nonce: u64, subject: u32) -> Self {
        Self {
            rng,
            session_seed,
            nonce,
            subject,
            context: 0,
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.session_seed, self.nonce, self.subject, self.context);
        self.context = self.context.wrapping_add(1);
        seed
    }

    /// Uniform value in `[min, max]` inclusive.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.range(seed, min, max)
    }

    /// Uniform index into a collection of `len` elements. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        let last = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.range(0, last) as usize
    }

    /// Percentage check: true with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32) -> bool {
        let seed = self.next_seed();
        self.rng.roll_d100(seed) <= percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn range_stays_inside_bounds() {
        let rng = PcgRng;
        for seed in 0..1_000 {
            let value = rng.range(seed, 5, 9);
            assert!((5..=9).contains(&value));
        }
        assert_eq!(rng.range(7, 3, 3), 3);
        assert_eq!(rng.range(7, 0, u32::MAX), rng.next_u32(7));
    }

    #[test]
    fn stream_rolls_use_distinct_seeds() {
        let rng = PcgRng;
        let mut stream = RollStream::new(&rng, 1, 0, 0);
        let rolls: Vec<u32> = (0..8).map(|_| stream.range(0, u32::MAX - 1)).collect();
        let mut unique = rolls.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), rolls.len());
    }

    #[test]
    fn compute_seed_separates_contexts() {
        let a = compute_seed(7, 3, 1, 0);
        let b = compute_seed(7, 3, 1, 1);
        let c = compute_seed(7, 4, 1, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
