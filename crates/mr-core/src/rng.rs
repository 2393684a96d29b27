//! Random number generation for maze building
//!
//! Uses a seeded ChaCha RNG for reproducibility.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Maze random number generator
///
/// Wraps ChaCha8Rng for reproducible maze generation. The seed is an
/// explicit injection point: two sessions created with the same seed
/// produce identical mazes.
/// Note: RNG state is not serialized - only the seed is, so a restored
/// generator restarts its sequence from the beginning.
#[derive(Debug, Clone)]
pub struct MazeRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for MazeRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MazeRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(MazeRng::new(seed))
    }
}

impl MazeRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl Default for MazeRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
