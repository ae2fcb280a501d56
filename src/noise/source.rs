//! Sources of simulated noise levels

use super::LEVEL_RANGE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Produces one noise level per call
pub trait LevelSource: Send + 'static {
    fn next_level(&mut self) -> u8;
}

/// Builds a fresh source each time the noise screen is entered
pub type LevelSourceFactory = Box<dyn Fn() -> Box<dyn LevelSource>>;

/// Factory for uniformly random levels over [`LEVEL_RANGE`]
pub fn random_levels() -> LevelSourceFactory {
    Box::new(|| Box::new(RandomLevels::new(LEVEL_RANGE)) as Box<dyn LevelSource>)
}

/// Uniformly random levels in an inclusive range
pub struct RandomLevels {
    rng: StdRng,
    range: RangeInclusive<u8>,
}

impl RandomLevels {
    pub fn new(range: RangeInclusive<u8>) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            range,
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64, range: RangeInclusive<u8>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }
}

impl LevelSource for RandomLevels {
    fn next_level(&mut self) -> u8 {
        self.rng.gen_range(self.range.clone())
    }
}

/// Repeats a fixed list of levels in order
#[derive(Debug, Clone)]
pub struct ScriptedLevels {
    levels: Vec<u8>,
    next: usize,
}

impl ScriptedLevels {
    /// An empty list behaves like a constant zero reading
    pub fn new(levels: Vec<u8>) -> Self {
        Self { levels, next: 0 }
    }

    pub fn constant(level: u8) -> Self {
        Self::new(vec![level])
    }
}

impl LevelSource for ScriptedLevels {
    fn next_level(&mut self) -> u8 {
        if self.levels.is_empty() {
            return 0;
        }
        let level = self.levels[self.next % self.levels.len()];
        self.next = self.next.wrapping_add(1);
        level
    }
}
