//! Simulated ambient-noise check
//!
//! The gate draws a level on entry and a worker thread keeps drawing at a
//! fixed cadence until the gate is dropped.

mod gate;
mod sampler;
mod source;

use std::ops::RangeInclusive;

/// Levels the simulated meter can report, in dB
pub const LEVEL_RANGE: RangeInclusive<u8> = 10..=55;

/// Levels strictly below this pass the gate
pub const PASS_THRESHOLD: u8 = 40;

pub use gate::NoiseGate;
pub use sampler::{NoiseReading, NoiseSampler};
pub use source::{random_levels, LevelSource, LevelSourceFactory, RandomLevels, ScriptedLevels};
