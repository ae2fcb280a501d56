use super::sampler::NoiseSampler;
use super::source::LevelSource;
use super::{LEVEL_RANGE, PASS_THRESHOLD};
use crate::config::NoiseConfig;
use tracing::{debug, warn};

/// Latest noise level and whether it is quiet enough to proceed
pub struct NoiseGate {
    level: u8,
    samples: u64,
    sampler: Option<NoiseSampler>,
}

impl NoiseGate {
    /// Draw the first level now and keep sampling in the background
    pub fn start(mut source: Box<dyn LevelSource>, config: &NoiseConfig) -> Self {
        let level = metered(source.next_level());
        let sampler = match NoiseSampler::spawn(source, config.cadence()) {
            Ok(sampler) => Some(sampler),
            Err(e) => {
                warn!("{}; noise level will not update", e);
                None
            }
        };

        Self {
            level,
            samples: 1,
            sampler,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn passes(&self) -> bool {
        self.level < PASS_THRESHOLD
    }

    /// Number of levels taken so far, including the initial one
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn is_sampling(&self) -> bool {
        self.sampler.as_ref().is_some_and(NoiseSampler::is_running)
    }

    /// Take the newest pending reading. Returns true if the level changed.
    pub fn poll(&mut self) -> bool {
        let Some(sampler) = &self.sampler else {
            return false;
        };
        let readings = sampler.drain();
        let Some(latest) = readings.last() else {
            return false;
        };

        let level = metered(latest.level);
        let changed = level != self.level;
        self.level = level;
        self.samples += readings.len() as u64;
        debug!(
            "Noise level {} dB ({})",
            self.level,
            if self.passes() { "pass" } else { "too loud" }
        );
        changed
    }

    /// Overwrite the current level. Values off the meter are clamped.
    pub fn record_level(&mut self, level: u8) {
        self.level = metered(level);
        self.samples += 1;
    }
}

/// Clamp a level into [`LEVEL_RANGE`]
fn metered(level: u8) -> u8 {
    let clamped = level.clamp(*LEVEL_RANGE.start(), *LEVEL_RANGE.end());
    if clamped != level {
        warn!(
            "Noise level {} is off the {}..={} dB meter, using {}",
            level,
            LEVEL_RANGE.start(),
            LEVEL_RANGE.end(),
            clamped
        );
    }
    clamped
}

impl std::fmt::Debug for NoiseGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseGate")
            .field("level", &self.level)
            .field("samples", &self.samples)
            .field("sampling", &self.is_sampling())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::ScriptedLevels;
    use std::time::Duration;

    fn fixed(level: u8) -> NoiseGate {
        NoiseGate {
            level,
            samples: 1,
            sampler: None,
        }
    }

    #[test]
    fn test_passes_is_strictly_below_threshold() {
        assert!(fixed(39).passes());
        assert!(!fixed(40).passes());
        assert!(!fixed(55).passes());
        assert!(fixed(10).passes());
    }

    #[test]
    fn test_start_draws_first_level_synchronously() {
        let config = NoiseConfig::default();
        let gate = NoiseGate::start(Box::new(ScriptedLevels::new(vec![45, 20])), &config);
        assert_eq!(gate.level(), 45);
        assert!(!gate.passes());
        assert!(gate.is_sampling());
    }

    #[test]
    fn test_poll_takes_latest_reading() {
        let config = NoiseConfig { cadence_ms: 5 };
        let mut gate = NoiseGate::start(Box::new(ScriptedLevels::new(vec![50, 20])), &config);
        assert_eq!(gate.level(), 50);

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while gate.samples() < 2 && std::time::Instant::now() < deadline {
            gate.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(gate.samples() >= 2);
        assert!(gate.level() == 20 || gate.level() == 50);
    }

    #[test]
    fn test_record_level_updates_passes() {
        let mut gate = fixed(50);
        assert!(!gate.passes());
        gate.record_level(12);
        assert!(gate.passes());
        assert_eq!(gate.samples(), 2);
    }

    #[test]
    fn test_levels_off_the_meter_are_clamped() {
        let mut gate = fixed(20);
        gate.record_level(200);
        assert_eq!(gate.level(), 55);
        assert!(!gate.passes());
        gate.record_level(0);
        assert_eq!(gate.level(), 10);

        let config = NoiseConfig::default();
        let gate = NoiseGate::start(Box::new(ScriptedLevels::new(Vec::new())), &config);
        assert_eq!(gate.level(), 10);
    }

    #[test]
    fn test_gate_without_sampler_never_polls() {
        let mut gate = fixed(20);
        assert!(!gate.is_sampling());
        assert!(!gate.poll());
        assert_eq!(gate.level(), 20);
    }
}
