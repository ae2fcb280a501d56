//! Scripted scenarios for automated UI runs
//!
//! A scenario is a TOML file listing timed steps. Each step drives the
//! session with one action and may check an assertion afterwards.

mod runner;

pub use runner::{AssertionContext, AssertionResult, ScenarioCommand, ScenarioRunner};

use crate::error::{Result, SampleTaskError};
use crate::flow::ButtonId;
use crate::navigator::Route;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// A scenario loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub scenario: ScenarioMetadata,
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One timed step
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioStep {
    /// Milliseconds after the scenario starts
    pub time_ms: u64,
    pub action: ActionType,
    #[serde(default)]
    pub assert: Option<Assertion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionType {
    /// Press a control on the current screen
    Press { button: ButtonId },
    /// Replace the text of the current text field
    TypeText { text: String },
    /// Force the noise gate to a level (no-op off the noise screen)
    NoiseLevel { level: u8 },
    Log { message: String },
    Exit {
        #[serde(default)]
        code: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    RouteIs { route: Route },
    TaskCount { count: usize },
    TotalDuration { seconds: u64 },
    ProceedEnabled { enabled: bool },
}

impl Scenario {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SampleTaskError::ScenarioError(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            SampleTaskError::ScenarioError(msg) => {
                SampleTaskError::ScenarioError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let scenario: Scenario =
            toml::from_str(content).map_err(|e| SampleTaskError::ScenarioError(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(SampleTaskError::ScenarioError(
                "Scenario must have at least one step".to_string(),
            ));
        }

        let mut last_time = 0;
        for step in &self.steps {
            if step.time_ms < last_time {
                return Err(SampleTaskError::ScenarioError(format!(
                    "Steps must be ordered by time. Found step at {}ms after step at {}ms",
                    step.time_ms, last_time
                )));
            }
            last_time = step.time_ms;
        }

        let exits = self
            .steps
            .iter()
            .filter(|s| matches!(s.action, ActionType::Exit { .. }))
            .count();
        if exits == 0 {
            return Err(SampleTaskError::ScenarioError(
                "Scenario must have an exit step".to_string(),
            ));
        }
        let ends_with_exit = self
            .steps
            .last()
            .is_some_and(|s| matches!(s.action, ActionType::Exit { .. }));
        if exits > 1 || !ends_with_exit {
            return Err(SampleTaskError::ScenarioError(
                "The exit step must be the last step".to_string(),
            ));
        }

        Ok(())
    }
}

impl ScenarioStep {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}
