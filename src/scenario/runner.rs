//! Scenario runner
//!
//! Schedules the steps of a [`Scenario`] by elapsed time and checks their
//! assertions against the session.

use super::{ActionType, Assertion, Scenario};
use crate::flow::{ButtonId, Intent, Session};
use crate::navigator::Route;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Commands the runner hands to the app
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioCommand {
    Apply(Intent),
    SetNoiseLevel(u8),
    Exit { code: i32 },
}

impl ScenarioCommand {
    /// Run the command against a session. Returns the exit code for
    /// [`ScenarioCommand::Exit`].
    pub fn execute(&self, session: &mut Session) -> Option<i32> {
        match self {
            ScenarioCommand::Apply(intent) => {
                let outcome = session.apply(intent.clone());
                info!("[SCENARIO] {:?} -> {:?}", intent, outcome);
                None
            }
            ScenarioCommand::SetNoiseLevel(level) => {
                match session.noise_gate_mut() {
                    Some(gate) => {
                        gate.record_level(*level);
                        info!("[SCENARIO] Noise level set to {}", gate.level());
                    }
                    None => warn!("[SCENARIO] Not on the noise screen, level {} ignored", level),
                }
                None
            }
            ScenarioCommand::Exit { code } => Some(*code),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssertionResult {
    Passed,
    Failed(String),
}

/// What assertions are checked against
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionContext {
    pub route: Route,
    pub task_count: usize,
    pub total_duration_seconds: u64,
    pub proceed_enabled: bool,
}

impl AssertionContext {
    pub fn from_session(session: &Session) -> Self {
        Self {
            route: session.route(),
            task_count: session.store().total_count(),
            total_duration_seconds: session.store().total_duration_seconds(),
            proceed_enabled: session.render().is_enabled(ButtonId::Proceed),
        }
    }
}

pub struct ScenarioRunner {
    scenario: Scenario,
    start_time: Option<Instant>,
    current_step: usize,
    completed: bool,
    passed: bool,
}

impl ScenarioRunner {
    pub fn new(scenario: Scenario) -> Self {
        info!("[SCENARIO] Loaded: {}", scenario.scenario.name);
        if !scenario.scenario.description.is_empty() {
            info!("[SCENARIO] Description: {}", scenario.scenario.description);
        }
        info!("[SCENARIO] Total steps: {}", scenario.steps.len());

        Self {
            scenario,
            start_time: None,
            current_step: 0,
            completed: false,
            passed: true,
        }
    }

    /// Start the clock (first frame)
    pub fn start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
            info!("[SCENARIO] Started: {}", self.scenario.scenario.name);
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Next due step, if any. Log steps are handled here and yield no command.
    pub fn poll(&mut self) -> Option<(Option<ScenarioCommand>, Option<Assertion>)> {
        if self.completed {
            return None;
        }
        let start_time = self.start_time?;

        let Some(step) = self.scenario.steps.get(self.current_step) else {
            self.completed = true;
            return None;
        };
        if start_time.elapsed() < step.delay() {
            return None;
        }

        debug!(
            "[SCENARIO] Step at {}ms: {:?}",
            step.time_ms, step.action
        );
        let command = match &step.action {
            ActionType::Press { button } => {
                Some(ScenarioCommand::Apply(Intent::ButtonPressed(*button)))
            }
            ActionType::TypeText { text } => {
                Some(ScenarioCommand::Apply(Intent::TextChanged(text.clone())))
            }
            ActionType::NoiseLevel { level } => Some(ScenarioCommand::SetNoiseLevel(*level)),
            ActionType::Log { message } => {
                info!("[SCENARIO] Log: {}", message);
                None
            }
            ActionType::Exit { code } => Some(ScenarioCommand::Exit { code: *code }),
        };
        let assertion = step.assert.clone();
        let command_is_exit = matches!(command, Some(ScenarioCommand::Exit { .. }));

        self.current_step += 1;
        // nothing runs after an exit step
        if command_is_exit || self.current_step >= self.scenario.steps.len() {
            self.completed = true;
        }

        Some((command, assertion))
    }

    pub fn check_assertion(
        &mut self,
        assertion: &Assertion,
        context: &AssertionContext,
    ) -> AssertionResult {
        let result = match assertion {
            Assertion::RouteIs { route } => {
                if context.route == *route {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "Expected route '{}', got '{}'",
                        route, context.route
                    ))
                }
            }
            Assertion::TaskCount { count } => {
                if context.task_count == *count {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "Expected {} tasks, got {}",
                        count, context.task_count
                    ))
                }
            }
            Assertion::TotalDuration { seconds } => {
                if context.total_duration_seconds == *seconds {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "Expected total duration {}s, got {}s",
                        seconds, context.total_duration_seconds
                    ))
                }
            }
            Assertion::ProceedEnabled { enabled } => {
                if context.proceed_enabled == *enabled {
                    AssertionResult::Passed
                } else {
                    AssertionResult::Failed(format!(
                        "Expected Proceed enabled = {}",
                        enabled
                    ))
                }
            }
        };

        match &result {
            AssertionResult::Passed => info!("[SCENARIO] PASS: {:?}", assertion),
            AssertionResult::Failed(reason) => {
                error!("[SCENARIO] FAIL: {:?} - {}", assertion, reason);
                self.passed = false;
            }
        }
        result
    }

    /// Drive a session without a window until the scenario completes.
    ///
    /// Returns the exit code: the scenario's own code when every assertion
    /// passed, 1 otherwise.
    pub fn run_headless(&mut self, session: &mut Session) -> i32 {
        self.start();
        let mut exit_code = None;
        while !self.completed {
            match self.poll() {
                Some((command, assertion)) => {
                    if let Some(code) = command.and_then(|c| c.execute(session)) {
                        exit_code = Some(code);
                    }
                    if let Some(assertion) = assertion {
                        let context = AssertionContext::from_session(session);
                        self.check_assertion(&assertion, &context);
                    }
                }
                // sampler readings only land between due steps
                None => {
                    session.tick();
                    std::thread::sleep(Duration::from_millis(5));
                }
            }
        }
        info!("{}", self.summary());
        self.final_exit_code(exit_code.unwrap_or(0))
    }

    /// Exit code after completion
    pub fn final_exit_code(&self, requested: i32) -> i32 {
        if self.passed {
            requested
        } else {
            1
        }
    }

    pub fn summary(&self) -> String {
        let status = if self.passed { "PASSED" } else { "FAILED" };
        format!(
            "[SCENARIO] '{}' {}: executed {} steps in {:?}",
            self.scenario.scenario.name,
            status,
            self.current_step,
            self.elapsed()
        )
    }
}
