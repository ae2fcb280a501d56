//! Screen navigation
//!
//! The navigator holds the current [`Route`] together with the state of the
//! screen shown for it. Entering a route builds fresh screen state and
//! leaving it drops the old one, which is what stops the noise sampler.

use crate::config::AppConfig;
use crate::noise::{LevelSourceFactory, NoiseGate};
use crate::task::{TaskDraft, TaskKind};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{debug, info};

/// Screen identifiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Route {
    #[default]
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "noise")]
    NoiseTest,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "text")]
    TextTask,
    #[serde(rename = "image")]
    ImageTask,
    #[serde(rename = "photo")]
    PhotoTask,
    #[serde(rename = "history")]
    History,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Start,
        Route::NoiseTest,
        Route::Select,
        Route::TextTask,
        Route::ImageTask,
        Route::PhotoTask,
        Route::History,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Start => "start",
            Route::NoiseTest => "noise",
            Route::Select => "select",
            Route::TextTask => "text",
            Route::ImageTask => "image",
            Route::PhotoTask => "photo",
            Route::History => "history",
        }
    }

    /// Task kind recorded by this route's submit button
    pub fn task_kind(&self) -> Option<TaskKind> {
        match self {
            Route::TextTask => Some(TaskKind::Text),
            Route::ImageTask => Some(TaskKind::Image),
            Route::PhotoTask => Some(TaskKind::Photo),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown route '{}'", s))
    }
}

/// State owned by the screen currently shown
#[derive(Debug)]
pub enum Screen {
    Start,
    NoiseTest(NoiseGate),
    Select,
    Task(TaskDraft),
    History,
}

/// Current route plus its screen state
pub struct Navigator {
    route: Route,
    screen: Screen,
    config: AppConfig,
    levels: LevelSourceFactory,
    transitions: u64,
}

impl Navigator {
    pub fn new(config: AppConfig, levels: LevelSourceFactory) -> Self {
        Self {
            route: Route::Start,
            screen: Screen::Start,
            config,
            levels,
            transitions: 0,
        }
    }

    pub fn current_route(&self) -> Route {
        self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Number of route changes since start
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Move to `route`. Any route is reachable from any other; going to the
    /// current route keeps its screen state.
    pub fn go_to(&mut self, route: Route) {
        if route == self.route {
            debug!("Already on '{}'", route);
            return;
        }

        let from = self.route;
        // the old screen (and any sampler it owns) is dropped here
        self.screen = self.build_screen(route);
        self.route = route;
        self.transitions += 1;
        info!("Route {} -> {}", from, route);
    }

    fn build_screen(&self, route: Route) -> Screen {
        let tasks = &self.config.tasks;
        match route {
            Route::Start => Screen::Start,
            Route::NoiseTest => {
                let source = (self.levels)();
                Screen::NoiseTest(NoiseGate::start(source, &self.config.noise))
            }
            Route::Select => Screen::Select,
            Route::TextTask => Screen::Task(TaskDraft::new(
                TaskKind::Text,
                Some(tasks.passage.clone()),
                tasks.text_duration,
            )),
            Route::ImageTask => Screen::Task(TaskDraft::new(
                TaskKind::Image,
                None,
                tasks.image_duration,
            )),
            Route::PhotoTask => Screen::Task(TaskDraft::new(
                TaskKind::Photo,
                Some(String::new()),
                tasks.photo_duration,
            )),
            Route::History => Screen::History,
        }
    }

    pub fn noise_gate(&self) -> Option<&NoiseGate> {
        match &self.screen {
            Screen::NoiseTest(gate) => Some(gate),
            _ => None,
        }
    }

    pub fn noise_gate_mut(&mut self) -> Option<&mut NoiseGate> {
        match &mut self.screen {
            Screen::NoiseTest(gate) => Some(gate),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&TaskDraft> {
        match &self.screen {
            Screen::Task(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match &mut self.screen {
            Screen::Task(draft) => Some(draft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{LevelSource, ScriptedLevels};

    fn navigator() -> Navigator {
        let levels: LevelSourceFactory =
            Box::new(|| Box::new(ScriptedLevels::constant(20)) as Box<dyn LevelSource>);
        Navigator::new(AppConfig::default(), levels)
    }

    #[test]
    fn test_initial_route_is_start() {
        let nav = navigator();
        assert_eq!(nav.current_route(), Route::Start);
        assert!(matches!(nav.screen(), Screen::Start));
        assert_eq!(nav.transitions(), 0);
    }

    #[test]
    fn test_any_route_reachable_from_any_other() {
        let mut nav = navigator();
        for from in Route::ALL {
            for to in Route::ALL {
                nav.go_to(from);
                nav.go_to(to);
                assert_eq!(nav.current_route(), to);
            }
        }
    }

    #[test]
    fn test_screen_state_follows_route() {
        let mut nav = navigator();

        nav.go_to(Route::NoiseTest);
        assert_eq!(nav.noise_gate().map(NoiseGate::level), Some(20));

        nav.go_to(Route::ImageTask);
        assert!(nav.noise_gate().is_none());
        let draft = nav.draft().unwrap();
        assert_eq!(draft.kind(), TaskKind::Image);
        assert_eq!(draft.duration_seconds(), 11);
        assert_eq!(draft.text(), None);

        nav.go_to(Route::TextTask);
        assert_eq!(
            nav.draft().unwrap().text(),
            Some("This is a sample passage to read.")
        );
    }

    #[test]
    fn test_reentering_task_resets_draft() {
        let mut nav = navigator();
        nav.go_to(Route::PhotoTask);
        nav.draft_mut().unwrap().set_text("a cat");

        nav.go_to(Route::Select);
        nav.go_to(Route::PhotoTask);
        assert_eq!(nav.draft().unwrap().text(), Some(""));
    }

    #[test]
    fn test_same_route_keeps_state() {
        let mut nav = navigator();
        nav.go_to(Route::PhotoTask);
        nav.draft_mut().unwrap().set_text("a cat");
        nav.go_to(Route::PhotoTask);
        assert_eq!(nav.draft().unwrap().text(), Some("a cat"));
        assert_eq!(nav.transitions(), 1);
    }

    #[test]
    fn test_leaving_noise_test_stops_sampler() {
        let mut nav = navigator();
        nav.go_to(Route::NoiseTest);
        assert!(nav.noise_gate().unwrap().is_sampling());
        nav.go_to(Route::Select);
        assert!(nav.noise_gate().is_none());
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::NoiseTest.to_string(), "noise");
        assert_eq!("history".parse::<Route>(), Ok(Route::History));
        assert!("settings".parse::<Route>().is_err());
        for route in Route::ALL {
            assert_eq!(route.as_str().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_task_kind_per_route() {
        assert_eq!(Route::TextTask.task_kind(), Some(TaskKind::Text));
        assert_eq!(Route::ImageTask.task_kind(), Some(TaskKind::Image));
        assert_eq!(Route::PhotoTask.task_kind(), Some(TaskKind::Photo));
        assert_eq!(Route::History.task_kind(), None);
    }
}
