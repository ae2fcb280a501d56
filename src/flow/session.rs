//! The session: single owner of navigation state and the task store

use super::intent::{Intent, Outcome};
use super::render::render;
use super::view::{ButtonId, View};
use crate::config::AppConfig;
use crate::navigator::{Navigator, Route};
use crate::noise::{random_levels, LevelSourceFactory, NoiseGate};
use crate::task::TaskStore;
use tracing::{debug, info, warn};

/// Session-scoped application state
pub struct Session {
    navigator: Navigator,
    store: TaskStore,
}

impl Session {
    /// Session with random noise levels
    pub fn new(config: AppConfig) -> Self {
        Self::with_levels(config, random_levels())
    }

    /// Session with a custom noise level source
    pub fn with_levels(config: AppConfig, levels: LevelSourceFactory) -> Self {
        Self {
            navigator: Navigator::new(config, levels),
            store: TaskStore::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.navigator.current_route()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        self.navigator.config()
    }

    pub fn noise_gate(&self) -> Option<&NoiseGate> {
        self.navigator.noise_gate()
    }

    pub fn noise_gate_mut(&mut self) -> Option<&mut NoiseGate> {
        self.navigator.noise_gate_mut()
    }

    pub fn render(&self) -> View {
        render(self)
    }

    /// Pull pending noise readings. Returns true if the view changed.
    pub fn tick(&mut self) -> bool {
        self.navigator.noise_gate_mut().is_some_and(NoiseGate::poll)
    }

    /// Apply one user intent.
    ///
    /// A button press only takes effect when the current view shows that
    /// button enabled, so a disabled Proceed or Submit is inert.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::ButtonPressed(id) => {
                let view = self.render();
                match view.find_button(id) {
                    Some(button) if button.enabled => self.press(id),
                    Some(_) => {
                        debug!("'{:?}' is disabled on '{}'", id, view.route);
                        Outcome::Ignored
                    }
                    None => {
                        debug!("'{:?}' is not shown on '{}'", id, view.route);
                        Outcome::Ignored
                    }
                }
            }
            Intent::TextChanged(value) => {
                if self.route() != Route::PhotoTask {
                    return Outcome::Ignored;
                }
                match self.navigator.draft_mut() {
                    Some(draft) => {
                        draft.set_text(value);
                        Outcome::Updated
                    }
                    None => Outcome::Ignored,
                }
            }
        }
    }

    fn press(&mut self, id: ButtonId) -> Outcome {
        let target = match id {
            ButtonId::StartTask => Route::NoiseTest,
            ButtonId::Proceed | ButtonId::Back => Route::Select,
            ButtonId::TextTask => Route::TextTask,
            ButtonId::ImageTask => Route::ImageTask,
            ButtonId::PhotoTask => Route::PhotoTask,
            ButtonId::History => Route::History,
            ButtonId::Submit => return self.submit(),
        };
        self.navigator.go_to(target);
        Outcome::Navigated(target)
    }

    fn submit(&mut self) -> Outcome {
        let Some(draft) = self.navigator.draft() else {
            return Outcome::Ignored;
        };

        match draft.submit() {
            Ok(record) => {
                info!(
                    "Submitted {} task {} ({}s)",
                    record.kind(),
                    record.id(),
                    record.duration_seconds()
                );
                self.store.add_task(record);
                self.navigator.go_to(Route::Select);
                Outcome::Navigated(Route::Select)
            }
            Err(e) => {
                warn!("Submission ignored: {}", e);
                Outcome::Ignored
            }
        }
    }
}
