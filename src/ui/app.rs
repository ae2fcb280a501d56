//! Main SampleTask application struct and eframe integration

use crate::flow::{Intent, Session};
use crate::navigator::Route;
use crate::scenario::{AssertionContext, AssertionResult, Scenario, ScenarioRunner};
use crate::ui::components::ScreenView;
use crate::ui::theme::Theme;
use egui::{CentralPanel, RichText, TopBottomPanel};
use tracing::{debug, info};

/// Main SampleTask application
pub struct SampleTaskApp {
    /// Whether the app has been initialized
    initialized: bool,
    /// Navigation state and completed tasks
    session: Session,
    /// UI theme
    theme: Theme,
    /// Scenario runner (if running a scripted scenario)
    scenario: Option<ScenarioRunner>,
    /// Exit code requested by the scenario (if any)
    pending_exit: Option<i32>,
}

impl SampleTaskApp {
    /// Create the application and style the egui context
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: Session,
        scenario: Option<Scenario>,
    ) -> Self {
        let theme = Theme::for_scheme(session.config().window.dark);
        theme.apply(&cc.egui_ctx);
        Self::with_theme(session, theme, scenario)
    }

    /// Create the application without touching any egui context
    pub fn with_theme(session: Session, theme: Theme, scenario: Option<Scenario>) -> Self {
        Self {
            initialized: false,
            session,
            theme,
            scenario: scenario.map(ScenarioRunner::new),
            pending_exit: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Initialize the application (called on first frame)
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        if let Some(ref mut runner) = self.scenario {
            runner.start();
        }

        info!("SampleTask UI initialized on '{}'", self.session.route());
    }

    /// Draw one frame and apply whatever the user did in it
    pub fn show(&mut self, ctx: &egui::Context) {
        if self.session.tick() {
            debug!("Noise level updated");
        }

        let view = self.session.render();

        TopBottomPanel::top("title_bar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&view.title)
                        .size(18.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
            });

        let intents: Vec<Intent> = CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| ScreenView::new(&view, &self.theme).show(ui))
            .inner;

        for intent in intents {
            self.session.apply(intent);
        }

        // keep the noise reading moving while the check is on screen
        if self.session.route() == Route::NoiseTest {
            ctx.request_repaint_after(self.session.config().noise.cadence());
        }
    }

    /// Process due scenario steps
    fn process_scenario(&mut self, ctx: &egui::Context) {
        let mut pending = Vec::new();
        if let Some(ref mut runner) = self.scenario {
            while let Some(step) = runner.poll() {
                pending.push(step);
            }
        }

        for (command, assertion) in pending {
            if let Some(code) = command.and_then(|c| c.execute(&mut self.session)) {
                info!("[SCENARIO] Exit requested with code {}", code);
                self.pending_exit = Some(code);
            }

            if let Some(ref assertion) = assertion {
                let context = AssertionContext::from_session(&self.session);
                if let Some(ref mut runner) = self.scenario {
                    let result = runner.check_assertion(assertion, &context);
                    if matches!(result, AssertionResult::Failed(_)) && self.pending_exit == Some(0)
                    {
                        self.pending_exit = Some(1);
                    }
                }
            }
        }

        if let Some(ref runner) = self.scenario {
            if runner.is_completed() {
                info!("{}", runner.summary());
                if let Some(code) = self.pending_exit.take() {
                    let final_code = runner.final_exit_code(code);
                    info!("[SCENARIO] Exiting with code {}", final_code);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    std::process::exit(final_code);
                }
            }
        }
    }
}

impl eframe::App for SampleTaskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize();

        self.process_scenario(ctx);

        // scenarios are timed, so keep frames coming
        if self.scenario.is_some() {
            ctx.request_repaint();
        }

        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let store = self.session.store();
        info!(
            "SampleTask shutting down: {} tasks, {}s recorded, {} screen changes",
            store.total_count(),
            store.total_duration_seconds(),
            self.session.navigator().transitions()
        );
        match store.to_json() {
            Ok(json) => debug!("Session tasks: {}", json),
            Err(e) => debug!("Could not serialize session tasks: {}", e),
        }
    }
}
