//! GUI implementation with egui/eframe
//!
//! This module renders the session's views in a desktop window.

mod app;
pub mod components;
mod theme;

pub use app::SampleTaskApp;
pub use components::{ScreenView, TaskCard};
pub use theme::Theme;

use crate::config::AppConfig;
use crate::flow::Session;
use crate::scenario::Scenario;

/// Run the SampleTask window until it is closed
pub fn run(config: AppConfig, scenario: Option<Scenario>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 480.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "SampleTask",
        options,
        Box::new(move |cc| {
            let session = Session::new(config);
            Ok(Box::new(SampleTaskApp::new(cc, session, scenario)))
        }),
    )
}
