//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests click through the real screen renderer and check the
//! session state behind it.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use sampletask::config::AppConfig;
use sampletask::flow::Session;
use sampletask::navigator::Route;
use sampletask::noise::{LevelSource, LevelSourceFactory, ScriptedLevels};
use sampletask::task::TaskKind;
use sampletask::ui::{SampleTaskApp, Theme};
use std::time::Duration;

fn app_with_level(config: AppConfig, level: u8) -> SampleTaskApp {
    let levels: LevelSourceFactory =
        Box::new(move || Box::new(ScriptedLevels::constant(level)) as Box<dyn LevelSource>);
    // slow cadence keeps the noise screen from asking for frames
    let config = config.with_cadence(Duration::from_secs(60));
    SampleTaskApp::with_theme(Session::with_levels(config, levels), Theme::light(), None)
}

fn harness(app: SampleTaskApp) -> Harness<'static, SampleTaskApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(420.0, 720.0))
        .build_state(|ctx, app: &mut SampleTaskApp| app.show(ctx), app)
}

/// Run a fixed number of frames
fn frames(harness: &mut Harness<'_, SampleTaskApp>, count: usize) {
    for _ in 0..count {
        harness.step();
    }
}

fn click(harness: &mut Harness<'_, SampleTaskApp>, label: &str) {
    harness.get_by_label(label).click();
    frames(harness, 2);
}

#[test]
fn test_start_screen_renders() {
    let mut harness = harness(app_with_level(AppConfig::default(), 20));
    frames(&mut harness, 1);

    let _heading = harness.get_by_label("Let's start with a Sample Task for practice.");
    let _hint = harness.get_by_label("Pehele hum ek sample task karte hain.");
    let _button = harness.get_by_label("Start Sample Task");
}

#[test]
fn test_quiet_room_reaches_selection() {
    let mut harness = harness(app_with_level(AppConfig::default(), 25));
    frames(&mut harness, 1);

    click(&mut harness, "Start Sample Task");
    assert_eq!(harness.state().session().route(), Route::NoiseTest);
    let _level = harness.get_by_label("Noise level: 25 dB");
    let _status = harness.get_by_label("Good to proceed");

    click(&mut harness, "Proceed");
    assert_eq!(harness.state().session().route(), Route::Select);
    let _text = harness.get_by_label("Text Reading Task");
    let _image = harness.get_by_label("Image Description Task");
    let _photo = harness.get_by_label("Photo Capture Task");
    let _history = harness.get_by_label("Task History");
}

#[test]
fn test_loud_room_proceed_is_inert() {
    let mut harness = harness(app_with_level(AppConfig::default(), 50));
    frames(&mut harness, 1);

    click(&mut harness, "Start Sample Task");
    let _alert = harness.get_by_label("Please move to a quieter place");

    click(&mut harness, "Proceed");
    assert_eq!(harness.state().session().route(), Route::NoiseTest);
}

#[test]
fn test_text_task_submission_through_ui() {
    let mut harness = harness(app_with_level(AppConfig::default(), 20));
    frames(&mut harness, 1);

    click(&mut harness, "Start Sample Task");
    click(&mut harness, "Proceed");
    click(&mut harness, "Text Reading Task");
    let _passage = harness.get_by_label("This is a sample passage to read.");
    let _duration = harness.get_by_label("Simulated recording duration: 12s");

    click(&mut harness, "Submit");
    let session = harness.state().session();
    assert_eq!(session.route(), Route::Select);
    assert_eq!(session.store().total_count(), 1);
    assert_eq!(session.store().total_duration_seconds(), 12);
}

#[test]
fn test_photo_description_is_typed() {
    let mut harness = harness(app_with_level(AppConfig::default(), 20));
    harness.state_mut().session_mut().navigator_mut().go_to(Route::PhotoTask);
    frames(&mut harness, 1);

    harness.get_by_label("Description").focus();
    frames(&mut harness, 1);
    harness.get_by_label("Description").type_text("a yellow kite");
    frames(&mut harness, 2);

    assert_eq!(
        harness.state().session().navigator().draft().unwrap().text(),
        Some("a yellow kite")
    );

    click(&mut harness, "Submit");
    let records = harness.state().session().store().get_all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind(), TaskKind::Photo);
    assert_eq!(records[0].text(), Some("a yellow kite"));
}

#[test]
fn test_out_of_range_submit_is_inert() {
    let config = AppConfig::default().with_durations(12, 25, 15);
    let mut harness = harness(app_with_level(config, 20));
    harness.state_mut().session_mut().navigator_mut().go_to(Route::ImageTask);
    frames(&mut harness, 1);

    let _duration = harness.get_by_label("Simulated recording duration: 25s");
    click(&mut harness, "Submit");

    let session = harness.state().session();
    assert_eq!(session.route(), Route::ImageTask);
    assert!(session.store().is_empty());
}

#[test]
fn test_history_shows_totals_and_back() {
    let mut harness = harness(app_with_level(AppConfig::default(), 20));
    harness.state_mut().session_mut().navigator_mut().go_to(Route::Select);
    frames(&mut harness, 1);

    click(&mut harness, "Image Description Task");
    click(&mut harness, "Submit");
    click(&mut harness, "Task History");

    assert_eq!(harness.state().session().route(), Route::History);
    let _count = harness.get_by_label("Total Tasks: 1");
    let _total = harness.get_by_label("Total Duration: 11s");
    let _summary = harness.get_by_label("By type: text 0, image 1, photo 0");
    let _kind = harness.get_by_label("Type: image");
    let _text = harness.get_by_label("Text: -");

    click(&mut harness, "Back");
    assert_eq!(harness.state().session().route(), Route::Select);
}
