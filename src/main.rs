//! SampleTask - guided sample task flow
//!
//! Main entry point for the SampleTask application.

use clap::Parser;
use sampletask::cli::CliArgs;
use sampletask::config::AppConfig;
use sampletask::flow::Session;
use sampletask::scenario::{Scenario, ScenarioRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sampletask=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    tracing::info!("Starting SampleTask");

    let config = AppConfig::load_or_default(args.config.as_deref());
    let scenario = load_scenario(&args);

    if args.headless {
        if let Some(scenario) = scenario {
            let mut session = Session::new(config);
            let code = ScenarioRunner::new(scenario).run_headless(&mut session);
            tracing::info!(
                "Headless run finished after {} screen changes",
                session.navigator().transitions()
            );
            std::process::exit(code);
        }
    }

    sampletask::ui::run(config, scenario)
}

fn load_scenario(args: &CliArgs) -> Option<Scenario> {
    let path = args.scenario.as_ref()?;
    match Scenario::load(path) {
        Ok(scenario) => Some(scenario),
        Err(e) if e.is_recoverable() => {
            tracing::warn!("{} ({})", e, e.user_message());
            None
        }
        Err(e) => {
            tracing::error!("{} ({})", e, e.user_message());
            std::process::exit(2);
        }
    }
}
