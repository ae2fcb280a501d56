//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Options given on the command line
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "sampletask",
    version,
    about = "SampleTask - guided sample task flow"
)]
pub struct CliArgs {
    /// Configuration file (default: <config dir>/sampletask/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run a scripted scenario and exit with its result
    #[arg(short = 's', long = "scenario", value_name = "PATH")]
    pub scenario: Option<PathBuf>,

    /// Run the scenario without a window
    #[arg(long = "headless", requires = "scenario")]
    pub headless: bool,
}
