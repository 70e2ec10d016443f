//! Phasor Tracker - Entry Point
//!
//! Parses the command line, sets up logging, loads the config and runs an
//! interactive session on stdin/stdout.

use clap::Parser;
use phasor_tracker::command::{run_session, Prompter};
use phasor_tracker::core::config::TrackerConfig;
use phasor_tracker::core::error::Result;
use phasor_tracker::session::Session;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Track characters whose health lives on the complex plane
#[derive(Parser, Debug)]
#[command(name = "phasor-tracker")]
#[command(about = "Interactive tracker for complex-plane health and phase")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "phasor_tracker=warn")]
    log: String,

    /// Skip the welcome banner
    #[arg(long)]
    no_welcome: bool,

    /// Draw diagrams without colour
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with prompts
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };
    if args.no_welcome {
        config.show_welcome = false;
    }
    if args.no_color {
        config.diagram.color = false;
    }
    tracing::info!("Phasor Tracker starting with {:?}", config.phase_policy);

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_session(&mut session, &mut prompter)
}
