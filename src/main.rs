//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_monitor` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing trace results or running the API server
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use redirect_monitor::api_server::{start_api_server, ApiState};
use redirect_monitor::config::{Command, Opt};
use redirect_monitor::initialization::init_logger_with;
use redirect_monitor::{RedirectTracker, ReqwestRequester, TrackerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so the
    // REDIRECT_MONITOR_* options can be set without exporting them
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = TrackerConfig::from(&opt);
    let requester =
        ReqwestRequester::from_config(&config).context("Failed to initialize HTTP client")?;
    let tracker = RedirectTracker::new(requester, config);

    match opt.command {
        Command::Trace { url, compact } => {
            let result = tracker.trace(&url).await;
            let json = if compact {
                serde_json::to_string(&result)
            } else {
                serde_json::to_string_pretty(&result)
            }
            .context("Failed to serialize trace result")?;
            println!("{}", json);

            if !result.success {
                process::exit(1);
            }
            Ok(())
        }
        Command::Serve { bind } => {
            if let Err(e) = start_api_server(&bind, ApiState::new(tracker)).await {
                eprintln!("redirect_monitor error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
    }
}
